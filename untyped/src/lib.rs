pub mod analysis;
pub mod beta;
pub mod combinators;
pub mod debruijn;
pub mod eta;
pub mod names;
pub mod parser;
pub mod prelude;
pub mod subst;
pub mod term;

pub use analysis::{all_names, occurs_bound, occurs_free, occurs_free_under};
pub use beta::{beta_reduce, Fuel, ReduceError, Reducer, Strategy, DEFAULT_FUEL};
pub use debruijn::{are_isomorphic, de_bruijn_index};
pub use eta::eta_reduce;
pub use names::{NameGenerator, NameSet};
pub use parser::{parse, ParseError};
pub use prelude::Identifier;
pub use subst::{rename, substitute, try_rename};
pub use term::{Term, TermRef};
