use log::{debug, trace};
use thiserror::Error;

use crate::{
    analysis::{all_names, free_names, occurs_bound},
    eta::eta_reduce,
    names::NameGenerator,
    prelude::*,
    subst::{rename_binder, substitute},
    term::{Term, TermRef},
};

#[derive(PartialEq, Eq, Debug, Error)]
pub enum ReduceError {
    #[error("Reduction strategy `{0}` cannot reduce applications")]
    UnsupportedStrategy(Strategy),
}
pub type Result<T> = std::result::Result<T, ReduceError>;

/// Remaining reduction depth. Every nested reduction call consumes one unit.
pub type Fuel = usize;

pub const DEFAULT_FUEL: Fuel = 50;

#[derive(
    PartialEq, Eq, Clone, Copy, Default, derive_more::Display, clap::ValueEnum, Debug,
)]
pub enum Strategy {
    /// Leftmost-outermost; arguments are substituted unreduced.
    #[default]
    #[display(fmt = "normal-order")]
    NormalOrder,
    /// Normal order with the callee eta-reduced first and stuck callees left
    /// as they are. Reaches normal forms of fixed-point combinator terms.
    #[display(fmt = "y-combinator")]
    YCombinator,
    #[display(fmt = "call-by-name")]
    CallByName,
    #[display(fmt = "call-by-value")]
    CallByValue,
}

impl Strategy {
    fn reduces_under_binders(self) -> bool {
        !matches!(self, Strategy::CallByName | Strategy::CallByValue)
    }
}

/// Drives beta-reduction of one term with one strategy.
///
/// The reducer owns the generator of names used for alpha-conversion, so
/// fresh names are unique within a reduction run and start over in the next.
#[derive(Debug)]
pub struct Reducer {
    strategy: Strategy,
    names: NameGenerator,
}

impl Reducer {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            names: NameGenerator::new(),
        }
    }

    /// Reduces `term` until it is normal or `fuel` runs out, returning the
    /// partially reduced term in the latter case.
    pub fn reduce(&mut self, term: &TermRef, fuel: Fuel) -> Result<TermRef> {
        if fuel == 0 {
            debug!("out of fuel at {term}");
            return Ok(term.clone());
        }
        let fuel = fuel - 1;
        let term = eta_reduce(term);
        trace!("[{fuel}] {term}");
        match term.as_ref() {
            Term::Var(_) => Ok(term.clone()),
            Term::Abs(param, body) => {
                if self.strategy.reduces_under_binders() {
                    Ok(Term::abs(param.clone(), self.reduce(body, fuel)?))
                } else {
                    Ok(term.clone())
                }
            }
            Term::Apply(callee, arg) => match self.strategy {
                Strategy::NormalOrder => self.reduce_apply_normal_order(&term, callee, arg, fuel),
                Strategy::YCombinator => self.reduce_apply_y_combinator(&term, callee, arg, fuel),
                strategy @ (Strategy::CallByName | Strategy::CallByValue) => {
                    Err(ReduceError::UnsupportedStrategy(strategy))
                }
            },
        }
    }

    fn reduce_apply_normal_order(
        &mut self,
        term: &TermRef,
        callee: &TermRef,
        arg: &TermRef,
        fuel: Fuel,
    ) -> Result<TermRef> {
        if fuel == 0 {
            return Ok(term.clone());
        }
        let callee = self.reduce(callee, fuel)?;
        match callee.as_ref() {
            Term::Abs(param, body) => {
                let contracted = self.reduce_core(param, body, arg);
                self.reduce(&contracted, fuel)
            }
            // Stuck: the callee does not reduce to a function.
            _ => Ok(Term::apply(
                self.reduce(&callee, fuel)?,
                self.reduce(arg, fuel)?,
            )),
        }
    }

    fn reduce_apply_y_combinator(
        &mut self,
        term: &TermRef,
        callee: &TermRef,
        arg: &TermRef,
        fuel: Fuel,
    ) -> Result<TermRef> {
        if fuel == 0 {
            return Ok(term.clone());
        }
        let callee = self.reduce(&eta_reduce(callee), fuel)?;
        match callee.as_ref() {
            Term::Abs(param, body) => {
                let contracted = self.reduce_core(param, body, arg);
                self.reduce(&contracted, fuel)
            }
            _ => Ok(Term::apply(callee.clone(), self.reduce(arg, fuel)?)),
        }
    }

    /// Contracts the redex `(λparam.body arg)`.
    ///
    /// Binders of the abstraction that share a name with a free variable of
    /// `arg` are renamed to fresh names first, so the substitution cannot
    /// capture it.
    pub fn reduce_core(&mut self, param: &Identifier, body: &TermRef, arg: &TermRef) -> TermRef {
        let names_in_arg = all_names(arg);
        let mut param = param.clone();
        let mut body = body.clone();
        for name in free_names(arg).iter() {
            if param.as_str() != name.as_str() && !occurs_bound(&body, name) {
                continue;
            }
            let taken = all_names(&body)
                .add(param.clone())
                .union(names_in_arg.clone());
            let fresh = self.names.fresh(&taken);
            debug!("renaming bound {name} to {fresh}");
            (param, body) = rename_binder(&param, &body, &fresh, name);
        }
        substitute(&body, &param, arg)
    }
}

/// Reduces `term` with a reducer of its own.
pub fn beta_reduce(term: &TermRef, fuel: Fuel, strategy: Strategy) -> Result<TermRef> {
    Reducer::new(strategy).reduce(term, fuel)
}
