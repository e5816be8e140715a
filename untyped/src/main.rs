use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use lambda_untyped::{
    are_isomorphic, beta_reduce, de_bruijn_index, eta_reduce, parse, try_rename, Fuel,
    Identifier, Strategy, TermRef, DEFAULT_FUEL,
};

#[derive(Parser, Debug)]
#[command(version, about = "Untyped lambda calculus: `\\x.body` abstracts, `(f x)` applies")]
struct Cli {
    /// Reduction depth budget
    #[arg(long, short, env = "LAMBDA_FUEL", default_value_t = DEFAULT_FUEL)]
    fuel: Fuel,
    /// Evaluation order used by `reduce`
    #[arg(
        long,
        short,
        env = "LAMBDA_STRATEGY",
        value_enum,
        default_value_t = Strategy::NormalOrder
    )]
    strategy: Strategy,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the parsed term
    Parse { term: String },
    /// Show the term with De Bruijn indices
    DeBruijn { term: String },
    /// Show the eta-reduced term
    Eta { term: String },
    /// Show the beta-reduced term
    Reduce { term: String },
    /// Tell whether two terms are alpha-equivalent
    Iso { lhs: String, rhs: String },
    /// Rename the binder `old` to `new`
    Rename {
        term: String,
        old: String,
        new: String,
    },
}

fn parse_or_report(input: &str) -> Result<TermRef> {
    match parse(input) {
        Ok(term) => Ok(term),
        Err(es) => {
            util::eprint_errors(input, &es)?;
            Err(anyhow!("Failed to parse `{input}`"))
        }
    }
}

fn exec(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse { term } => {
            let term = parse_or_report(&term)?;
            println!("{term}");
        }
        Command::DeBruijn { term } => {
            let term = parse_or_report(&term)?;
            println!("{}", de_bruijn_index(&term));
        }
        Command::Eta { term } => {
            let term = parse_or_report(&term)?;
            println!("{}", eta_reduce(&term));
        }
        Command::Reduce { term } => {
            let term = parse_or_report(&term)?;
            log::info!("reducing {term} with {} and fuel {}", cli.strategy, cli.fuel);
            let reduced = beta_reduce(&term, cli.fuel, cli.strategy)?;
            println!("{reduced}");
        }
        Command::Iso { lhs, rhs } => {
            let lhs = parse_or_report(&lhs)?;
            let rhs = parse_or_report(&rhs)?;
            println!("{}", are_isomorphic(&lhs, &rhs));
        }
        Command::Rename { term, old, new } => {
            let term = parse_or_report(&term)?;
            let renamed = try_rename(&term, Identifier::new(&new)?, &old)?;
            println!("{renamed}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    exec(Cli::parse())
}
