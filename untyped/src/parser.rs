use chumsky::prelude::*;

use crate::{
    prelude::*,
    term::{Term, TermRef},
};

pub trait SimpleParser<I: Clone + std::hash::Hash, O>: Parser<I, O, Error = Simple<I>> {}
impl<I: Clone + std::hash::Hash, O, T> SimpleParser<I, O> for T where
    T: Parser<I, O, Error = Simple<I>>
{
}

pub type ParseError = Simple<String>;

#[derive(PartialEq, Eq, Hash, Clone, derive_more::Display, Debug)]
pub enum Token {
    #[display(fmt = "(")]
    LParen,
    #[display(fmt = ")")]
    RParen,
    #[display(fmt = ".")]
    Dot,
    #[display(fmt = "\\")]
    Lambda,
    #[display(fmt = "{}", "_0")]
    Ident(String),
}

/// Splits the input into punctuation and identifiers, skipping whitespace.
///
/// An identifier is a maximal run of characters other than whitespace and
/// `(`, `)`, `.`, `\`, `λ`.
pub fn lexer() -> impl SimpleParser<char, Vec<(Token, Span)>> {
    let ident = filter(|c: &char| is_identifier_char(*c))
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(Token::Ident)
        .labelled("identifier");
    let token = choice((
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        just('.').to(Token::Dot),
        one_of("\\λ").to(Token::Lambda),
        ident,
    ));
    token
        .map_with_span(|token, span| (token, span))
        .padded()
        .repeated()
        .then_ignore(end())
}

/// `term := var | "\" var "." term | "(" term term ")"`
fn term_parser() -> impl SimpleParser<Token, TermRef> {
    recursive(|term: Recursive<_, TermRef, _>| {
        let ident = select! {
            Token::Ident(ident) => ident,
        }
        .try_map(|ident, span| Identifier::new(&ident).map_err(|e| Simple::custom(span, e)))
        .labelled("identifier");

        let abs = just(Token::Lambda)
            .ignore_then(ident.clone())
            .then_ignore(just(Token::Dot))
            .then(term.clone())
            .map(|(param, body)| Term::abs(param, body))
            .labelled("abstraction");

        let apply = term
            .clone()
            .then(term)
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map(|(callee, arg)| Term::apply(callee, arg))
            .labelled("application");

        choice((abs, apply, ident.map(Term::var)))
    })
    .labelled("term")
}

fn stringify<T: ToString + std::hash::Hash + Eq>(es: Vec<Simple<T>>) -> Vec<ParseError> {
    es.into_iter().map(|e| e.map(|e| e.to_string())).collect()
}

/// Reports every identifier token that is not a valid [`Identifier`].
fn check_identifiers(tokens: &[(Token, Span)]) -> Result<(), Vec<ParseError>> {
    let errors = tokens
        .iter()
        .filter_map(|(token, span)| match token {
            Token::Ident(name) => Identifier::new(name)
                .err()
                .map(|e| Simple::custom(span.clone(), e)),
            _ => None,
        })
        .collect::<Vec<_>>();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parses exactly one term spanning the whole input.
pub fn parse(s: &str) -> Result<TermRef, Vec<ParseError>> {
    let len = s.chars().count();
    let eoi = len..len + 1;
    let tokens = lexer().parse(s).map_err(stringify)?;
    check_identifiers(&tokens)?;
    term_parser()
        .then_ignore(end())
        .parse(chumsky::Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(stringify)
}
