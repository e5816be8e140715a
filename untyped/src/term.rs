use std::rc::Rc;

use crate::prelude::*;

pub type TermRef = Rc<Term>;

/// A term of the untyped lambda calculus.
///
/// Terms are never mutated; rewrites build new nodes and share every subtree
/// they leave untouched.
#[derive(PartialEq, Eq, Debug)]
pub enum Term {
    /// `x`
    Var(Identifier),
    /// `λx.t`
    Abs(Identifier, TermRef),
    /// `(t t)`
    Apply(TermRef, TermRef),
}

impl Term {
    pub fn var(name: Identifier) -> TermRef {
        Rc::new(Term::Var(name))
    }

    pub fn abs(param: Identifier, body: TermRef) -> TermRef {
        Rc::new(Term::Abs(param, body))
    }

    pub fn apply(callee: TermRef, arg: TermRef) -> TermRef {
        Rc::new(Term::Apply(callee, arg))
    }

    pub fn is_abs(&self) -> bool {
        matches!(self, Term::Abs(_, _))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(name) => f.write_str(name),
            Term::Abs(param, body) => f.write_fmt(format_args!("λ{param}.{body}")),
            Term::Apply(callee, arg) => f.write_fmt(format_args!("({callee} {arg})")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn name(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    #[test]
    fn test_display() {
        let t = Term::abs(
            name("f"),
            Term::abs(
                name("x"),
                Term::apply(Term::var(name("f")), Term::var(name("x"))),
            ),
        );
        assert_eq!(t.to_string(), "λf.λx.(f x)");
        assert_eq!(Term::var(name("y")).to_string(), "y");
    }

    #[test]
    fn test_structural_equality() {
        let lhs = Term::apply(Term::var(name("a")), Term::var(name("b")));
        let rhs = Term::apply(Term::var(name("a")), Term::var(name("b")));
        assert_eq!(lhs, rhs);
        assert!(!Rc::ptr_eq(&lhs, &rhs));
        assert!(lhs.as_ref() != Term::var(name("a")).as_ref());
    }
}
