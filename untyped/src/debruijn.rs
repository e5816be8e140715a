use crate::term::Term;

/// Renders a term with every bound variable replaced by the distance to its
/// binder (`1` is the nearest). Free variables keep their names.
pub struct DeBruijn<'a>(pub &'a Term);

impl std::fmt::Display for DeBruijn<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn fmt_rec<'a>(
            term: &'a Term,
            binders: &mut Vec<&'a str>,
            f: &mut std::fmt::Formatter<'_>,
        ) -> std::fmt::Result {
            match term {
                Term::Var(name) => match binders.iter().rev().position(|b| *b == name.as_str()) {
                    Some(i) => f.write_fmt(format_args!("{}", i + 1)),
                    None => f.write_str(name),
                },
                Term::Abs(param, body) => {
                    binders.push(param.as_str());
                    f.write_str("λ")?;
                    fmt_rec(body, binders, f)?;
                    binders.pop();
                    Ok(())
                }
                Term::Apply(callee, arg) => {
                    f.write_str("(")?;
                    fmt_rec(callee, binders, f)?;
                    f.write_str(" ")?;
                    fmt_rec(arg, binders, f)?;
                    f.write_str(")")
                }
            }
        }
        fmt_rec(self.0, &mut vec![], f)
    }
}

pub fn de_bruijn_index(term: &Term) -> String {
    DeBruijn(term).to_string()
}

/// Whether the two terms are alpha-equivalent.
pub fn are_isomorphic(lhs: &Term, rhs: &Term) -> bool {
    let lhs = de_bruijn_index(lhs);
    !lhs.is_empty() && lhs == de_bruijn_index(rhs)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse;

    fn db(s: &str) -> String {
        de_bruijn_index(&parse(s).unwrap())
    }

    fn iso(lhs: &str, rhs: &str) -> bool {
        are_isomorphic(&parse(lhs).unwrap(), &parse(rhs).unwrap())
    }

    #[test]
    fn test_de_bruijn_index() {
        assert_eq!(db("x"), "x");
        assert_eq!(db("\\x.x"), "λ1");
        assert_eq!(db("(x y)"), "(x y)");
        assert_eq!(db("\\x.\\y.x"), "λλ2");
        assert_eq!(db("\\x.\\y.y"), "λλ1");
        assert_eq!(db("\\f.\\x.(f (f x))"), "λλ(2 (2 1))");
        assert_eq!(db("\\x.(y \\y.(x y))"), "λ(y λ(2 1))");
    }

    #[test]
    fn test_shadowed_binder_is_nearest() {
        assert_eq!(db("\\x.\\x.x"), "λλ1");
        assert_eq!(db("\\x.(\\x.x x)"), "λ(λ1 1)");
    }

    #[test]
    fn test_are_isomorphic() {
        assert!(iso("\\x.x", "\\y.y"));
        assert!(iso("\\f.\\x.(f x)", "\\g.\\y.(g y)"));
        assert!(!iso("\\x.\\y.x", "\\x.\\y.y"));
        assert!(!iso("\\x.y", "\\x.z"));
        assert!(iso("(a b)", "(a b)"));
        assert!(!iso("\\x.x", "x"));
    }
}
