use crate::{names::NameSet, term::Term};

/// Whether `name` is the parameter of some abstraction inside `term`, used or not.
pub fn occurs_bound(term: &Term, name: &str) -> bool {
    match term {
        Term::Var(_) => false,
        Term::Abs(param, body) => param.as_str() == name || occurs_bound(body, name),
        Term::Apply(callee, arg) => occurs_bound(callee, name) || occurs_bound(arg, name),
    }
}

/// Whether `name` occurs free in `term`, treating the names in `bound` as
/// already bound by enclosing abstractions.
pub fn occurs_free_under(term: &Term, name: &str, bound: &NameSet) -> bool {
    match term {
        Term::Var(var) => var.as_str() == name && !bound.contains(name),
        Term::Abs(param, body) => occurs_free_under(body, name, &bound.add(param.clone())),
        Term::Apply(callee, arg) => {
            occurs_free_under(callee, name, bound) || occurs_free_under(arg, name, bound)
        }
    }
}

pub fn occurs_free(term: &Term, name: &str) -> bool {
    occurs_free_under(term, name, &NameSet::new())
}

/// Every name in `term`, binders and references alike.
pub fn all_names(term: &Term) -> NameSet {
    match term {
        Term::Var(name) => NameSet::unit(name.clone()),
        Term::Abs(param, body) => all_names(body).add(param.clone()),
        Term::Apply(callee, arg) => all_names(callee).union(all_names(arg)),
    }
}

pub fn free_names(term: &Term) -> NameSet {
    all_names(term)
        .iter()
        .filter(|name| occurs_free(term, name))
        .cloned()
        .collect()
}

pub fn contains_name(term: &Term, name: &str) -> bool {
    match term {
        Term::Var(var) => var.as_str() == name,
        Term::Abs(param, body) => param.as_str() == name || contains_name(body, name),
        Term::Apply(callee, arg) => contains_name(callee, name) || contains_name(arg, name),
    }
}

/// Whether `term` contains a redex, i.e. is not in beta-normal form.
pub fn is_beta_reducible(term: &Term) -> bool {
    match term {
        Term::Var(_) => false,
        Term::Abs(_, body) => is_beta_reducible(body),
        Term::Apply(callee, arg) => {
            callee.is_abs() || is_beta_reducible(callee) || is_beta_reducible(arg)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{parser::parse, prelude::*};

    fn sorted(set: &NameSet) -> Vec<String> {
        let mut names = set.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        names.sort();
        names
    }

    #[test]
    fn test_occurs_bound() {
        let t = parse("(\\x.y \\z.z)").unwrap();
        assert!(occurs_bound(&t, "x"));
        assert!(occurs_bound(&t, "z"));
        assert!(!occurs_bound(&t, "y"));
        assert!(!occurs_bound(&parse("x").unwrap(), "x"));
    }

    #[test]
    fn test_occurs_free() {
        let t = parse("(\\x.(x y) x)").unwrap();
        assert!(occurs_free(&t, "x"));
        assert!(occurs_free(&t, "y"));
        assert!(!occurs_free(&t, "z"));

        let t = parse("\\x.(x y)").unwrap();
        assert!(!occurs_free(&t, "x"));

        let bound = NameSet::unit(Identifier::new("y").unwrap());
        assert!(!occurs_free_under(&t, "y", &bound));
    }

    #[test]
    fn test_binder_scope_does_not_leak() {
        let t = parse("(\\x.x x)").unwrap();
        assert!(occurs_free(&t, "x"));
    }

    #[test]
    fn test_all_names() {
        let t = parse("(\\x.(f x) \\y.z)").unwrap();
        assert_eq!(sorted(&all_names(&t)), vec!["f", "x", "y", "z"]);
        assert_eq!(sorted(&free_names(&t)), vec!["f", "z"]);
        assert!(contains_name(&t, "y"));
        assert!(!contains_name(&t, "w"));
    }

    #[test]
    fn test_is_beta_reducible() {
        assert!(is_beta_reducible(&parse("(\\x.x y)").unwrap()));
        assert!(is_beta_reducible(&parse("\\z.(y (\\x.x y))").unwrap()));
        assert!(!is_beta_reducible(&parse("\\z.(y (z y))").unwrap()));
        assert!(!is_beta_reducible(&parse("x").unwrap()));
    }
}
