use thiserror::Error;

use crate::{
    analysis::{contains_name, occurs_bound},
    prelude::*,
    term::{Term, TermRef},
};

#[derive(PartialEq, Eq, Debug, Error)]
pub enum RenameError {
    #[error("Cannot rename to `{0}`: the name already occurs in the term")]
    NameInUse(String),
    #[error("Cannot rename `{0}`: no abstraction binds it")]
    NotBound(String),
}

/// Replaces the free occurrences of `name` in `term` with `replacement`.
///
/// The replacement is shared, not copied. Free variables of `replacement` may
/// be captured by binders in `term`; callers alpha-convert beforehand.
pub fn substitute(term: &TermRef, name: &str, replacement: &TermRef) -> TermRef {
    match term.as_ref() {
        Term::Var(var) if var.as_str() == name => replacement.clone(),
        Term::Var(_) => term.clone(),
        Term::Abs(param, _) if param.as_str() == name => term.clone(),
        Term::Abs(param, body) => Term::abs(param.clone(), substitute(body, name, replacement)),
        Term::Apply(callee, arg) => Term::apply(
            substitute(callee, name, replacement),
            substitute(arg, name, replacement),
        ),
    }
}

/// Alpha-converts every abstraction in `term` binding `old` so that it binds
/// `new` instead.
///
/// `new` must not occur anywhere in `term`; this is not checked here, see
/// [`try_rename`].
pub fn rename(term: &TermRef, new: &Identifier, old: &str) -> TermRef {
    match term.as_ref() {
        Term::Var(_) => term.clone(),
        Term::Abs(param, body) => {
            let (param, body) = rename_binder(param, body, new, old);
            Term::abs(param, body)
        }
        Term::Apply(callee, arg) => Term::apply(rename(callee, new, old), rename(arg, new, old)),
    }
}

/// [`rename`] applied to the abstraction `λparam.body`, returning the parts of
/// the converted abstraction.
///
/// Inner binders of `old` are renamed to `new` as well; each shadows the
/// enclosing `new` exactly as it shadowed the enclosing `old`.
pub fn rename_binder(
    param: &Identifier,
    body: &TermRef,
    new: &Identifier,
    old: &str,
) -> (Identifier, TermRef) {
    if param.as_str() == old {
        let body = substitute(body, old, &Term::var(new.clone()));
        (new.clone(), rename(&body, new, old))
    } else {
        (param.clone(), rename(body, new, old))
    }
}

/// [`rename`] with its precondition checked.
pub fn try_rename(term: &TermRef, new: Identifier, old: &str) -> Result<TermRef, RenameError> {
    if contains_name(term, &new) {
        return Err(RenameError::NameInUse(new.to_string()));
    }
    if !occurs_bound(term, old) {
        return Err(RenameError::NotBound(old.to_string()));
    }
    Ok(rename(term, &new, old))
}
