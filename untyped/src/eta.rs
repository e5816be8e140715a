use crate::{
    analysis::occurs_free,
    term::{Term, TermRef},
};

/// Rewrites every `λx.(f x)` with `x` not free in `f` to `f`.
///
/// Bodies are reduced before the pattern is checked, so chains such as
/// `λx.λy.((g x) y)` collapse in a single pass and the result has no eta-redex.
pub fn eta_reduce(term: &TermRef) -> TermRef {
    match term.as_ref() {
        Term::Var(_) => term.clone(),
        Term::Apply(callee, arg) => Term::apply(eta_reduce(callee), eta_reduce(arg)),
        Term::Abs(param, body) => {
            let body = eta_reduce(body);
            match body.as_ref() {
                Term::Apply(callee, arg)
                    if matches!(arg.as_ref(), Term::Var(var) if var == param)
                        && !occurs_free(callee, param) =>
                {
                    callee.clone()
                }
                _ => Term::abs(param.clone(), body.clone()),
            }
        }
    }
}
