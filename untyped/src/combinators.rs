//! Church encodings in the surface syntax.

pub const TRUE: &str = r"\x.\y.x";
pub const FALSE: &str = r"\x.\y.y";
pub const IF: &str = r"\b.\x.\y.((b x) y)";
pub const IS_ZERO: &str = r"\n.((n \x.\x.\y.y) \x.\y.x)";

pub const ZERO: &str = r"\f.\x.x";
pub const ONE: &str = r"\f.\x.(f x)";
pub const TWO: &str = r"\f.\x.(f (f x))";
pub const THREE: &str = r"\f.\x.(f (f (f x)))";
pub const SIX: &str = r"\f.\x.(f (f (f (f (f (f x))))))";

pub const SUCC: &str = r"\n.\f.\x.(f ((n f) x))";
pub const PRED: &str = r"\n.\f.\x.(((n \g.\h.(h (g f))) \u.x) \u.u)";
pub const PLUS: &str = r"\m.\n.\f.\x.((m f) ((n f) x))";
pub const MULT: &str = r"\m.\n.\f.(m (n f))";

pub const Y_COMBINATOR: &str = r"\h.(\x.(h (x x)) \x.(h (x x)))";

/// `\r.\n.(((IF (IS_ZERO n)) ONE) ((MULT n) (r (PRED n))))`; its fixed point
/// is the factorial function on Church numerals.
pub const FACTORIAL_GENERATOR: &str = concat!(
    r"\r.\n.(((\b.\x.\y.((b x) y) (\n.((n \x.\x.\y.y) \x.\y.x) n)) \f.\x.(f x)) ",
    r"((\m.\n.\f.(m (n f)) n) (r (\n.\f.\x.(((n \g.\h.(h (g f))) \u.x) \u.u) n))))",
);

/// The Church numeral `\f.\x.(f (f ... x))` with `n` applications of `f`.
pub fn church_numeral(n: usize) -> String {
    let mut body = "x".to_string();
    for _ in 0..n {
        body = format!("(f {body})");
    }
    format!(r"\f.\x.{body}")
}
