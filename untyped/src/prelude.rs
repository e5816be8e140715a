use std::rc::Rc;

use thiserror::Error;

pub type Span = std::ops::Range<usize>;

pub const MAX_IDENTIFIER_LEN: usize = 64;

/// Characters that delimit identifiers in the surface syntax.
pub const RESERVED_CHARS: &[char] = &['(', ')', '.', '\\', 'λ'];

#[derive(PartialEq, Eq, Debug, Error)]
pub enum IdentifierError {
    #[error("Identifiers must not be empty")]
    Empty,
    #[error("Identifier `{0}` is longer than {} characters", MAX_IDENTIFIER_LEN)]
    TooLong(String),
    #[error("Identifier `{0}` contains whitespace or one of `(`, `)`, `.`, `\\`, `λ`")]
    Reserved(String),
    #[error("Identifier `{0}` consists of digits only, which read as De Bruijn indices")]
    Numeric(String),
}

pub fn is_identifier_char(c: char) -> bool {
    !c.is_whitespace() && !RESERVED_CHARS.contains(&c)
}

/// A variable name. Only valid names can be built, so every term node holds
/// one that passed [`Identifier::new`].
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Identifier(Rc<str>);

impl Identifier {
    /// Checks `name` against the surface syntax.
    pub fn new(name: &str) -> Result<Self, IdentifierError> {
        if name.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if !name.chars().all(is_identifier_char) {
            return Err(IdentifierError::Reserved(name.to_string()));
        }
        if name.chars().count() > MAX_IDENTIFIER_LEN {
            return Err(IdentifierError::TooLong(name.to_string()));
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdentifierError::Numeric(name.to_string()));
        }
        Ok(Self(name.into()))
    }

    /// `v{index}`, which is valid for any index.
    pub(crate) fn numbered(index: usize) -> Self {
        Self(format!("v{index}").into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(Identifier::new("x").unwrap().as_str(), "x");
        assert_eq!(Identifier::new("f'").unwrap().as_str(), "f'");
        assert_eq!(Identifier::new("x1").unwrap().as_str(), "x1");
        assert_eq!(Identifier::new(""), Err(IdentifierError::Empty));
        assert_eq!(
            Identifier::new("a.b"),
            Err(IdentifierError::Reserved("a.b".to_string()))
        );
        let long = "x".repeat(MAX_IDENTIFIER_LEN + 1);
        assert_eq!(
            Identifier::new(&long),
            Err(IdentifierError::TooLong(long.clone()))
        );
        assert!(Identifier::new(&long[1..]).is_ok());
    }

    #[test]
    fn test_digit_only_identifier_is_rejected() {
        assert_eq!(
            Identifier::new("1"),
            Err(IdentifierError::Numeric("1".to_string()))
        );
        assert_eq!(
            Identifier::new("042"),
            Err(IdentifierError::Numeric("042".to_string()))
        );
        assert!(Identifier::new("1x").is_ok());
    }

    #[test]
    fn test_numbered() {
        assert_eq!(Identifier::numbered(7).as_str(), "v7");
        assert_eq!(Identifier::numbered(7), Identifier::new("v7").unwrap());
    }
}
