use std::str::FromStr;

use derive_more::{AsRef, Display};

pub const MAX_LEN: usize = 16;

/// A Minecraft username: 1 to 16 characters, each alphanumeric or `_`.
///
/// The only way to obtain one is through [`Username::parse`] (or [`FromStr`]),
/// so holding a `Username` means it has already been validated.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display, AsRef)]
#[as_ref(forward)]
pub struct Username(String);

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("The name entered was too short!")]
    Empty,
    #[error("The name entered was too long! ({0} characters, at most 16 allowed)")]
    TooLong(usize),
    #[error("Special characters are prohibited! (found {0:?})")]
    ForbiddenCharacter(char),
}

impl Username {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let len = name.chars().count();
        if len == 0 {
            return Err(ValidationError::Empty);
        }
        if len > MAX_LEN {
            return Err(ValidationError::TooLong(len));
        }
        if let Some(c) = name.chars().find(|&c| !(c.is_alphanumeric() || c == '_')) {
            return Err(ValidationError::ForbiddenCharacter(c));
        }
        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
