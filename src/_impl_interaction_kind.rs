use crate::CompileError;
use crate::InteractionKind;
use crate::InteractionKind::*;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl InteractionKind {
    /// The canonical human-readable name of this interaction kind.
    pub fn name(self) -> &'static str {
        match self {
            Promotes => "PROMOTES",
            Represses => "REPRESSES",
            Neutral => "NEUTRAL",
        }
    }

    /// The canonical numeric code of this interaction kind. Promoting interactions
    /// are positive, repressing interactions negative and neutral interactions zero.
    pub fn as_code(self) -> i32 {
        match self {
            Promotes => 1,
            Represses => -1,
            Neutral => 0,
        }
    }

    /// Resolve an interaction kind from its canonical numeric code.
    pub fn try_from_code(code: i32) -> Result<InteractionKind, CompileError> {
        match code {
            1 => Ok(Promotes),
            -1 => Ok(Represses),
            0 => Ok(Neutral),
            _ => Err(CompileError::UnknownInteractionKind {
                name: code.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for InteractionKind {
    type Error = CompileError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PROMOTES" => Ok(Promotes),
            "REPRESSES" => Ok(Represses),
            "NEUTRAL" => Ok(Neutral),
            _ => Err(CompileError::UnknownInteractionKind {
                name: value.to_string(),
            }),
        }
    }
}

impl Display for InteractionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.name())
    }
}
