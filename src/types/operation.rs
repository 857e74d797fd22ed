//! Call kind of a Safe transaction

use serde::{Deserialize, Serialize};

/// How the Safe invokes the transaction target
///
/// Both the transaction service and the `SafeTx` struct carry this as the
/// integer 0 or 1, so that is also its serde form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Operation {
    #[default]
    Call = 0,
    /// Runs the target's code in the Safe's own storage context
    DelegateCall = 1,
}

impl Operation {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// The 32-byte word hashed into the `operation` slot of `SafeTx`
    pub fn word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[31] = self.as_u8();
        word
    }
}

impl From<bool> for Operation {
    /// `true` selects [`Operation::DelegateCall`]
    fn from(delegate: bool) -> Self {
        if delegate {
            Self::DelegateCall
        } else {
            Self::Call
        }
    }
}

impl From<Operation> for u8 {
    fn from(operation: Operation) -> Self {
        operation.as_u8()
    }
}

impl TryFrom<u8> for Operation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Call),
            1 => Ok(Self::DelegateCall),
            other => Err(format!("operation must be 0 or 1, got {other}")),
        }
    }
}
