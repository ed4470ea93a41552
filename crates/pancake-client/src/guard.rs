//! Write guard — explicit opt-in for mutating calls.
//!
//! Any request that would change remote state (POST/PUT) must be confirmed
//! by setting `CONFIRM_WRITE=YES` in the environment. Only that exact value
//! counts; `yes`, `true`, `1`, or an empty string all refuse. The check is
//! a pure precondition evaluated before any network I/O, so a refused write
//! provably makes zero HTTP calls.

use crate::error::{ClientError, Result};

/// Name of the confirmation environment variable.
pub const CONFIRM_WRITE_VAR: &str = "CONFIRM_WRITE";

/// The value that confirms a write. Exact match only.
const CONFIRM_VALUE: &str = "YES";

/// Precondition gate for mutating requests.
#[derive(Debug, Clone, Copy)]
pub struct WriteGuard {
    confirmed: bool,
}

impl WriteGuard {
    /// Resolve the guard from the process environment.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(CONFIRM_WRITE_VAR).ok().as_deref())
    }

    /// Resolve the guard from an explicit value.
    pub fn from_value(value: Option<&str>) -> Self {
        Self {
            confirmed: value == Some(CONFIRM_VALUE),
        }
    }

    /// A guard that always confirms. Intended for tests.
    pub fn confirmed() -> Self {
        Self { confirmed: true }
    }

    /// Fail with [`ClientError::WriteNotConfirmed`] unless the operator
    /// opted in.
    pub fn ensure_confirmed(&self) -> Result<()> {
        if self.confirmed {
            Ok(())
        } else {
            Err(ClientError::WriteNotConfirmed)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_yes_confirms() {
        assert!(WriteGuard::from_value(Some("YES")).ensure_confirmed().is_ok());
    }

    #[test]
    fn unset_refuses() {
        let err = WriteGuard::from_value(None).ensure_confirmed().unwrap_err();
        assert!(matches!(err, ClientError::WriteNotConfirmed));
    }

    #[test]
    fn empty_refuses() {
        assert!(WriteGuard::from_value(Some("")).ensure_confirmed().is_err());
    }

    #[test]
    fn near_misses_refuse() {
        for value in ["yes", "Yes", "Y", "true", "1", "YES "] {
            assert!(
                WriteGuard::from_value(Some(value)).ensure_confirmed().is_err(),
                "value `{value}` must not confirm a write"
            );
        }
    }
}
