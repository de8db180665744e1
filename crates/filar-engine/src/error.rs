use std::fmt;

/// Error returned when a group is ended with none open.
///
/// `begin_group` / `end_group` calls must nest. Ending a group on an empty
/// scope stack is a caller contract violation; the scene is left unmodified.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScopeUnderflow;

impl fmt::Display for ScopeUnderflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "end_group called with no open group")
    }
}

impl std::error::Error for ScopeUnderflow {}
