//! Error type for the convenience API.

use luach_date::DateError;

/// Errors from the convenience functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LuachError {
    #[error(transparent)]
    Date(#[from] DateError),
}

impl From<luach_base::CalendarError> for LuachError {
    fn from(err: luach_base::CalendarError) -> Self {
        Self::Date(err.into())
    }
}

impl From<luach_time::TimeError> for LuachError {
    fn from(err: luach_time::TimeError) -> Self {
        Self::Date(err.into())
    }
}
