//! Tagged outcome type for individual attribute lookups.

use serde::{Deserialize, Serialize};

/// The outcome of a single attribute fetch.
///
/// Absence is a first-class value, not an error: a fetcher that hits a
/// network failure, a non-2xx status, or an empty upstream payload settles
/// as `Absent` rather than propagating anything. This keeps legitimate
/// values that look like "missing" under null-coalescing (zero counts,
/// empty strings) distinguishable from an actual failed lookup.
///
/// # Examples
///
/// ```
/// use bloxbot_core::AttributeResult;
///
/// let friends: AttributeResult<u64> = AttributeResult::Present(0);
/// assert!(friends.is_present());
/// assert_ne!(friends, AttributeResult::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeResult<T> {
    /// The lookup succeeded and produced a value.
    Present(T),
    /// The lookup failed or the upstream payload was empty.
    Absent,
}

impl<T> AttributeResult<T> {
    /// Returns true when a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the inner value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }

    /// Consume self, yielding the inner value if present.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }

    /// Map a present value, preserving absence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AttributeResult<U> {
        match self {
            Self::Present(v) => AttributeResult::Present(f(v)),
            Self::Absent => AttributeResult::Absent,
        }
    }

    /// Lift an `Option` into an attribute outcome.
    pub fn from_option(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }
}

impl<T> Default for AttributeResult<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for AttributeResult<T> {
    fn from(opt: Option<T>) -> Self {
        Self::from_option(opt)
    }
}
