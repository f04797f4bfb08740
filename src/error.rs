use thiserror::Error;

/// Returned when a range would have its maximum below its minimum.
///
/// This is the only way anything in this crate can fail. Range sets
/// build every merged range before touching their stored ranges, so
/// a set that hands back this error is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("range max is less than range min")]
pub struct InvalidRangeError;
