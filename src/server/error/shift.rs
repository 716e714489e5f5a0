use thiserror::Error;

/// Business rule violations raised by the shift workflow.
///
/// Every variant results in a 400 Bad Request carrying the display message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShiftError {
    /// The shift already has a non-deleted worker assignment.
    #[error("Shift is already assigned")]
    AlreadyAssigned,

    /// The requester has a pending request overlapping the shift's time window.
    #[error("Shift request time overlaps")]
    TimeOverlap,

    /// The requester already works another shift on the same date.
    #[error("Already have an assigned shift on this day")]
    AlreadyAssignedOnDate,

    /// The requester reached the approved-shift cap for the shift's week.
    #[error("User already reached shift assignment limit this week")]
    WeeklyLimitReached { limit: u64 },

    /// Approve or reject was called on a request that already left `PENDING`.
    #[error("Shift request status is not pending")]
    NotPending,

    /// Start time is not strictly before end time.
    #[error("Shift start time must be before end time")]
    InvalidTimeRange,

    /// The shift's calendar week does not fit in the supported date range.
    #[error("Shift date is out of range")]
    DateOutOfRange,
}
