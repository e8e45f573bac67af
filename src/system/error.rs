/// Error class, for callers that match on taxonomy rather than cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or semantically invalid input. Raised before any
    /// mutation; side-effect-free.
    Validation,
    /// Structurally valid request conflicting with current entity
    /// state. Raised after lookup, before any mutation.
    State,
    /// Confirmation failed after the booking was already committed.
    Notification,
    /// The persistence layer failed at the commit point.
    Repository,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    MissingFields,
    StartInPast,
    EndNotAfterStart,
    RoomNotFound,
    MissingQueryBounds,
    MissingBookingId,
    AlreadyStarted,
    Notification(String),
    Repository(String),
}

impl BookingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::MissingFields
            | BookingError::StartInPast
            | BookingError::EndNotAfterStart
            | BookingError::RoomNotFound
            | BookingError::MissingQueryBounds
            | BookingError::MissingBookingId => ErrorKind::Validation,
            BookingError::AlreadyStarted => ErrorKind::State,
            BookingError::Notification(_) => ErrorKind::Notification,
            BookingError::Repository(_) => ErrorKind::Repository,
        }
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::MissingFields => write!(f, "missing required booking fields"),
            BookingError::StartInPast => write!(f, "cannot book a time in the past"),
            BookingError::EndNotAfterStart => write!(f, "end time must be after start time"),
            BookingError::RoomNotFound => write!(f, "room not found"),
            BookingError::MissingQueryBounds => {
                write!(f, "both start and end time are required")
            }
            BookingError::MissingBookingId => write!(f, "booking id must not be null"),
            BookingError::AlreadyStarted => {
                write!(f, "cannot cancel a booking that has already started or ended")
            }
            BookingError::Notification(e) => {
                write!(f, "booking confirmed but notification failed: {e}")
            }
            BookingError::Repository(e) => write!(f, "repository error: {e}"),
        }
    }
}

impl std::error::Error for BookingError {}
