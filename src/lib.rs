//! Room-booking resolution against a time-window availability model.
//!
//! [`BookingSystem`] validates booking requests, checks a room's
//! existing bookings for overlap (half-open `[start, end)` intervals),
//! commits the booking and triggers a confirmation. Time, persistence
//! and notification delivery are injected collaborators: [`Clock`],
//! [`RoomRepository`] and [`NotificationService`], with in-process
//! implementations provided for each.

pub mod clock;
pub mod model;
pub mod notify;
pub mod observability;
pub mod repo;
pub mod system;

pub use clock::{Clock, SystemClock};
pub use model::{Booking, Ms, RoomState, Span};
pub use notify::{BroadcastNotifier, NotificationError, NotificationService};
pub use repo::{InMemoryRoomRepository, RoomRepository, SharedRoom};
pub use system::{BookingError, BookingSystem, ErrorKind, RoomInfo};
