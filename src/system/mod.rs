mod availability;
mod error;
mod mutations;
mod queries;

pub use availability::{free_windows, merge_overlapping, subtract_intervals};
pub use error::{BookingError, ErrorKind};
pub use queries::RoomInfo;

use crate::clock::Clock;
use crate::notify::NotificationService;
use crate::repo::RoomRepository;

/// Stateless orchestrator over externally owned room state. Validates
/// requests, resolves availability, commits and cancels bookings.
/// Holds nothing but its three injected collaborators.
pub struct BookingSystem<C, R, N> {
    pub(super) clock: C,
    pub(super) repo: R,
    pub(super) notifier: N,
}

impl<C, R, N> BookingSystem<C, R, N>
where
    C: Clock,
    R: RoomRepository,
    N: NotificationService,
{
    pub fn new(clock: C, repo: R, notifier: N) -> Self {
        Self {
            clock,
            repo,
            notifier,
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
