use tracing::{debug, warn};
use ulid::Ulid;

use crate::clock::Clock;
use crate::model::{Booking, Ms, Span};
use crate::notify::NotificationService;
use crate::observability;
use crate::repo::RoomRepository;

use super::{BookingError, BookingSystem};

impl<C, R, N> BookingSystem<C, R, N>
where
    C: Clock,
    R: RoomRepository,
    N: NotificationService,
{
    /// Book `[start, end)` in the given room.
    ///
    /// Returns `Ok(false)` when the room exists but the interval is
    /// taken — a normal outcome, no mutation happens. Validation
    /// failures never touch the repository or the notifier.
    ///
    /// A `Notification` error means the booking IS committed; only the
    /// confirmation send failed. The commit is never rolled back on
    /// notification failure.
    pub async fn book_room(
        &self,
        room_id: &str,
        start: Option<Ms>,
        end: Option<Ms>,
    ) -> Result<bool, BookingError> {
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) if !room_id.is_empty() => (s, e),
            _ => return Err(BookingError::MissingFields),
        };
        if start < self.clock.now_ms() {
            return Err(BookingError::StartInPast);
        }
        if end <= start {
            return Err(BookingError::EndNotAfterStart);
        }

        let room = self
            .repo
            .find_by_id(room_id)
            .await
            .ok_or(BookingError::RoomNotFound)?;
        let span = Span::new(start, end);

        // Write lock held from the availability check through save:
        // two concurrent bookings of the same interval cannot both
        // observe "available".
        let mut guard = room.write().await;
        if !guard.is_available(&span) {
            debug!(room_id, start, end, "interval taken, booking refused");
            metrics::counter!(observability::BOOKINGS_UNAVAILABLE_TOTAL).increment(1);
            return Ok(false);
        }

        let booking = Booking {
            id: Ulid::new().to_string(),
            room_id: guard.id.clone(),
            span,
        };
        guard.add_booking(booking.clone());
        if let Err(e) = self.repo.save(&guard).await {
            // Commit failed — undo the in-memory insert before anyone
            // else can observe it.
            guard.remove_booking(&booking.id);
            return Err(BookingError::Repository(e.to_string()));
        }
        drop(guard);

        debug!(room_id, booking_id = %booking.id, start, end, "booking committed");
        metrics::counter!(observability::BOOKINGS_TOTAL).increment(1);

        if let Err(e) = self.notifier.send_booking_confirmation(&booking).await {
            warn!(booking_id = %booking.id, error = %e, "confirmation failed after commit");
            metrics::counter!(observability::NOTIFY_FAILURES_TOTAL).increment(1);
            return Err(BookingError::Notification(e.0));
        }

        Ok(true)
    }

    /// Cancel a booking that has not yet started.
    ///
    /// Returns `Ok(false)` when no room holds the booking — nothing to
    /// cancel. A booking whose start is at or before "now" can never be
    /// cancelled, whether it is running or long over.
    pub async fn cancel_booking(&self, booking_id: &str) -> Result<bool, BookingError> {
        if booking_id.is_empty() {
            return Err(BookingError::MissingBookingId);
        }

        for room in self.repo.find_all().await {
            let mut guard = room.write().await;
            let Some(booking) = guard.get_booking(booking_id) else {
                continue;
            };
            if booking.span.start <= self.clock.now_ms() {
                return Err(BookingError::AlreadyStarted);
            }

            let removed = guard
                .remove_booking(booking_id)
                .ok_or_else(|| BookingError::Repository("booking vanished under lock".into()))?;
            if let Err(e) = self.repo.save(&guard).await {
                guard.add_booking(removed);
                return Err(BookingError::Repository(e.to_string()));
            }
            drop(guard);

            debug!(booking_id, "booking cancelled");
            metrics::counter!(observability::CANCELLATIONS_TOTAL).increment(1);
            return Ok(true);
        }

        Ok(false)
    }
}
