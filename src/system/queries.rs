use crate::clock::Clock;
use crate::model::{Ms, Span};
use crate::notify::NotificationService;
use crate::observability;
use crate::repo::RoomRepository;

use super::availability::free_windows;
use super::{BookingError, BookingSystem};

/// Query-result snapshot of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    pub id: String,
    pub name: Option<String>,
}

fn validate_query_bounds(start: Option<Ms>, end: Option<Ms>) -> Result<Span, BookingError> {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return Err(BookingError::MissingQueryBounds),
    };
    if end <= start {
        return Err(BookingError::EndNotAfterStart);
    }
    Ok(Span::new(start, end))
}

impl<C, R, N> BookingSystem<C, R, N>
where
    C: Clock,
    R: RoomRepository,
    N: NotificationService,
{
    /// Rooms free for the whole of `[start, end)`, in repository order.
    ///
    /// Past windows are allowed here — no "now" check, unlike
    /// `book_room`. Pure query, no side effects.
    pub async fn get_available_rooms(
        &self,
        start: Option<Ms>,
        end: Option<Ms>,
    ) -> Result<Vec<RoomInfo>, BookingError> {
        let span = validate_query_bounds(start, end)?;
        metrics::counter!(observability::AVAILABILITY_QUERIES_TOTAL).increment(1);

        let mut available = Vec::new();
        for room in self.repo.find_all().await {
            let guard = room.read().await;
            if guard.is_available(&span) {
                available.push(RoomInfo {
                    id: guard.id.clone(),
                    name: guard.name.clone(),
                });
            }
        }
        Ok(available)
    }

    /// Free sub-windows of `[start, end)` for one room. An unknown room
    /// has no free time, so it yields an empty vec rather than an error.
    pub async fn available_windows(
        &self,
        room_id: &str,
        start: Option<Ms>,
        end: Option<Ms>,
    ) -> Result<Vec<Span>, BookingError> {
        let span = validate_query_bounds(start, end)?;
        metrics::counter!(observability::AVAILABILITY_QUERIES_TOTAL).increment(1);

        let room = match self.repo.find_by_id(room_id).await {
            Some(room) => room,
            None => return Ok(Vec::new()),
        };
        let guard = room.read().await;
        Ok(free_windows(&guard, &span))
    }
}
