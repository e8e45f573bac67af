//! End-to-end booking flow over the provided in-process
//! implementations: wall clock, in-memory repository, broadcast
//! notifier.

use roombook::{
    BookingError, BookingSystem, BroadcastNotifier, InMemoryRoomRepository, Ms, RoomState, Span,
    SystemClock,
};

const H: Ms = 3_600_000;

fn far_future() -> Ms {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as Ms
        + 24 * H
}

async fn make_system(
    room_ids: &[&str],
) -> BookingSystem<SystemClock, InMemoryRoomRepository, BroadcastNotifier> {
    let _ = tracing_subscriber::fmt::try_init();
    let repo = InMemoryRoomRepository::new();
    for id in room_ids {
        repo.insert(RoomState::new(*id, None)).await;
    }
    BookingSystem::new(SystemClock, repo, BroadcastNotifier::new())
}

#[tokio::test]
async fn book_confirm_query_cancel_roundtrip() {
    let system = make_system(&["aurora", "borealis"]).await;
    let mut confirmations = system.notifier().subscribe("aurora");

    let start = far_future();
    let end = start + H;
    assert_eq!(
        system.book_room("aurora", Some(start), Some(end)).await,
        Ok(true)
    );

    // The confirmation carries the committed booking.
    let booking = confirmations.recv().await.unwrap();
    assert_eq!(booking.room_id, "aurora");
    assert_eq!(booking.span, Span::new(start, end));

    // The booked room drops out of the same-interval query.
    let rooms = system
        .get_available_rooms(Some(start), Some(end))
        .await
        .unwrap();
    let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["borealis"]);

    // Its free windows shrink accordingly.
    let windows = system
        .available_windows("aurora", Some(start - H), Some(end + H))
        .await
        .unwrap();
    assert_eq!(
        windows,
        vec![Span::new(start - H, start), Span::new(end, end + H)]
    );

    // Cancel restores full availability.
    assert_eq!(system.cancel_booking(&booking.id).await, Ok(true));
    let rooms = system
        .get_available_rooms(Some(start), Some(end))
        .await
        .unwrap();
    assert_eq!(rooms.len(), 2);
}

#[tokio::test]
async fn double_booking_refused_end_to_end() {
    let system = make_system(&["aurora"]).await;

    let start = far_future();
    assert_eq!(
        system.book_room("aurora", Some(start), Some(start + H)).await,
        Ok(true)
    );
    assert_eq!(
        system
            .book_room("aurora", Some(start + H / 2), Some(start + 2 * H))
            .await,
        Ok(false)
    );
}

#[tokio::test]
async fn wall_clock_rejects_the_past() {
    let system = make_system(&["aurora"]).await;

    let result = system.book_room("aurora", Some(0), Some(H)).await;
    assert_eq!(result, Err(BookingError::StartInPast));
}
