use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;

use crate::model::Booking;

/// Confirmation delivery failed. The booking it refers to is already
/// committed; callers decide whether to retry out of band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationError(pub String);

impl std::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification failed: {}", self.0)
    }
}

impl std::error::Error for NotificationError {}

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), NotificationError>;
}

const CHANNEL_CAPACITY: usize = 256;

/// In-process confirmation hub: one broadcast channel per room.
pub struct BroadcastNotifier {
    channels: DashMap<String, broadcast::Sender<Booking>>,
}

impl BroadcastNotifier {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    /// Subscribe to confirmations for a room. Creates the channel if needed.
    pub fn subscribe(&self, room_id: &str) -> broadcast::Receiver<Booking> {
        let sender = self
            .channels
            .entry(room_id.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        sender.subscribe()
    }

    /// Remove a channel (e.g. when a room is retired).
    pub fn remove(&self, room_id: &str) {
        self.channels.remove(room_id);
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for BroadcastNotifier {
    /// No-op if nobody is listening.
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), NotificationError> {
        if let Some(sender) = self.channels.get(&booking.room_id) {
            let _ = sender.send(booking.clone());
        }
        Ok(())
    }
}
