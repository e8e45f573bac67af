use crate::model::Ms;

/// Injected source of "now". Lets tests pin the clock for deterministic
/// past/future comparisons.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> Ms;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Ms {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_millis() as Ms
    }
}
