use std::time::Duration;

use tokio::time::Sleep;

/// Fixed-delay timer driving the cycles of one session.
///
/// Re-armed after every display update, so cycles never overlap. The
/// session only cancels it on termination, after which it is never armed.
#[derive(Debug)]
pub struct CycleTimer {
    interval: Duration,
    cancelled: bool,
    cancellations: u32,
}

impl CycleTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            cancelled: false,
            cancellations: 0,
        }
    }

    /// Start the next delay.
    pub fn arm(&self) -> Sleep {
        tokio::time::sleep(self.interval)
    }

    /// Cancel the timer. Returns `true` only for the call that cancelled it.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        self.cancellations += 1;
        true
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn cancellations(&self) -> u32 {
        self.cancellations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_armed_timer_waits_interval() {
        let timer = CycleTimer::new(Duration::from_secs(5));
        let start = tokio::time::Instant::now();
        timer.arm().await;
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = CycleTimer::new(Duration::from_secs(5));
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.cancellations(), 1);
        assert!(timer.is_cancelled());
    }
}
