use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use crate::config::PanelConfig;
use crate::config::defaults::{
    DEFAULT_MAX_SINK_FAILURES, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_WINDOW_SECS,
};
use crate::render::types::ViewStyle;
use crate::session::timer::CycleTimer;
use crate::sink::types::MessageHandle;

/// Tuning for one poll session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Total observation window, measured from session start.
    pub window: Duration,
    /// Delay between the end of one display update and the next cycle.
    pub refresh_interval: Duration,
    /// Cap on concurrent server detail lookups; unbounded when `None`.
    pub detail_concurrency: Option<usize>,
    /// Consecutive transient sink failures tolerated before giving up.
    pub max_sink_failures: u32,
    pub style: ViewStyle,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            detail_concurrency: None,
            max_sink_failures: DEFAULT_MAX_SINK_FAILURES,
            style: ViewStyle::default(),
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            window: config.session.window(),
            refresh_interval: config.session.refresh_interval(),
            detail_concurrency: config.session.detail_concurrency,
            max_sink_failures: config.session.max_sink_failures(),
            style: ViewStyle {
                title: config.display.title().to_string(),
                color: config.display.color(),
            },
        }
    }
}

/// What the session's display is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    Placeholder,
    Rendered,
    ErrorRendered,
    /// Session over; the handle has been released.
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    WindowElapsed,
    Cancelled,
    SinkFailed,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::WindowElapsed => write!(f, "window_elapsed"),
            EndReason::Cancelled => write!(f, "cancelled"),
            EndReason::SinkFailed => write!(f, "sink_failed"),
        }
    }
}

/// Summary returned when a session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub session_id: String,
    pub cycles_completed: u32,
    pub cycles_succeeded: u32,
    pub cycles_failed: u32,
    /// Times the cycle timer was actually cancelled. Always 1 for a session
    /// that got past its placeholder.
    pub timer_cancellations: u32,
    pub end_reason: EndReason,
    /// Last content state shown before the display was released.
    pub final_display: DisplayState,
}

/// A running poll session.
///
/// Owns the display handle (the exclusive right to edit the status message)
/// and the cycle timer (the exclusive right to cancel it).
#[derive(Debug)]
pub struct PollSession {
    pub(crate) id: String,
    pub(crate) display: MessageHandle,
    pub(crate) display_state: DisplayState,
    pub(crate) timer: CycleTimer,
    pub(crate) started_at: Instant,
    pub(crate) cancelled: bool,
    pub(crate) cycles_succeeded: u32,
    pub(crate) cycles_failed: u32,
    pub(crate) consecutive_sink_failures: u32,
}

impl PollSession {
    pub(crate) fn new(display: MessageHandle, refresh_interval: Duration) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            display,
            display_state: DisplayState::Placeholder,
            timer: CycleTimer::new(refresh_interval),
            started_at: Instant::now(),
            cancelled: false,
            cycles_succeeded: 0,
            cycles_failed: 0,
            consecutive_sink_failures: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_state(&self) -> DisplayState {
        self.display_state
    }

    pub fn cycles_completed(&self) -> u32 {
        self.cycles_succeeded + self.cycles_failed
    }

    /// Deadline after which no new cycle starts.
    pub fn deadline(&self, window: Duration) -> Instant {
        self.started_at + window
    }
}
