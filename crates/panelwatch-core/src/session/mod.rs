pub mod cycle;
pub mod errors;
pub mod lifecycle;
pub mod timer;
pub mod types;

pub use cycle::run_cycle;
pub use errors::{CycleError, SessionError};
pub use lifecycle::{run_session, snapshot};
pub use timer::CycleTimer;
pub use types::{DisplayState, EndReason, PollSession, SessionOptions, SessionReport};
