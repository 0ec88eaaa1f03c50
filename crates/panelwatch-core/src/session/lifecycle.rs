//! Poll session lifecycle: placeholder, repeating cycles, termination.

use chrono::Utc;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::errors::PanelwatchError;
use crate::inventory::traits::InventoryService;
use crate::render::operations::{ERROR_MESSAGE, PLACEHOLDER};
use crate::render::types::StatusView;
use crate::session::cycle::run_cycle;
use crate::session::errors::{CycleError, SessionError};
use crate::session::types::{DisplayState, EndReason, PollSession, SessionOptions, SessionReport};
use crate::sink::errors::SinkError;
use crate::sink::traits::MessageSink;
use crate::sink::types::Message;

enum Wake {
    Tick,
    WindowElapsed,
    Cancelled,
}

/// Run one cycle outside of a session and return the view.
pub async fn snapshot<I>(inventory: &I, options: &SessionOptions) -> Result<StatusView, CycleError>
where
    I: InventoryService,
{
    run_cycle(
        inventory,
        options.detail_concurrency,
        &options.style,
        Utc::now(),
    )
    .await
}

/// Run a poll session until its window elapses, `cancel` fires, or the sink
/// gives out.
///
/// Sends the placeholder, runs the first cycle immediately, then one cycle
/// per refresh interval. Cycle failures are shown as the generic error text
/// and never end the session. The fetch of a cycle is raced against `cancel`
/// and the window deadline and dropped when either wins, so a hung backend
/// cannot hold the session open. A display update already in flight always
/// completes.
pub async fn run_session<I, S>(
    inventory: &I,
    sink: &mut S,
    options: &SessionOptions,
    cancel: &CancellationToken,
) -> Result<SessionReport, SessionError>
where
    I: InventoryService,
    S: MessageSink,
{
    let handle = sink
        .send(&Message::text(PLACEHOLDER))
        .await
        .map_err(|source| {
            error!(
                event = "core.session.placeholder_failed",
                error = %source,
                error_code = source.error_code()
            );
            SessionError::PlaceholderFailed { source }
        })?;

    let mut session = PollSession::new(handle, options.refresh_interval);
    let deadline = session.deadline(options.window);

    info!(
        event = "core.session.started",
        session_id = session.id(),
        window_secs = options.window.as_secs(),
        refresh_interval_secs = options.refresh_interval.as_secs()
    );

    let end_reason = loop {
        // The cycle is polled first so one that is already done still lands.
        let outcome = tokio::select! {
            biased;
            result = run_cycle(
                inventory,
                options.detail_concurrency,
                &options.style,
                Utc::now(),
            ) => Ok(result),
            _ = cancel.cancelled() => Err(EndReason::Cancelled),
            _ = sleep_until(deadline) => Err(EndReason::WindowElapsed),
        };

        let result = match outcome {
            Ok(result) => result,
            Err(reason) => {
                warn!(
                    event = "core.session.cycle_abandoned",
                    session_id = session.id(),
                    cycle = session.cycles_completed() + 1,
                    reason = %reason
                );
                session.cancelled = reason == EndReason::Cancelled;
                break reason;
            }
        };

        let (message, state) = match result {
            Ok(view) => {
                session.cycles_succeeded += 1;
                (Message::View(view), DisplayState::Rendered)
            }
            Err(e) => {
                session.cycles_failed += 1;
                error!(
                    event = "core.session.cycle_failed",
                    session_id = session.id(),
                    cycle = session.cycles_completed(),
                    error = %e,
                    error_code = e.error_code(),
                    endpoint = e.endpoint()
                );
                (Message::text(ERROR_MESSAGE), DisplayState::ErrorRendered)
            }
        };

        if let Err(e) = update_display(&mut session, sink, &message, state, options).await {
            error!(
                event = "core.session.sink_failed",
                session_id = session.id(),
                error = %e,
                error_code = e.error_code(),
                consecutive_failures = session.consecutive_sink_failures
            );
            break EndReason::SinkFailed;
        }

        match wait_next(&session, deadline, cancel).await {
            Wake::Tick => continue,
            Wake::WindowElapsed => break EndReason::WindowElapsed,
            Wake::Cancelled => {
                session.cancelled = true;
                break EndReason::Cancelled;
            }
        }
    };

    Ok(terminate(session, end_reason))
}

/// Show `message` on the session's display.
///
/// Re-sends when the display can no longer be edited and adopts the new
/// handle. Returns an error only when the session should give up on the
/// sink: a fatal sink error, or too many transient ones in a row.
async fn update_display<S>(
    session: &mut PollSession,
    sink: &mut S,
    message: &Message,
    state: DisplayState,
    options: &SessionOptions,
) -> Result<(), SinkError>
where
    S: MessageSink,
{
    let result = match sink.edit(&session.display, message).await {
        Err(SinkError::NotEditable { handle }) => {
            warn!(
                event = "core.session.display_resent",
                session_id = session.id(),
                stale_handle = %handle
            );
            sink.send(message).await.map(|new_handle| {
                session.display = new_handle;
            })
        }
        other => other,
    };

    match result {
        Ok(()) => {
            session.display_state = state;
            session.consecutive_sink_failures = 0;
            Ok(())
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            session.consecutive_sink_failures += 1;
            warn!(
                event = "core.session.display_update_failed",
                session_id = session.id(),
                error = %e,
                consecutive_failures = session.consecutive_sink_failures
            );
            if session.consecutive_sink_failures >= options.max_sink_failures {
                Err(e)
            } else {
                Ok(())
            }
        }
    }
}

/// Wait for the next tick, the window deadline, or cancellation.
///
/// Checked in that priority order, except that a tick landing on the
/// deadline still wins so the last cycle runs.
async fn wait_next(session: &PollSession, deadline: Instant, cancel: &CancellationToken) -> Wake {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Wake::Cancelled,
        _ = session.timer.arm() => Wake::Tick,
        _ = sleep_until(deadline) => Wake::WindowElapsed,
    }
}

fn terminate(mut session: PollSession, end_reason: EndReason) -> SessionReport {
    session.timer.cancel();
    let final_display = session.display_state;
    session.display_state = DisplayState::Terminated;

    info!(
        event = "core.session.ended",
        session_id = session.id(),
        reason = %end_reason,
        cancelled = session.cancelled,
        cycles_succeeded = session.cycles_succeeded,
        cycles_failed = session.cycles_failed,
        elapsed_ms = session.started_at.elapsed().as_millis() as u64
    );

    SessionReport {
        session_id: session.id.clone(),
        cycles_completed: session.cycles_completed(),
        cycles_succeeded: session.cycles_succeeded,
        cycles_failed: session.cycles_failed,
        timer_cancellations: session.timer.cancellations(),
        end_reason,
        final_display,
    }
}
