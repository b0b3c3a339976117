//! Main TUI runner - entry point and event loop
//!
//! The loop serializes everything through one message stream: the
//! one-second tick task, the signal handler, and terminal input all
//! become [`Message`]s applied in arrival order. The first frame is drawn
//! before the loop starts so the clock appears without the initial
//! one-second delay.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use tempus_app::{handler, ClockState, Message};
use tempus_core::prelude::*;

use crate::event::{self, HitMap};
use crate::{render, signals, terminal};

/// Tick period: one redraw per second
const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Run the TUI application until quit
pub async fn run(mut state: ClockState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    terminal::enable_mouse();

    // Unified message channel (tick task, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Spawn the once-per-second tick task
    spawn_tick_task(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    terminal::disable_mouse();
    ratatui::restore();

    result
}

/// Spawn the repeating timer that drives clock updates
fn spawn_tick_task(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        // A stall should not replay the seconds it swallowed
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The immediate first tick is redundant with the startup draw
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(Message::Tick).await.is_err() {
                // Receiver dropped on shutdown
                break;
            }
        }
    });
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut ClockState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut hits = HitMap::default();

    // First frame immediately, before the first tick
    terminal.draw(|frame| render::view(frame, state, &mut hits))?;

    while !state.should_quit() {
        let mut dirty = false;

        // Process queued messages (tick, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
            dirty = true;
        }

        // Handle terminal events
        if let Some(message) = event::poll(&hits)? {
            process_message(state, message);
            dirty = true;
        }

        if dirty && !state.should_quit() {
            terminal.draw(|frame| render::view(frame, state, &mut hits))?;
        }
    }

    info!("Quit requested, shutting down");
    Ok(())
}

/// Apply a message and any follow-ups it produces
fn process_message(state: &mut ClockState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        next = handler::update(state, msg).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_tick_task_does_not_replay_missed_ticks() {
        let (tx, mut rx) = mpsc::channel::<Message>(64);
        spawn_tick_task(tx);

        // Let the task swallow its immediate first tick
        tokio::task::yield_now().await;

        // Jump well past several tick periods at once
        advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;

        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        assert_eq!(ticks, 1);
    }
}
