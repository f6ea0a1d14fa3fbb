//! Event loop hosting a single SearchList widget in the terminal.
//!
//! The loop is passive: it blocks on input events and the widget's wakeup
//! handle, and renders only when the widget is dirty. The debounced filter
//! recompute fires on the tokio timer and notifies the handle, so a
//! quiet-period expiry re-renders without any input arriving.

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use log::{debug, info};

use crate::error::RunnerError;
use crate::item::SearchItem;
use crate::search_list::SearchList;
use crate::search_list::render;
use crate::terminal::TerminalGuard;

/// Run the event loop until the user quits (Ctrl+C).
///
/// Takes over the terminal for the duration of the call; the terminal is
/// restored on every exit path, including panics.
pub async fn run<T: SearchItem>(list: &SearchList<T>) -> Result<(), RunnerError> {
    let mut term_guard = TerminalGuard::new()?;
    run_with_terminal(list, &mut term_guard).await
}

async fn run_with_terminal<T: SearchItem>(
    list: &SearchList<T>,
    term_guard: &mut TerminalGuard,
) -> Result<(), RunnerError> {
    // State changes notify this handle so the idle loop re-renders
    let wakeup = list.wakeup_handle();

    let mut events = EventStream::new();

    info!("runner started for {}", list.id());

    // Initial render
    let mut force_render = true;

    loop {
        if force_render || list.is_dirty() {
            list.clear_dirty();
            force_render = false;
            term_guard.terminal().draw(|frame| {
                let area = frame.area();
                render::render(frame, list, area, true);
            })?;
        }

        tokio::select! {
            event = events.next() => {
                let event = match event {
                    Some(Ok(event)) => event,
                    Some(Err(err)) => return Err(RunnerError::Io(err)),
                    None => return Err(RunnerError::EventStreamClosed),
                };
                match event {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            info!("exit requested");
                            break;
                        }
                        let (result, _events) = list.handle_key(&key);
                        debug!("key {:?} -> {:?}", key.code, result);
                    }
                    Event::Resize(w, h) => {
                        debug!("resize to {}x{}", w, h);
                        force_render = true;
                    }
                    _ => {}
                }
            }
            // Wakeups coalesce into one permit, so a burst of state changes
            // produces a single render pass
            _ = wakeup.awoken() => {}
        }
    }

    Ok(())
}
