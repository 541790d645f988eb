use crate::config::Config;
use crate::shutdown::{spawn_signal_listener, ShutdownHandle};
use crate::ui::app::{App, DynTargets};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Handle;

/// Run the game until the player quits or a signal arrives.
///
/// Must be called outside the tokio runtime; `runtime` only hosts the
/// countdown and the signal listener.
pub fn run(config: &Config, targets: DynTargets, runtime: Handle) -> io::Result<()> {
    let frame_rate = config.ui.frame_rate();
    let shutdown = ShutdownHandle::new();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(shutdown.clone());
    spawn_signal_listener(&runtime, shutdown.clone(), events.sender());
    let mut app = App::new(targets, runtime, events.sender());
    tracing::info!("Terminal UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(frame_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick { generation }) => app.on_tick(generation),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    tracing::info!(rounds = app.game().rounds(), "Terminal UI stopped");
    drop(guard);
    Ok(())
}
