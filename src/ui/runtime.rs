use crate::assets::AssetSource;
use crate::cache::{CompletionSink, FetchCache};
use crate::config::ViewConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the board until the user quits.
///
/// All state lives on this thread. Fetches run on `runtime` and come back
/// as [`AppEvent::Fetched`].
pub fn run(source: Arc<dyn AssetSource>, runtime: Handle, view: &ViewConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(view.tick_rate_ms.max(1));
    let events = EventHandler::new(tick_rate);

    let fetched_tx = events.sender();
    let sink: CompletionSink = Arc::new(move |outcome| {
        if fetched_tx.send(AppEvent::Fetched(outcome)).is_err() {
            tracing::debug!("Fetch finished after UI shut down");
        }
    });
    let mut app = App::new(FetchCache::new(source, runtime, sink), view.page_size);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Fetched(outcome)) => app.on_fetch_complete(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
