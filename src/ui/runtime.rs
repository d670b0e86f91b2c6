use crate::config::Config;
use crate::marvel::CharacterService;
use crate::ui::app::App;
use crate::ui::char_info::CharInfoPanel;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// Blocks the calling thread; fetches run on `runtime`.
pub fn run(
    config: &Config,
    service: Arc<dyn CharacterService>,
    runtime: Handle,
    initial_id: Option<u32>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.panel.tick_rate_ms);
    let mut panel = CharInfoPanel::new(service, runtime, config.panel.stale_results);
    panel.set_character_id(initial_id);

    let mut app = App::new(panel);
    app.start();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(?initial_id, "Character panel started");

    loop {
        app.poll_background();
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Character panel stopped");
    Ok(())
}
