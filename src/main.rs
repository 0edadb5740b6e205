mod app;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use app::App;
use tvpicker::config::Config;
use tvpicker::log;
use tvpicker::tui::terminal::{self, Tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let mut modal_override: Option<bool> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--modal" | "-m" => modal_override = Some(true),
            "--push" | "-p" => modal_override = Some(false),
            other => eprintln!("Warning: ignoring unknown argument '{}'", other),
        }
    }

    // Precedence: CLI > env var > config file > default
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}", e);
            log::log(&format!("Using default config: {}", e));
            Config::default()
        }
    }
    .with_overrides(modal_override);
    log::log(&format!("Config: {:?}", config));

    let mut terminal = terminal::init()?;
    let mut app = App::new(config);

    let result = run_app(&mut terminal, &mut app).await;

    terminal::restore(&mut terminal)?;

    if let Some((item, index)) = app.last_selection.borrow().as_ref() {
        println!("{} selected at index {}", item, index);
    }

    result
}

async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Present straight away, like pressing the demo button
    app.open_picker();

    loop {
        terminal.draw(|frame| app::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        // Redraw quickly while a cell is still animating
        let tick = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
            _ = tokio::time::sleep(tick) => {}
        }
    }
}
