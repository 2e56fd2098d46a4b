// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;
use std::time::Duration;

use eyre::Result;

use crate::cli::Args;
use crate::config;
use crate::core::{action::Action, engine::Engine, error::Error, events::Event};
use crate::ui::{Display, event::InputEvent};
use crate::{serror, sinfo};

/// How long the input poll waits before forcing a refresh frame. Short
/// enough that displayed values never lag noticeably; correctness does not
/// depend on it, every value is recomputed from the supplied instant.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// How long a status-line message stays visible.
const STATUS_LINGER_SECS: u64 = 5;

/// Startup sequence: logging, config (fatal on any error), display.
/// Then hand the terminal to the event loop until quit.
pub fn run(args: Args) -> Result<()> {
    if args.verbose {
        crate::log::set_verbose(true);
    }

    sinfo!("Tempo", "starting, config: {}", args.file.display());

    let set = config::load_from_path(&args.file).map_err(|e| {
        serror!("Config", "{e}");
        Error::Config(e)
    })?;
    sinfo!("Config", "loaded {} timers", set.len());

    let mut engine = Engine::new(set);

    let display = Display::init().map_err(|e| {
        serror!("Display", "{e}");
        e
    })?;

    // The alternate screen owns the terminal from here; console echo would
    // land inside it.
    crate::log::set_console_enabled(false);
    let result = event_loop(&mut engine, display, &args.file);
    crate::log::set_console_enabled(true);

    result
}

/// Poll / dispatch / redraw. Single-threaded: the engine is owned here
/// exclusively, and the bounded input poll is the only suspension point.
fn event_loop(engine: &mut Engine, mut display: Display, config_path: &Path) -> Result<()> {
    let mut status: Option<(String, u64)> = None;

    loop {
        let now = now_secs();

        if let Some((_, since)) = &status {
            if now >= since + STATUS_LINGER_SECS {
                status = None;
            }
        }

        // Redraw re-observes every timer, which is also what normalizes
        // overrun ones.
        let rows = engine.snapshot(now);
        display.draw(&rows, status.as_ref().map(|(m, _)| m.as_str()))?;

        let event = match crate::ui::event::poll_input(POLL_INTERVAL)? {
            None => Event::Tick { now: now_secs() },
            Some(InputEvent::ForceQuit) => Event::Quit { now: now_secs() },
            Some(InputEvent::Key(c)) => match Event::from_key(c, now_secs()) {
                Some(event) => event,
                None => continue,
            },
            Some(InputEvent::Resize) => continue,
        };

        for action in engine.handle_event(event) {
            match action {
                Action::Persist => {
                    let now = now_secs();
                    match config::save::save_to_path(engine.set_mut(), config_path, now) {
                        Ok(()) => {
                            sinfo!("Save", "wrote {}", config_path.display());
                            status = Some(("saved".to_string(), now));
                        }
                        // Not fatal: report in place and keep running.
                        Err(e) => {
                            serror!("Save", "{e}");
                            status = Some((e.to_string(), now));
                        }
                    }
                }

                Action::Quit => {
                    sinfo!("Tempo", "quit");
                    return Ok(());
                }
            }
        }
    }
}

fn now_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    d.as_secs()
}
