//! Ladle - TUI recipe finder.
//!
//! Entry point for the application.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use ladle::api::HttpRecipeApi;
use ladle::app::App;
use ladle::cli::Args;
use ladle::tui::TerminalEventGuard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &args);
    ratatui::restore();

    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, args: &Args) -> anyhow::Result<()> {
    // Enable bracketed paste. The guard restores the terminal even if the
    // application panics. Must be initialized after ratatui::init, which
    // can reset terminal flags.
    let _event_guard = TerminalEventGuard::new();

    let api = Arc::new(HttpRecipeApi::new(args.api_url.clone()));
    let mut app = App::new(api);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Poll for terminal events with a short timeout so completed
        // requests are applied promptly.
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Paste(text) => {
                    app.handle_paste(&text);
                }
                _ => {}
            }
        }

        app.process_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
