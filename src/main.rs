use fetch_dogs::app::App;
use fetch_dogs::cli::{parse_args, run_cli_command, CliCommand};
use fetch_dogs::startup::{build_client, init_logging, ClientConfig};
use fetch_dogs::terminal::{setup_panic_hook, TerminalManager};
use fetch_dogs::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tracing::{error, info};

/// Frame tick for spinners and status expiry
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle --version / --help before any initialization
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::RunTui(options)) => options,
        Ok(command) => {
            run_cli_command(&command);
            return Ok(());
        }
        Err(e) => {
            eprintln!("fetch-dogs: {}", e);
            eprintln!("Try 'fetch-dogs --help' for more information.");
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let config = ClientConfig::from_env().with_cli_options(&options);
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&config)?;
    info!(base_url = %config.base_url, version = env!("CARGO_PKG_VERSION"), "starting");

    let client = build_client(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(client);

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    term_manager.restore();

    if let Err(e) = &result {
        error!(error = %e, "event loop exited with error");
    }
    info!("exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        // Draw the UI only when something changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // stdin closed
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
