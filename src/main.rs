use solex::api::ApiClient;
use solex::app::{App, LookupOutcome, LookupRequest};
use solex::clipboard::{Clipboard, Osc52Clipboard};
use solex::config::Config;
use solex::{logging, ui};

use anyhow::{bail, Result};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use std::process::{Command, Stdio};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tui_input::backend::crossterm::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    let _log_guard = match Config::log_path()
        .and_then(|path| logging::init_logging(&path, &config.log_level))
    {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("solex: logging disabled: {e:#}");
            None
        }
    };

    match Config::config_path().and_then(|path| Config::write_default_if_missing(&path)) {
        Ok(true) => info!("wrote default config"),
        Ok(false) => {}
        Err(e) => warn!(error = %format!("{e:#}"), "could not write default config"),
    }

    let client = ApiClient::new(&config.api_url)?;
    info!(api_url = %client.base_url(), cluster = %config.cluster, view = ?config.view, "starting");

    run_tui(config, client).await?;

    Ok(())
}

async fn run_tui(config: Config, client: ApiClient) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);

    let (tx, mut rx) = mpsc::channel::<LookupOutcome>(10);

    let result = run_event_loop(&mut terminal, &mut app, &client, tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
    tx: mpsc::Sender<LookupOutcome>,
    rx: &mut mpsc::Receiver<LookupOutcome>,
) -> Result<()> {
    let mut clipboard = Osc52Clipboard::stdout();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for finished lookups
        while let Ok(outcome) = rx.try_recv() {
            app.apply(outcome);
        }

        // Poll for input events
        if event::poll(std::time::Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('c') if ctrl => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        if let Some(request) = app.submit() {
                            spawn_lookup(client, request, tx.clone());
                        }
                    }
                    KeyCode::F(5) => {
                        if let Some(request) = app.refresh() {
                            spawn_lookup(client, request, tx.clone());
                        }
                    }
                    KeyCode::Char('r') if ctrl => {
                        if let Some(request) = app.refresh() {
                            spawn_lookup(client, request, tx.clone());
                        }
                    }
                    KeyCode::Tab | KeyCode::BackTab => {
                        app.toggle_tab();
                    }
                    KeyCode::Up => {
                        app.select_prev();
                    }
                    KeyCode::Down => {
                        app.select_next();
                    }
                    KeyCode::Char('y') if ctrl => {
                        if let Some(target) = app.copy_target() {
                            copy(&mut clipboard, target);
                        }
                    }
                    KeyCode::Char('o') if ctrl => {
                        if let Some(url) = app.explorer_url() {
                            if let Err(e) = open_url(&url) {
                                warn!(%url, error = %e, "could not open browser, copying link");
                                copy(&mut clipboard, &url);
                            }
                        }
                    }
                    KeyCode::Char('e') if ctrl => {
                        app.use_example_address();
                    }
                    _ => {
                        app.address_input.handle_event(&ev);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn spawn_lookup(client: &ApiClient, request: LookupRequest, tx: mpsc::Sender<LookupOutcome>) {
    let client = client.clone();
    tokio::spawn(async move {
        let outcome = request.run(&client).await;
        let _ = tx.send(outcome).await;
    });
}

fn copy(clipboard: &mut impl Clipboard, text: &str) {
    if let Err(e) = clipboard.copy(text) {
        warn!(error = %e, "clipboard copy failed");
    }
}

const URL_OPENERS: [&str; 3] = ["xdg-open", "open", "explorer.exe"];

fn open_url(url: &str) -> Result<()> {
    open_url_with(url, &URL_OPENERS)
}

/// First opener that spawns wins
fn open_url_with(url: &str, openers: &[&str]) -> Result<()> {
    for cmd in openers {
        if Command::new(cmd)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .is_ok()
        {
            return Ok(());
        }
    }
    bail!("no URL opener available")
}
