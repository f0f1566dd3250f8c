//! Artview - a terminal browser for a public artwork catalog.

use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use artview::api::CatalogClient;
use artview::app::App;
use artview::config::{Config, Settings};
use artview::error::AppError;
use artview::events::EventHandler;
use artview::tasks::create_task_channel;
use artview::{logging, ui};

#[derive(Parser)]
#[command(name = "artview")]
#[command(about = "Browse a public artwork catalog from the terminal")]
#[command(version)]
struct Cli {
    /// Catalog API base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Rows per page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn config_path(&self) -> Result<PathBuf, AppError> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_path()?),
        }
    }

    fn settings(&self) -> Result<Settings, AppError> {
        let config = Config::load_from(&self.config_path()?)?;

        let mut settings = config.settings;
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
        settings.validate()?;
        Ok(settings)
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.debug) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e).context("load settings");
        }
    };

    if cli.init_config {
        return write_config(&cli, settings);
    }

    ui::load_theme(&settings.theme);
    let client = CatalogClient::new(&settings)
        .map_err(AppError::from)
        .context("create catalog client")?;
    info!(base_url = client.base_url(), page_size = settings.page_size, "Settings loaded");

    let mut terminal = setup_terminal()?;
    install_panic_hook();

    let result = run(&mut terminal, &settings, &client);

    restore_terminal(&mut terminal)?;
    if let Err(e) = &result {
        error!(error = %e, "Application error");
    }
    logging::shutdown();
    result
}

/// Save `settings` to the config path, refusing to replace an existing file.
fn write_config(cli: &Cli, settings: Settings) -> Result<()> {
    let path = cli.config_path().context("resolve config path")?;
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    Config { settings }
        .save_to(&path)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "Wrote configuration");
    println!("Wrote {}", path.display());
    Ok(())
}

/// Drive the draw, input and message loop until the app quits.
fn run(terminal: &mut Tui, settings: &Settings, client: &CatalogClient) -> Result<()> {
    let mut app = App::new(settings);
    let events = EventHandler::with_tick_rate(settings.tick_rate_ms);
    let (mut rx, spawner) = create_task_channel();

    while !app.should_quit() {
        if let Some(request) = app.take_pending_fetch() {
            spawner.spawn_fetch_page(client, request);
        }

        terminal.draw(|frame| app.view(frame)).context("draw frame")?;

        let event = events.next().context("read terminal event")?;
        app.update(event);

        while let Ok(message) = rx.try_recv() {
            app.handle_api_message(message);
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().context("clear terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

/// Restore the terminal before printing a panic message.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
