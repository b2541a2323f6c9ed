use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use scrollwatch::app::App;
use scrollwatch::config::{self, Config};
use scrollwatch::scroll::Axis;

/// Infinite-scroll demo driven by an offset watcher
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Infinite-scroll demo: loads the next page when you scroll near the end"
)]
struct Args {
    /// Distance from the end of content that triggers the next page
    #[arg(long)]
    threshold: Option<f64>,

    /// Entries per loaded page
    #[arg(long)]
    page_size: Option<usize>,

    /// Stop loading after this many pages
    #[arg(long)]
    max_pages: Option<usize>,

    /// Watch the horizontal axis instead of the vertical one.
    /// Entries are narrower than most terminals, so every page loads at startup
    #[arg(long)]
    horizontal: bool,
}

impl Args {
    /// CLI flags take precedence over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(threshold) = self.threshold {
            config.watcher.threshold = threshold;
        }
        if let Some(page_size) = self.page_size {
            config.feed.page_size = page_size;
        }
        if let Some(max_pages) = self.max_pages {
            config.feed.max_pages = max_pages;
        }
        if self.horizontal {
            config.watcher.axis = Axis::Horizontal;
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/scrollwatch-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config before parsing args so flags can override it
    let config_result = config::load_config();
    let mut config = config_result.config;

    let args = Args::parse();
    args.apply(&mut config);

    // Validate before touching the terminal so errors print cleanly
    let mut app = App::new(&config)?;
    app.warning = config_result.warning;

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    let app = result?;

    log::debug!(
        "Session ended with {} entries after {} hits",
        app.feed.len(),
        app.hits()
    );

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/scrollwatch-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== SCROLLWATCH DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
