use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

use findbar::app::App;
use findbar::config::{self, Config};
use findbar::{FileSettings, MemorySettings, SettingsStore, retrieve_saved_text};

/// Find-in-page bar playground
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (default: ~/.config/findbar/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the saved query and exit
    #[arg(long)]
    print_saved: bool,

    /// Initial total match count
    #[arg(long, default_value_t = 0)]
    total: usize,

    /// Initial current match
    #[arg(long, default_value_t = 0)]
    current: usize,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };
    let settings = open_settings(&config);

    if args.print_saved {
        if let Some(text) = retrieve_saved_text(&settings) {
            println!("{}", text);
        }
        return Ok(());
    }

    let mut app = App::new(settings, &config.theme.theme());
    app.bar.set_total_results(args.total);
    app.bar.set_current_result(args.current);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    result
}

fn open_settings(config: &Config) -> Box<dyn SettingsStore> {
    match config.settings.resolved_path() {
        Some(path) => Box::new(FileSettings::open(path)),
        None => {
            log::warn!("No home directory; the saved query will not outlive this session");
            Box::new(MemorySettings::new())
        }
    }
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_event(event::read()?);
    }
    Ok(())
}

/// Debug builds log to `findbar.log` next to the config; the terminal
/// belongs to the UI.
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    const LOG_FILE: &str = "findbar.log";

    let Some(dir) = config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
