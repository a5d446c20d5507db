use chrono::{Local, NaiveDate};
use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio::{
    app::{update, Action, AppState},
    config::{Cli, Command, Config},
    content, cv,
    event::AppEvent,
    logging,
    model::{EntryKind, TimelineEntry},
    paths::Paths,
    view::render,
    watcher,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    // Install color-eyre panic handler for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command.clone() {
        Some(Command::Durations { at }) => {
            let _guard = logging::init(&cli.batch_log_config())?;
            let today = at.unwrap_or_else(|| Local::now().date_naive());
            print_durations(&Paths::resolve(&cli.data_dir), today)
        }
        Some(Command::ExportCv { out }) => {
            let _guard = logging::init(&cli.batch_log_config())?;
            let paths = Paths::resolve(&cli.data_dir);
            let (site, _) = content::load_site(&paths);
            let written = cv::export_cv(&site, &paths.site_root, &out)?;
            println!("{}", written.display());
            Ok(())
        }
        None => run_tui(&cli),
    }
}

/// Print every dated entry with its duration, one per line.
fn print_durations(paths: &Paths, today: NaiveDate) -> Result<()> {
    let (site, failures) = content::load_site(paths);
    if site.experience.is_none() && site.education.is_none() {
        return Err(eyre!(
            "no experience or education content in {} ({} files failed to load)",
            paths.data_dir.display(),
            failures.len()
        ));
    }

    let mut stdout = std::io::stdout().lock();
    for entry in site.timeline(today) {
        writeln!(stdout, "{}", duration_row(&entry))?;
    }
    Ok(())
}

/// Pure function: tab-separated row for the `durations` listing.
fn duration_row(entry: &TimelineEntry) -> String {
    let kind = match entry.kind {
        EntryKind::Experience => "experience",
        EntryKind::Education => "education",
    };
    format!(
        "{}\t{}\t{}\t{}\t{}",
        kind,
        entry.organization,
        entry.heading,
        entry.display_date,
        entry.duration.as_deref().unwrap_or("-")
    )
}

fn run_tui(cli: &Cli) -> Result<()> {
    let colorfgbg = std::env::var("COLORFGBG").ok();
    let config = Config::from_cli(cli, colorfgbg.as_deref());

    // Logs go to a file while the terminal is in raw mode
    let _guard = logging::init(&config.log)?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        theme = %config.theme.current,
        "starting folio"
    );

    // Resolve all file paths
    let paths = Paths::resolve(&config.data_dir);

    // Initialize application state
    let state = AppState::new().with_theme(config.theme);

    // Start loading and watching content (returns channel for receiving events)
    let watcher_rx = watcher::start_watching(&paths)
        .map_err(|e| eyre!("Failed to start file watcher: {}", e))?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, state, &watcher_rx, &paths, config.tick_rate);

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("folio exited");
    result
}

/// Main event loop following Elm Architecture.
/// Separated from main() for testability.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut state: AppState,
    watcher_rx: &std::sync::mpsc::Receiver<AppEvent>,
    paths: &Paths,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Render current state
        terminal.draw(|frame| {
            render(&state, frame);
        })?;

        // Poll keyboard events with timeout
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state = update(state, AppEvent::Key(key));
                }
            }
        }

        // Side effects requested by the last key
        if let Some(action) = state.pending_action.take() {
            let event = perform_action(action, &state, paths, &export_dir());
            state = update(state, event);
        }

        // Drain content and watcher events
        while let Ok(event) = watcher_rx.try_recv() {
            state = update(state, event);
        }

        // Tick event
        if last_tick.elapsed() >= tick_rate {
            state = update(state, AppEvent::Tick(Local::now()));
            last_tick = Instant::now();
        }

        // Check quit condition
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Exported files land in the working directory.
fn export_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Run a side effect and report its outcome as an event.
fn perform_action(action: Action, state: &AppState, paths: &Paths, dest_dir: &Path) -> AppEvent {
    match action {
        Action::ExportCv => {
            match cv::export_cv(&state.site, &paths.site_root, dest_dir) {
                Ok(path) => AppEvent::CvExported(path),
                Err(e) => {
                    tracing::warn!(error = %e, "CV export failed");
                    AppEvent::Error {
                        source: "cv".to_string(),
                        error: e.into(),
                    }
                }
            }
        }
    }
}
