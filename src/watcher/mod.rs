use crate::content;
use crate::error::WatcherError;
use crate::event::AppEvent;
use crate::paths::Paths;
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

/// Result type for watcher operations
pub type WatcherResult<T> = Result<T, WatcherError>;

/// Quiet period that coalesces the burst of events one save produces
const DEBOUNCE: Duration = Duration::from_millis(200);

/// Load the whole site and send it, followed by one `Error` per failed file.
///
/// # Returns
/// false once the receiving side has gone away
pub fn send_site(paths: &Paths, tx: &mpsc::Sender<AppEvent>) -> bool {
    let (site, failures) = content::load_site(paths);

    if tx.send(AppEvent::ContentLoaded(site)).is_err() {
        return false;
    }
    for (source, error) in failures {
        if tx
            .send(AppEvent::Error {
                source,
                error: error.into(),
            })
            .is_err()
        {
            return false;
        }
    }
    true
}

/// Start a worker thread that owns the watcher and performs every load.
/// Bursts of requests arriving within `DEBOUNCE` of each other produce a
/// single reload. The thread (and the watcher with it) ends once the
/// receiving side has gone away.
fn start_reload_worker(
    paths: Paths,
    watcher: RecommendedWatcher,
    reload_rx: mpsc::Receiver<()>,
    tx: mpsc::Sender<AppEvent>,
) {
    std::thread::spawn(move || {
        let _watcher = watcher;

        // Initial load
        if !send_site(&paths, &tx) {
            return;
        }

        while reload_rx.recv().is_ok() {
            std::thread::sleep(DEBOUNCE);
            while reload_rx.try_recv().is_ok() {}

            tracing::info!(data_dir = %paths.data_dir.display(), "content changed, reloading");
            if !send_site(&paths, &tx) {
                return;
            }
        }
    });
}

/// Starts loading and watching the data directory and returns a channel
/// for receiving events. The first event is always the initial
/// `ContentLoaded`.
///
/// # Imperative Shell
/// This function handles I/O setup (file watching) but delegates parsing to pure functions.
///
/// # Returns
/// Channel receiver for AppEvent stream
pub fn start_watching(paths: &Paths) -> WatcherResult<mpsc::Receiver<AppEvent>> {
    let (tx, rx) = mpsc::channel();
    let (reload_tx, reload_rx) = mpsc::channel::<()>();

    // Event paths from notify are absolute
    let watched = if paths.data_dir.is_dir() {
        Paths::resolve(&std::fs::canonicalize(&paths.data_dir)?)
    } else {
        paths.clone()
    };

    let tx_watcher = tx.clone();
    let watched_paths = watched.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            handle_watch_event(res, &watched_paths, &reload_tx, &tx_watcher);
        },
        Config::default().with_poll_interval(DEBOUNCE),
    )?;

    watch_path(&mut watcher, &watched.data_dir)?;

    start_reload_worker(paths.clone(), watcher, reload_rx, tx);

    Ok(rx)
}

fn watch_path(watcher: &mut RecommendedWatcher, path: &Path) -> WatcherResult<()> {
    if path.exists() {
        watcher.watch(path, RecursiveMode::NonRecursive)?;
    } else {
        tracing::warn!(path = %path.display(), "watch path does not exist");
    }
    Ok(())
}

/// True when a change to `path` should trigger a reload.
/// Editors often save through a temp file and rename, so only the final
/// component is compared.
fn is_content_change(paths: &Paths, path: &Path) -> bool {
    paths.is_content_file(path)
        || paths
            .content_files()
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == path.file_name())
}

/// Handles a single watch event, requesting a reload for content changes
fn handle_watch_event(
    res: Result<notify::Event, notify::Error>,
    paths: &Paths,
    reload: &mpsc::Sender<()>,
    tx: &mpsc::Sender<AppEvent>,
) {
    match res {
        Ok(event) => {
            if event.kind.is_access() {
                return;
            }
            if event.paths.iter().any(|p| is_content_change(paths, p)) {
                let _ = reload.send(());
            }
        }
        Err(e) => {
            let _ = tx.send(AppEvent::Error {
                source: "file_watcher".to_string(),
                error: WatcherError::from(e).into(),
            });
        }
    }
}
