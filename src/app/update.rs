use chrono::Datelike;

use crate::app::state::Banner;
use crate::app::{handle_key, AppState};
use crate::error::FolioError;
use crate::event::AppEvent;

/// Pure update function following Elm Architecture.
/// Takes current state and event, returns new state.
/// No I/O, no side effects - fully deterministic and unit testable.
pub fn update(mut state: AppState, event: AppEvent) -> AppState {
    match event {
        AppEvent::ContentLoaded(site) => {
            tracing::debug!(empty = site.is_empty(), "content loaded");
            state.timeline = site.timeline(state.today);
            state.site = site;
            state.loaded = true;
            // Indices may now point at different entries
            state.revealed.clear();
            state.clamp_cursors();
            state
        }

        AppEvent::Key(key) => {
            // Delegate to navigation handler
            handle_key(state, key)
        }

        AppEvent::Tick(now) => {
            let today = now.date_naive();
            let month_changed =
                (today.year(), today.month()) != (state.today.year(), state.today.month());
            state.today = today;
            if month_changed {
                // Ongoing ranges grow by a month
                state.timeline = state.site.timeline(today);
            }

            if let Some(banner) = state.banner.as_mut() {
                banner.ticks_left = banner.ticks_left.saturating_sub(1);
                if banner.ticks_left == 0 {
                    state.banner = None;
                }
            }
            state
        }

        AppEvent::Error { source, error } => {
            if let FolioError::Cv(reason) = &error {
                state.banner = Some(Banner::error(format!(
                    "Sorry, the CV could not be exported: {}",
                    reason
                )));
            }
            state.push_error(format!("{}: {}", source, error));
            state
        }

        AppEvent::CvExported(path) => {
            state.banner = Some(Banner::info(format!("CV saved to {}", path.display())));
            state
        }
    }
}
