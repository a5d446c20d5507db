use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::{Action, AppState, Banner, Section};

/// Jump size for Ctrl+D / Ctrl+U
const PAGE_JUMP: usize = 5;

/// Pure navigation state transition function.
/// Takes current state + keyboard event, returns new state.
/// No I/O, no side effects, fully unit testable.
pub fn handle_key(mut state: AppState, key: KeyEvent) -> AppState {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return state;
    }

    // Help overlay has priority
    if state.show_help {
        return handle_help_key(state, key);
    }

    // Open menu captures navigation keys
    if state.menu.is_some() {
        return handle_menu_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            state
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            match Section::from_index(index) {
                Some(section) => switch_section(state, section),
                None => state,
            }
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            let next = state.section.next();
            switch_section(state, next)
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            let prev = state.section.prev();
            switch_section(state, prev)
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            move_cursor(state, PAGE_JUMP as isize)
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            move_cursor(state, -(PAGE_JUMP as isize))
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(state, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(state, -1),
        KeyCode::Char('g') | KeyCode::Home => {
            *state.cursor.get_mut(state.section) = 0;
            state
        }
        KeyCode::Char('G') | KeyCode::End => {
            let last = state.section_len(state.section) - 1;
            *state.cursor.get_mut(state.section) = last;
            state
        }
        KeyCode::Char('d') | KeyCode::Enter | KeyCode::Char(' ') => toggle_selected_duration(state),
        KeyCode::Char('D') => {
            state.show_all_durations = !state.show_all_durations;
            state
        }
        KeyCode::Esc => hide_durations(state),
        KeyCode::Char('t') => {
            let message = state.theme.toggle();
            state.banner = Some(Banner::info(message));
            state
        }
        KeyCode::Char('c') => {
            state.pending_action = Some(Action::ExportCv);
            state
        }
        KeyCode::Char('m') => open_menu(state),
        KeyCode::Char('?') => {
            state.show_help = true;
            state
        }
        _ => state,
    }
}

/// Handle key input when help overlay is shown.
/// Any key dismisses help.
fn handle_help_key(mut state: AppState, _key: KeyEvent) -> AppState {
    state.show_help = false;
    state
}

/// Handle key input while the section menu is open.
fn handle_menu_key(mut state: AppState, key: KeyEvent) -> AppState {
    let Some(highlighted) = state.menu else {
        return state;
    };
    let last = Section::ALL.len() - 1;

    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
            state.menu = Some((highlighted + 1).min(last));
            state
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
            state.menu = Some(highlighted.saturating_sub(1));
            state
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            choose_menu_entry(state, index)
        }
        KeyCode::Enter | KeyCode::Char(' ') => choose_menu_entry(state, highlighted),
        KeyCode::Esc | KeyCode::Char('m') => close_menu(state),
        KeyCode::Char('q') => {
            state.should_quit = true;
            state
        }
        _ => state,
    }
}

fn open_menu(mut state: AppState) -> AppState {
    state.menu = Some(state.section.index());
    state.banner = Some(Banner::info("Navigation menu opened"));
    state
}

fn close_menu(mut state: AppState) -> AppState {
    state.menu = None;
    state.banner = Some(Banner::info("Navigation menu closed"));
    state
}

fn choose_menu_entry(state: AppState, index: usize) -> AppState {
    let state = close_menu(state);
    match Section::from_index(index) {
        Some(section) => switch_section(state, section),
        None => state,
    }
}

/// Show another section. Cursor positions are kept per section.
fn switch_section(mut state: AppState, section: Section) -> AppState {
    state.section = section;
    state
}

/// Move the cursor of the current section by `delta`, clamped to its length.
fn move_cursor(mut state: AppState, delta: isize) -> AppState {
    let last = state.section_len(state.section) - 1;
    let cursor = state.cursor.get_mut(state.section);
    *cursor = if delta.is_negative() {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        cursor.saturating_add(delta as usize).min(last)
    };
    state
}

/// Reveal or hide the duration of the selected dated entry.
fn toggle_selected_duration(mut state: AppState) -> AppState {
    if let Some(index) = state.selected_entry() {
        if !state.revealed.remove(&index) {
            state.revealed.insert(index);
        }
    }
    state
}

fn hide_durations(mut state: AppState) -> AppState {
    state.revealed.clear();
    state.show_all_durations = false;
    state
}
