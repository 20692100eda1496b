//! Keyboard handling.
//!
//! Login screen: type into the focused field, Tab switches field, Enter
//! submits, Esc quits.
//!
//! Search screen, results/favorites panels:
//!
//! | Key | Action |
//! |-----|--------|
//! | j/k, Down/Up | move cursor |
//! | Space, f | toggle favorite (results) / remove (favorites) |
//! | n/p, Right/Left | next/previous page |
//! | s | toggle sort order |
//! | S | cycle sort field |
//! | c | clear breed filter |
//! | C | clear favorites |
//! | m | request match |
//! | L | log out |
//! | q | quit |
//!
//! In the breed panel printable keys edit the filter query; Enter toggles
//! the highlighted breed, Esc clears the query, Delete clears the filter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, Screen};

impl App {
    /// Apply one key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Search => self.handle_search_key(key),
        }
    }

    /// Bracketed paste goes into whichever text input has focus.
    pub fn handle_paste(&mut self, text: &str) {
        let chars = text.chars().filter(|c| !c.is_control());
        match self.screen {
            Screen::Login if !self.login.submitting => chars.for_each(|c| self.login.push_char(c)),
            Screen::Search if self.focus == Focus::Breeds && !self.match_visible => {
                chars.for_each(|c| self.breeds.push_char(c))
            }
            _ => {}
        }
        self.mark_dirty();
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if self.login.submitting {
            if key.code == KeyCode::Esc {
                self.quit();
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.toggle_field()
            }
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => self.login.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.login.push_char(c)
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        if self.match_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.dismiss_match();
            }
            return;
        }

        match key.code {
            KeyCode::Tab => return self.focus_next(),
            KeyCode::BackTab => return self.focus_prev(),
            _ => {}
        }

        match self.focus {
            Focus::Breeds => self.handle_breeds_key(key),
            Focus::Results => {
                if !self.handle_results_key(key) {
                    self.handle_common_key(key);
                }
            }
            Focus::Favorites => {
                if !self.handle_favorites_key(key) {
                    self.handle_common_key(key);
                }
            }
        }
    }

    fn handle_breeds_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.breeds.cursor_up(),
            KeyCode::Down => self.breeds.cursor_down(),
            KeyCode::Enter => self.toggle_highlighted_breed(),
            KeyCode::Delete => self.clear_breed_filter(),
            KeyCode::Backspace => self.breeds.pop_char(),
            KeyCode::Esc => {
                if self.breeds.query().is_empty() {
                    self.focus_results();
                } else {
                    self.breeds.clear_query();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.breeds.push_char(c)
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.results.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.results.cursor_down(),
            KeyCode::Home | KeyCode::Char('g') => self.results.cursor_to_top(),
            KeyCode::Char(' ') | KeyCode::Char('f') => self.toggle_selected_favorite(),
            _ => return false,
        }
        true
    }

    fn handle_favorites_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.favorites_cursor = self.favorites_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.favorites_cursor + 1 < self.favorites.len() {
                    self.favorites_cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('d') | KeyCode::Delete => {
                self.remove_highlighted_favorite()
            }
            _ => return false,
        }
        true
    }

    fn handle_common_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') | KeyCode::Right => self.next_page(),
            KeyCode::Char('p') | KeyCode::Left => self.prev_page(),
            KeyCode::Char('s') => self.toggle_sort_order(),
            KeyCode::Char('S') => self.cycle_sort_field(),
            KeyCode::Char('c') => self.clear_breed_filter(),
            KeyCode::Char('C') => self.clear_favorites(),
            KeyCode::Char('m') => self.request_match(),
            KeyCode::Char('L') => self.logout(),
            KeyCode::Char('/') | KeyCode::Char('b') => {
                self.focus = Focus::Breeds;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }
}
