//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which panel of the search screen has focus
//! - [`LoginField`] / [`LoginForm`] - Login form input state
//! - [`StatusMessage`] - Transient status line

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Search,
}

/// Represents which panel of the search screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Results,
    Breeds,
    Favorites,
}

impl Focus {
    /// Tab order: results -> breeds -> favorites -> results
    pub fn next(self) -> Self {
        match self {
            Focus::Results => Focus::Breeds,
            Focus::Breeds => Focus::Favorites,
            Focus::Favorites => Focus::Results,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Results => Focus::Favorites,
            Focus::Breeds => Focus::Results,
            Focus::Favorites => Focus::Breeds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Name,
    Email,
}

/// Login form input state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub field: LoginField,
    /// Inline message under the form
    pub error: Option<String>,
    /// A login request is in flight
    pub submitting: bool,
}

impl LoginForm {
    fn active_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Name => &mut self.name,
            LoginField::Email => &mut self.email,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.active_mut().pop();
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            LoginField::Name => LoginField::Email,
            LoginField::Email => LoginField::Name,
        };
    }

    /// Both fields are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Transient status line text and the tick it was set at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: u64,
}
