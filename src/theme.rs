//! Light/dark theme preference with persistence and change listeners.

use crate::config::SettingsStore;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class used for the page body.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

type Listener = Box<dyn FnMut(Theme)>;

/// Two-state theme preference backed by the settings document.
///
/// Starts as [`Theme::Light`]; the saved value is only picked up by an
/// explicit [`ThemeStore::load_saved`].
pub struct ThemeStore {
    store: SettingsStore,
    current: Theme,
    listeners: Vec<Listener>,
}

impl ThemeStore {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            current: Theme::default(),
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Register a listener; listeners run in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Adopt the persisted theme and notify listeners.
    ///
    /// A missing or unreadable document leaves the current theme untouched.
    pub fn load_saved(&mut self) {
        match self.store.read() {
            Ok(Some(settings)) => {
                self.current = settings.theme;
                log::debug!("loaded saved theme {}", self.current);
                self.notify();
            }
            Ok(None) => {}
            Err(e) => log::warn!("keeping {} theme: {}", self.current, e),
        }
    }

    /// Flip the theme, notify listeners, then persist.
    ///
    /// Persistence failures are logged and otherwise ignored.
    pub fn toggle(&mut self) -> Theme {
        self.apply(self.current.toggled())
    }

    /// Switch to `theme`, behaving like [`ThemeStore::toggle`] when it differs
    /// from the current one and doing nothing otherwise.
    pub fn set(&mut self, theme: Theme) -> Theme {
        if theme != self.current {
            self.apply(theme);
        }
        self.current
    }

    fn apply(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.notify();

        if let Err(e) = self.store.update(|s| s.theme = theme) {
            log::warn!("failed to save theme preference: {}", e);
        }
        theme
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(self.current);
        }
    }
}
