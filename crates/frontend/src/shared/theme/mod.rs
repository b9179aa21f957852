//! Light/dark theme.
//!
//! Dark mode is a `dark` class on `<body>`. The preference lives in tab
//! storage next to the session and survives a reload but not a new tab.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;
use crate::system::auth::storage::{load_dark_mode, save_dark_mode};
use crate::system::auth::{BrowserSessionStore, SessionStore};

const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Tooltip of the toggle button
    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Light => "ডার্ক মোড",
            Theme::Dark => "লাইট মোড",
        }
    }

    pub fn load(store: &dyn SessionStore) -> Self {
        Self::from_dark_flag(load_dark_mode(store))
    }

    pub fn save(&self, store: &dyn SessionStore) {
        save_dark_mode(store, self.is_dark());
    }
}

/// Add or remove the `dark` class on `<body>`
fn apply_body_class(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if result.is_err() {
        log::warn!("could not apply {:?} theme", theme);
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to tab storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        theme.save(&BrowserSessionStore);
        apply_body_class(theme);
    }

    /// Back to light without touching storage (after the session was cleared)
    pub fn reset(&self) {
        self.theme.set(Theme::Light);
        apply_body_class(Theme::Light);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = Theme::load(&BrowserSessionStore);
    apply_body_class(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="button button--ghost"
            id="dark-mode-toggle"
            title=move || ctx.theme.get().toggle_title()
            on:click=move |_| ctx.toggle()
        >
            {move || if ctx.theme.get().is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemorySessionStore;

    #[test]
    fn test_theme_persists_in_store() {
        let store = MemorySessionStore::default();
        assert_eq!(Theme::load(&store), Theme::Light);

        Theme::Dark.save(&store);
        assert_eq!(Theme::load(&store), Theme::Dark);
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));

        Theme::Dark.toggled().save(&store);
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::from_dark_flag(true).is_dark());
        assert!(!Theme::default().is_dark());
    }
}
