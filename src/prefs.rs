//! UI Preferences
//!
//! Dark mode and sidebar state, persisted in localStorage under fixed
//! keys. Loaded once at startup, written on every toggle. Unreadable or
//! missing storage falls back to defaults.

use leptos::prelude::*;

const DARK_KEY: &str = "listified.dark";
const SIDEBAR_KEY: &str = "listified.sidebar-collapsed";

#[derive(Clone, Copy)]
pub struct Prefs {
    pub dark: RwSignal<bool>,
    pub sidebar_collapsed: RwSignal<bool>,
}

impl Prefs {
    pub fn load() -> Self {
        Self {
            dark: RwSignal::new(read_flag(DARK_KEY)),
            sidebar_collapsed: RwSignal::new(read_flag(SIDEBAR_KEY)),
        }
    }

    pub fn toggle_dark(&self) {
        self.dark.update(|v| *v = !*v);
        write_flag(DARK_KEY, self.dark.get_untracked());
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|v| *v = !*v);
        write_flag(SIDEBAR_KEY, self.sidebar_collapsed.get_untracked());
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_flag(key: &str) -> bool {
    storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

fn write_flag(key: &str, value: bool) {
    if let Some(s) = storage() {
        let _ = s.set_item(key, if value { "true" } else { "false" });
    }
}
