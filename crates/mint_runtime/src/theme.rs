//! Theme preference store over the host preference and appearance services.

use leptos::logging;
use platform_host::{AppearanceService, PrefsStore};

use crate::model::ThemePreference;

/// Preference key holding the raw `light` / `dark` value.
pub const THEME_PREF_KEY: &str = "theme";

/// Reads, toggles, and applies the page theme.
///
/// Storage failures never surface to the user: they are logged and the effective theme is still
/// applied to the document.
pub struct ThemeStore<'a> {
    prefs: &'a dyn PrefsStore,
    appearance: &'a dyn AppearanceService,
}

impl<'a> ThemeStore<'a> {
    pub fn new(prefs: &'a dyn PrefsStore, appearance: &'a dyn AppearanceService) -> Self {
        Self { prefs, appearance }
    }

    /// Applies the system default synchronously, ahead of the stored preference being read.
    pub fn seed(&self) -> ThemePreference {
        let theme = self.system_default();
        self.apply(theme);
        theme
    }

    /// Returns the persisted theme or the system default, and applies it.
    pub async fn read(&self) -> ThemePreference {
        let theme = self.effective().await;
        self.apply(theme);
        theme
    }

    /// Flips the effective theme, persists it, applies it, and returns it.
    pub async fn toggle(&self) -> ThemePreference {
        let next = self.effective().await.toggled();
        if let Err(err) = self.prefs.save_pref(THEME_PREF_KEY, next.as_str()).await {
            logging::warn!("persist theme failed: {err}");
        }
        self.apply(next);
        next
    }

    async fn effective(&self) -> ThemePreference {
        let persisted = match self.prefs.load_pref(THEME_PREF_KEY).await {
            Ok(raw) => raw.as_deref().and_then(ThemePreference::parse),
            Err(err) => {
                logging::warn!("load theme failed: {err}");
                None
            }
        };
        persisted.unwrap_or_else(|| self.system_default())
    }

    fn system_default(&self) -> ThemePreference {
        if self.appearance.prefers_dark_color_scheme() == Some(true) {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    fn apply(&self, theme: ThemePreference) {
        self.appearance.set_dark_flag(theme.is_dark());
    }
}
