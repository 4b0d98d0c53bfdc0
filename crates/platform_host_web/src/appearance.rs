//! Color-scheme detection and document dark-class toggling.

use platform_host::AppearanceService;

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default)]
/// Appearance service backed by `window.matchMedia` and `document.documentElement.classList`.
pub struct WebAppearanceService;

impl AppearanceService for WebAppearanceService {
    fn prefers_dark_color_scheme(&self) -> Option<bool> {
        #[cfg(target_arch = "wasm32")]
        {
            let query = web_sys::window()?
                .match_media(DARK_SCHEME_QUERY)
                .ok()
                .flatten()?;
            Some(query.matches())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = DARK_SCHEME_QUERY;
            None
        }
    }

    fn set_dark_flag(&self, enabled: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let _ = root.class_list().toggle_with_force(DARK_CLASS, enabled);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = enabled;
        }
    }
}
