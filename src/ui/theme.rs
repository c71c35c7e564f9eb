//! Theme context module for managing dark/light/automatic theme
//!
//! Provides:
//! - ThemeMode enum (Auto, Dark, Light)
//! - ThemeContext for reactive theme state, including a dark/light toggle
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::web_sys;

const STORAGE_KEY: &str = "ecosplash-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Unknown values fall back to `Auto`
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }

    /// Whether this mode renders dark, given the system preference
    pub fn resolves_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => system_prefers_dark,
        }
    }

    /// Explicit mode opposite to what is currently shown
    pub fn toggled(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Whether the current effective theme is dark (considering auto mode)
    pub is_dark: Memo<bool>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        persist_theme(mode);
        self.apply_theme_class();
    }

    /// Flip between dark and light
    pub fn toggle(&self) {
        self.set_mode(ThemeMode::toggled(self.is_dark.get_untracked()));
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(html) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                let class_list = html.class_list();
                if self.is_dark.get_untracked() {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
}

fn persist_theme(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mode, STORAGE_KEY);
    }
}

#[cfg(feature = "hydrate")]
fn load_persisted_theme() -> Option<ThemeMode> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Some(ThemeMode::parse(&value))
}

#[cfg(feature = "hydrate")]
fn detect_system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|media_query| media_query.matches())
}

/// State both the server render and the hydrating client start from. The
/// browser's stored mode and media query are only read after hydration, so
/// attributes rendered on the server are never left stale.
pub fn initial_theme_state() -> (ThemeMode, bool) {
    (ThemeMode::Auto, false)
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let (initial_mode, initial_system_dark) = initial_theme_state();
    let mode = RwSignal::new(initial_mode);
    let system_prefers_dark = RwSignal::new(initial_system_dark);

    let is_dark = Memo::new(move |_| mode.get().resolves_dark(system_prefers_dark.get()));

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
    };

    // Effects only run on the client, after hydration
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(stored) = load_persisted_theme() {
                mode.set(stored);
            }
            system_prefers_dark.set(detect_system_prefers_dark());

            if let Some(Ok(Some(media_query))) =
                web_sys::window().map(|w| w.match_media("(prefers-color-scheme: dark)"))
            {
                let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                    move |e: web_sys::MediaQueryListEvent| {
                        system_prefers_dark.set(e.matches());
                    },
                );

                let _ = media_query
                    .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

                // Keep the closure alive
                handler.forget();
            }
        });

        Effect::new(move |_| {
            let _ = ctx.is_dark.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
