//! Theme context module for managing light/dark/system theme
//!
//! Provides:
//! - ThemeMode enum (Light, Dark, System)
//! - ThemeConfig describing how the mode is written to the document
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence
//! - An inline script applying the stored mode before hydration

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

/// Where the effective theme is written on `<html>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAttribute {
    /// `class="dark"` / `class="light"`
    Class,
    /// `data-<name>="dark"` / `"light"`
    Data(&'static str),
}

/// Mount-time theme configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub attribute: ThemeAttribute,
    pub default_mode: ThemeMode,
    /// Follow `prefers-color-scheme` in `System` mode
    pub enable_system: bool,
    pub storage_key: &'static str,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            attribute: ThemeAttribute::Class,
            default_mode: ThemeMode::Light,
            enable_system: true,
            storage_key: "theme",
        }
    }
}

impl ThemeConfig {
    /// Effective darkness for a mode
    pub fn resolve_dark(&self, mode: ThemeMode, system_prefers_dark: bool) -> bool {
        match mode {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => self.enable_system && system_prefers_dark,
        }
    }

    /// Parse a persisted value, ignoring `system` when system tracking is off
    pub fn parse_stored(&self, value: &str) -> ThemeMode {
        match ThemeMode::parse(value) {
            Some(ThemeMode::System) if !self.enable_system => self.default_mode,
            Some(mode) => mode,
            None => self.default_mode,
        }
    }
}

/// Inline script run in `<head>` so the first paint already has the right theme
pub fn theme_init_script(config: &ThemeConfig) -> String {
    let apply = match config.attribute {
        ThemeAttribute::Class => {
            "root.classList.remove('light', 'dark'); root.classList.add(theme);".to_string()
        }
        ThemeAttribute::Data(name) => format!("root.setAttribute('data-{}', theme);", name),
    };

    format!(
        r#"(function() {{
    var root = document.documentElement;
    var mode = '{default_mode}';
    try {{ mode = localStorage.getItem('{key}') || mode; }} catch (e) {{}}
    if (mode === 'system' && !{enable_system}) {{ mode = '{default_mode}'; }}
    var theme = mode;
    if (mode === 'system') {{
        theme = window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
    }}
    if (theme !== 'dark' && theme !== 'light') {{ theme = '{default_theme}'; }}
    {apply}
    root.style.colorScheme = theme;
}})();"#,
        default_mode = config.default_mode.as_str(),
        default_theme = if config.resolve_dark(config.default_mode, false) {
            "dark"
        } else {
            "light"
        },
        key = config.storage_key,
        enable_system = config.enable_system,
        apply = apply,
    )
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Whether the current effective theme is dark (considering system mode)
    pub is_dark: Memo<bool>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
    pub config: ThemeConfig,
}

impl ThemeContext {
    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.persist_theme(mode);
        self.apply_theme();
    }

    /// Flip between light and dark based on what is currently shown
    pub fn toggle(&self) {
        let next = if self.is_dark.get_untracked() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next);
    }

    /// Persist theme to localStorage
    fn persist_theme(&self, mode: ThemeMode) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(self.config.storage_key, mode.as_str());
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = mode;
        }
    }

    /// Write the effective theme onto the document element
    pub fn apply_theme(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let theme = if self.is_dark.get_untracked() {
                            "dark"
                        } else {
                            "light"
                        };
                        match self.config.attribute {
                            ThemeAttribute::Class => {
                                let class_list = html.class_list();
                                let _ = class_list.remove_2("light", "dark");
                                let _ = class_list.add_1(theme);
                            }
                            ThemeAttribute::Data(name) => {
                                let _ = html.set_attribute(&format!("data-{}", name), theme);
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Load theme from localStorage
fn load_persisted_theme(config: &ThemeConfig) -> ThemeMode {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(config.storage_key) {
                    return config.parse_stored(&value);
                }
            }
        }
    }
    config.default_mode
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context(config: ThemeConfig) -> ThemeContext {
    let initial_mode = load_persisted_theme(&config);
    let initial_system_dark = detect_system_prefers_dark();

    let mode = RwSignal::new(initial_mode);
    let system_prefers_dark = RwSignal::new(initial_system_dark);

    // Compute effective dark mode
    let is_dark = Memo::new(move |_| config.resolve_dark(mode.get(), system_prefers_dark.get()));

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
        config,
    };

    // Listen for system theme changes
    #[cfg(not(feature = "ssr"))]
    if config.enable_system {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let system_dark_signal = system_prefers_dark;
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            system_dark_signal.set(e.matches());
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // Keep the closure alive
                    handler.forget();
                }
            }
        });
    }

    // Apply theme initially and on changes
    #[cfg(not(feature = "ssr"))]
    {
        let ctx_clone = ctx;
        Effect::new(move |_| {
            // Subscribe to is_dark changes
            let _ = ctx_clone.is_dark.get();
            ctx_clone.apply_theme();
        });
    }

    // Provide context
    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ThemeConfig::default();
        assert_eq!(config.attribute, ThemeAttribute::Class);
        assert_eq!(config.default_mode, ThemeMode::Light);
        assert!(config.enable_system);
    }

    #[test]
    fn test_mode_roundtrip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn test_resolve_dark() {
        let config = ThemeConfig::default();
        assert!(config.resolve_dark(ThemeMode::Dark, false));
        assert!(!config.resolve_dark(ThemeMode::Light, true));
        assert!(config.resolve_dark(ThemeMode::System, true));
        assert!(!config.resolve_dark(ThemeMode::System, false));

        let no_system = ThemeConfig {
            enable_system: false,
            ..ThemeConfig::default()
        };
        assert!(!no_system.resolve_dark(ThemeMode::System, true));
    }

    #[test]
    fn test_parse_stored() {
        let config = ThemeConfig::default();
        assert_eq!(config.parse_stored("dark"), ThemeMode::Dark);
        assert_eq!(config.parse_stored("garbage"), ThemeMode::Light);
        assert_eq!(config.parse_stored("system"), ThemeMode::System);

        let no_system = ThemeConfig {
            enable_system: false,
            ..ThemeConfig::default()
        };
        assert_eq!(no_system.parse_stored("system"), ThemeMode::Light);
    }

    #[test]
    fn test_init_script_class_attribute() {
        let script = theme_init_script(&ThemeConfig::default());
        assert!(script.contains("localStorage.getItem('theme')"));
        assert!(script.contains("classList.add(theme)"));
        assert!(script.contains("var mode = 'light'"));
    }

    #[test]
    fn test_init_script_data_attribute() {
        let config = ThemeConfig {
            attribute: ThemeAttribute::Data("theme"),
            ..ThemeConfig::default()
        };
        let script = theme_init_script(&config);
        assert!(script.contains("setAttribute('data-theme', theme)"));
        assert!(!script.contains("classList"));
    }

    #[test]
    fn test_toggle_flips_effective_theme() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_theme_context(ThemeConfig::default());
            assert!(!ctx.is_dark.get_untracked());

            ctx.toggle();
            assert_eq!(ctx.mode.get_untracked(), ThemeMode::Dark);
            assert!(ctx.is_dark.get_untracked());

            ctx.toggle();
            assert_eq!(ctx.mode.get_untracked(), ThemeMode::Light);
        });
    }
}
