use dioxus::prelude::*;

/// Display modes offered to facilitators.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Maximum-contrast palette for low-vision users.
    HighContrast,
}

impl ThemeMode {
    /// Value written to the `data-theme` attribute and the theme cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::HighContrast => "high-contrast",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::HighContrast => "High contrast",
        }
    }

    /// Parse a stored key, falling back to Light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "high-contrast" => ThemeMode::HighContrast,
            _ => ThemeMode::Light,
        }
    }

    /// The mode after this one, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::HighContrast,
            ThemeMode::HighContrast => ThemeMode::Light,
        }
    }
}

/// Shared theme state provided as context.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn cycle(&mut self) {
        let next = self.mode.read().next();
        self.mode.set(next);
        set_theme(next);
    }
}

/// Seed the theme on application startup from the persisted cookie.
/// Call this once in the top-level App component, below the [`ThemeState`] provider.
#[component]
pub fn ThemeSeed() -> Element {
    let mut theme: ThemeState = use_context();
    use_effect(move || {
        spawn(async move {
            let saved = document::eval(
                r#"
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                return match ? match[1] : 'light';
                "#,
            )
            .join::<String>()
            .await;
            let mode = saved.map(|key| ThemeMode::from_key(&key)).unwrap_or_default();
            theme.mode.set(mode);
            set_theme(mode);
        });
    });

    rsx! {}
}

/// Set the active theme, persisting it to a cookie and updating the document.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_MODES: &[ThemeMode] = &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::HighContrast];

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn as_str_roundtrip() {
        for mode in ALL_MODES {
            assert_eq!(ThemeMode::from_key(mode.as_str()), *mode);
        }
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(ThemeMode::from_key("cyberpunk"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Light);
    }

    #[test]
    fn next_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        for _ in 0..ALL_MODES.len() {
            mode = mode.next();
        }
        assert_eq!(mode, ThemeMode::Light);
    }
}
