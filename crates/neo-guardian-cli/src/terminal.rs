//! Terminal capability detection and styling.
//!
//! Color and glyph choices are resolved once per run from the environment
//! (`NO_COLOR`, `TERM`, `LANG`, `LC_ALL`) so renderers only deal with
//! plain string fragments.

/// ANSI escape codes used by the console.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    /// Bold reverse red badge for HAZARDOUS verdicts.
    pub const BADGE_HAZARD: &str = "\x1b[1;7;31m";
    /// Bold reverse green badge for SAFE verdicts.
    pub const BADGE_SAFE: &str = "\x1b[1;7;32m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
    /// 256-color orange for warnings and the threat bar.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Resolved color codes, or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub badge_hazard: &'static str,
    pub badge_safe: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub cyan: &'static str,
    pub gray: &'static str,
    pub orange: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            bold: colors::BOLD,
            badge_hazard: colors::BADGE_HAZARD,
            badge_safe: colors::BADGE_SAFE,
            red: colors::RED,
            green: colors::GREEN,
            cyan: colors::CYAN,
            gray: colors::GRAY,
            orange: colors::ORANGE,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            badge_hazard: "",
            badge_safe: "",
            red: "",
            green: "",
            cyan: "",
            gray: "",
            orange: "",
        }
    }

    /// Pick [`ColorPalette::colored`] or [`ColorPalette::plain`] from the environment.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Badge color for a verdict.
    #[must_use]
    pub fn verdict_badge(&self, hazardous: bool) -> &'static str {
        if hazardous {
            self.badge_hazard
        } else {
            self.badge_safe
        }
    }

    /// Text color for a verdict.
    #[must_use]
    pub fn verdict_text(&self, hazardous: bool) -> &'static str {
        if hazardous {
            self.red
        } else {
            self.green
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Characters used for bar charts and the orbit plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub bar: char,
    pub orbit: char,
    pub sun: char,
    pub rule: char,
}

impl Glyphs {
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            bar: '█',
            orbit: '•',
            sun: '☉',
            rule: '─',
        }
    }

    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            bar: '#',
            orbit: '*',
            sun: 'O',
            rule: '-',
        }
    }

    #[must_use]
    pub fn detect() -> Self {
        if supports_unicode() {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Whether ANSI color codes should be emitted.
///
/// Honors `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Whether Unicode glyphs should be emitted.
///
/// Unix terminals need a UTF locale hint in `LANG` or `LC_ALL`; Windows
/// terminals are assumed capable unless `TERM=dumb`.
#[must_use]
pub fn supports_unicode() -> bool {
    let utf_hint = ["LANG", "LC_ALL"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    });
    if utf_hint {
        return true;
    }
    #[cfg(windows)]
    {
        return !std::env::var("TERM")
            .map(|term| term.eq_ignore_ascii_case("dumb"))
            .unwrap_or(false);
    }
    #[cfg(not(windows))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();

        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        result
    }

    #[test]
    fn plain_palette_is_empty() {
        let p = ColorPalette::plain();
        assert!(p.reset.is_empty());
        assert!(p.verdict_badge(true).is_empty());
        assert!(p.verdict_text(false).is_empty());
    }

    #[test]
    fn colored_palette_distinguishes_verdicts() {
        let p = ColorPalette::colored();
        assert_ne!(p.verdict_badge(true), p.verdict_badge(false));
        assert_eq!(p.verdict_text(true), colors::RED);
        assert_eq!(p.verdict_text(false), colors::GREEN);
    }

    #[test]
    fn no_color_disables_colors() {
        with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
            assert!(!supports_color());
        });
    }

    #[test]
    fn dumb_terminal_disables_colors() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!supports_color());
        });
    }

    #[test]
    fn regular_terminal_supports_colors() {
        with_env_vars(
            &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
            || {
                assert!(supports_color());
            },
        );
    }

    #[test]
    fn utf_locale_enables_unicode_glyphs() {
        with_env_vars(&[("LANG", Some("en_US.UTF-8")), ("LC_ALL", None)], || {
            assert!(supports_unicode());
            assert_eq!(Glyphs::detect(), Glyphs::unicode());
        });
    }

    #[test]
    #[cfg(not(windows))]
    fn plain_locale_falls_back_to_ascii() {
        with_env_vars(&[("LANG", Some("C")), ("LC_ALL", None)], || {
            assert!(!supports_unicode());
            assert_eq!(Glyphs::detect(), Glyphs::ascii());
        });
    }
}
