//! Centralized theme and color scheme for the dashboard.
//!
//! This module provides consistent styling across both dashboard pages.

use crate::readiness::{Category, SkillBand};
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the dashboard.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Skill band colors
    pub weak: Color,
    pub fair: Color,
    pub strong: Color,

    // Category colors
    pub beginner: Color,
    pub developing: Color,
    pub almost_ready: Color,
    pub placement_ready: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,

    // Radar chart
    pub chart_grid: Color,
    pub chart_area: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            weak: Color::Red,
            fair: Color::Yellow,
            strong: Color::Green,

            beginner: Color::Red,
            developing: Color::Yellow,
            almost_ready: Color::Cyan,
            placement_ready: Color::Green,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,
            highlight: Color::Yellow,

            success: Color::Green,
            warning: Color::Yellow,

            chart_grid: Color::DarkGray,
            chart_area: Color::Cyan,
        }
    }

    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            weak: Color::Rgb(200, 0, 0),
            fair: Color::Rgb(180, 140, 0),
            strong: Color::Rgb(0, 128, 0),

            beginner: Color::Rgb(200, 0, 0),
            developing: Color::Rgb(180, 140, 0),
            almost_ready: Color::Rgb(0, 128, 128),
            placement_ready: Color::Rgb(0, 128, 0),

            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 100, 0),
            muted: Color::Rgb(120, 120, 120),
            border: Color::Rgb(150, 150, 150),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(0, 0, 0),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
            highlight: Color::Rgb(180, 100, 0),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),

            chart_grid: Color::Rgb(190, 190, 190),
            chart_area: Color::Rgb(0, 100, 150),
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            weak: Color::LightRed,
            fair: Color::LightYellow,
            strong: Color::LightGreen,

            beginner: Color::LightRed,
            developing: Color::LightYellow,
            almost_ready: Color::LightCyan,
            placement_ready: Color::LightGreen,

            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::White,
            highlight: Color::LightYellow,

            success: Color::LightGreen,
            warning: Color::LightYellow,

            chart_grid: Color::Gray,
            chart_area: Color::LightCyan,
        }
    }

    /// Get color for a skill band
    pub const fn band_color(&self, band: SkillBand) -> Color {
        match band {
            SkillBand::Weak => self.weak,
            SkillBand::Fair => self.fair,
            SkillBand::Strong => self.strong,
        }
    }

    /// Get color for a normalized (0-100) skill value
    pub fn value_color(&self, value: f64) -> Color {
        self.band_color(SkillBand::from_value(value))
    }

    /// Get color for a readiness category
    pub const fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Beginner => self.beginner,
            Category::Developing => self.developing,
            Category::AlmostReady => self.almost_ready,
            Category::PlacementReady => self.placement_ready,
        }
    }
}

// ============================================================================
// Global Theme State
// ============================================================================

static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Names accepted by [`Theme::from_name`], in rotation order.
    pub const NAMES: [&'static str; 3] = ["dark", "light", "high-contrast"];

    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    pub const fn dark() -> Self {
        Self::dark_const()
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Highlighted/accent style
    pub fn highlight() -> Style {
        Style::default().fg(colors().highlight).bold()
    }

    /// Selection style (for the focused form field)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }
}

/// Render a category badge
pub fn category_badge(category: Category) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", category.label().to_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(scheme.category_color(category))
            .bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Page-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Get hints for a dashboard page
    pub fn for_page(page: &str) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();

        match page.to_lowercase().as_str() {
            "home" => {
                hints.insert(0, ("Enter/c", "open calculator"));
            }
            "calculator" => {
                hints.insert(0, ("↑↓", "field"));
                hints.insert(1, ("←→", "adjust"));
                hints.insert(2, ("0-9", "type"));
                hints.insert(3, ("Enter", "calculate"));
                hints.insert(4, ("h/Esc", "home"));
            }
            _ => {}
        }

        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![("T", "theme"), ("?", "help"), ("q", "quit")]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation() {
        assert_eq!(Theme::dark().next().name, "light");
        assert_eq!(Theme::light().next().name, "high-contrast");
        assert_eq!(Theme::high_contrast().next().name, "dark");
    }

    #[test]
    fn test_from_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("solarized").name, "dark");
        for name in Theme::NAMES {
            assert_eq!(Theme::from_name(name).name, name);
        }
    }

    #[test]
    fn test_band_colors() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.value_color(20.0), Color::Red);
        assert_eq!(scheme.value_color(60.0), Color::Yellow);
        assert_eq!(scheme.value_color(70.0), Color::Green);
        assert_eq!(
            scheme.category_color(Category::PlacementReady),
            scheme.placement_ready
        );
    }

    #[test]
    fn test_footer_hints_per_page() {
        let home = FooterHints::for_page("home");
        assert_eq!(home[0].0, "Enter/c");
        let calc = FooterHints::for_page("Calculator");
        assert!(calc.iter().any(|(k, _)| *k == "←→"));
        assert_eq!(calc.last().map(|(k, _)| *k), Some("q"));
    }

    #[test]
    fn test_render_footer_hints() {
        let spans = render_footer_hints(&[("q", "quit"), ("?", "help")]);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].content, "[q]");
    }
}
