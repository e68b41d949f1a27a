//! Theme system for Vision
//! Afeka blue/green/purple palette in light and dark variants, each with a
//! high-contrast override.

use iced::color;
use iced::theme::Palette;
use iced::widget::{button, checkbox, container, scrollable, text_editor, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Palette
// ============================================================================

mod afeka {
    use super::*;
    pub const BLUE: Color = color!(0x1976d2);
    pub const BLUE_LIGHT: Color = color!(0x63a4ff);
    pub const GREEN: Color = color!(0x4caf50);
    pub const GREEN_LIGHT: Color = color!(0x80e27e);
    pub const PURPLE: Color = color!(0x6a0dad);
    pub const PURPLE_LIGHT: Color = color!(0x9c4dff);
}

mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf3f5f9);
    pub const BORDER: Color = color!(0xd7dbe3);
    pub const TEXT_PRIMARY: Color = color!(0x1c1b1f);
    pub const TEXT_SECONDARY: Color = color!(0x4a4a55);
    pub const TEXT_MUTED: Color = color!(0x77777f);
    pub const ERROR: Color = color!(0xb00020);
}

mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1e1e22);
    pub const BORDER: Color = color!(0x33333a);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0xc4c4cc);
    pub const TEXT_MUTED: Color = color!(0x8c8c96);
    pub const ERROR: Color = color!(0xcf6679);
}

mod contrast {
    use super::*;
    pub const DARK_PRIMARY: Color = color!(0xffc107);
    pub const DARK_SECONDARY: Color = color!(0x64ffda);
    pub const LIGHT_PRIMARY: Color = color!(0x0000ee);
}

/// Emergency button red, the same in every variant
pub const SOS_RED: Color = color!(0xe53935);

/// Seat colours
pub const SEAT_ACCESSIBLE: Color = afeka::GREEN;
pub const SEAT_RESERVED: Color = color!(0x9e9e9e);

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

pub fn bold() -> iced::Font {
    iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    }
}

/// Build the application theme
pub fn app_theme(dark_mode: bool, high_contrast: bool) -> Theme {
    let (name, palette) = match (dark_mode, high_contrast) {
        (false, false) => (
            "Vision Light",
            Palette {
                background: light::BACKGROUND,
                text: light::TEXT_PRIMARY,
                primary: afeka::BLUE,
                success: afeka::GREEN,
                danger: light::ERROR,
                ..Palette::LIGHT
            },
        ),
        (true, false) => (
            "Vision Dark",
            Palette {
                background: dark::BACKGROUND,
                text: dark::TEXT_PRIMARY,
                primary: afeka::BLUE_LIGHT,
                success: afeka::GREEN_LIGHT,
                danger: dark::ERROR,
                ..Palette::DARK
            },
        ),
        (false, true) => (
            "Vision Light High Contrast",
            Palette {
                background: Color::WHITE,
                text: Color::BLACK,
                primary: contrast::LIGHT_PRIMARY,
                success: afeka::GREEN,
                danger: light::ERROR,
                ..Palette::LIGHT
            },
        ),
        (true, true) => (
            "Vision Dark High Contrast",
            Palette {
                background: Color::BLACK,
                text: Color::WHITE,
                primary: contrast::DARK_PRIMARY,
                success: contrast::DARK_SECONDARY,
                danger: dark::ERROR,
                ..Palette::DARK
            },
        ),
    };
    Theme::custom(name.to_string(), palette)
}

pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

pub fn is_high_contrast(theme: &Theme) -> bool {
    let primary = theme.palette().primary;
    primary == contrast::DARK_PRIMARY || primary == contrast::LIGHT_PRIMARY
}

/// Font sizes, scaled up when large text is on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextScale(f32);

impl TextScale {
    pub const NORMAL: TextScale = TextScale(1.0);
    pub const LARGE: TextScale = TextScale(1.25);

    pub fn from_large_text(large: bool) -> Self {
        if large { Self::LARGE } else { Self::NORMAL }
    }

    /// Scale a base size
    pub fn size(self, base: f32) -> f32 {
        base * self.0
    }
}

impl Default for TextScale {
    fn default() -> Self {
        Self::NORMAL
    }
}

// ============================================================================
// Colors
// ============================================================================

pub fn background(theme: &Theme) -> Color {
    theme.palette().background
}

pub fn surface(theme: &Theme) -> Color {
    match (is_dark(theme), is_high_contrast(theme)) {
        (_, true) => background(theme),
        (true, false) => dark::SURFACE,
        (false, false) => light::SURFACE,
    }
}

pub fn border_color(theme: &Theme) -> Color {
    match (is_dark(theme), is_high_contrast(theme)) {
        (_, true) => text_primary(theme),
        (true, false) => dark::BORDER,
        (false, false) => light::BORDER,
    }
}

pub fn border_width(theme: &Theme) -> f32 {
    if is_high_contrast(theme) { 2.0 } else { 1.0 }
}

pub fn text_primary(theme: &Theme) -> Color {
    theme.palette().text
}

pub fn text_secondary(theme: &Theme) -> Color {
    match (is_dark(theme), is_high_contrast(theme)) {
        (_, true) => text_primary(theme),
        (true, false) => dark::TEXT_SECONDARY,
        (false, false) => light::TEXT_SECONDARY,
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    match (is_dark(theme), is_high_contrast(theme)) {
        (_, true) => text_primary(theme),
        (true, false) => dark::TEXT_MUTED,
        (false, false) => light::TEXT_MUTED,
    }
}

pub fn primary(theme: &Theme) -> Color {
    theme.palette().primary
}

/// Text drawn on top of `primary`
pub fn on_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

pub fn secondary(theme: &Theme) -> Color {
    theme.palette().success
}

/// Purple brand accent (logo, headings)
pub fn accent(theme: &Theme) -> Color {
    match (is_dark(theme), is_high_contrast(theme)) {
        (_, true) => primary(theme),
        (true, false) => afeka::PURPLE_LIGHT,
        (false, false) => afeka::PURPLE,
    }
}

pub fn danger(theme: &Theme) -> Color {
    theme.palette().danger
}

pub fn success(theme: &Theme) -> Color {
    secondary(theme)
}

pub fn info(theme: &Theme) -> Color {
    primary(theme)
}

/// Translucent wash of `primary` for selected cards
pub fn primary_container(theme: &Theme) -> Color {
    if is_high_contrast(theme) {
        return background(theme);
    }
    Color {
        a: 0.15,
        ..primary(theme)
    }
}

pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

pub fn overlay_backdrop(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.6)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.4)
    }
}

pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Blend `from` towards `to` by `t`
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-window page background
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Top bar with the screen title
pub fn top_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(primary(theme))),
        text_color: Some(on_primary(theme)),
        ..Default::default()
    }
}

/// Bottom action bar
pub fn bottom_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            width: border_width(theme),
            color: divider(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Content card
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 12.0.into(),
            width: border_width(theme),
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Card tinted with the primary color (info and thank-you cards)
pub fn highlight_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(primary_container(theme))),
        border: Border {
            radius: 12.0.into(),
            width: border_width(theme),
            color: primary(theme),
        },
        ..Default::default()
    }
}

/// Modal dialog surface
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: border_width(theme),
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Semi-transparent layer behind a dialog
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(overlay_backdrop(theme))),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Filled primary button
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(primary(theme))),
        text_color: on_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: if is_high_contrast(theme) { 2.0 } else { 0.0 },
            color: text_primary(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(mix(primary(theme), text_primary(theme), 0.15))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: 0.4,
                ..primary(theme)
            })),
            text_color: Color {
                a: 0.7,
                ..on_primary(theme)
            },
            ..base
        },
        button::Status::Active => base,
    }
}

/// Outlined button
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: border_width(theme),
            color: primary(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(primary_container(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_muted(theme),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        button::Status::Active => base,
    }
}

/// Text-only button (links, dialog dismiss)
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: primary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            ..base
        },
        _ => base,
    }
}

/// Button on the primary-colored top bar
pub fn bar_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: on_primary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: 0.15,
                ..on_primary(theme)
            })),
            ..base
        },
        _ => base,
    }
}

/// Red emergency button
pub fn sos_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(SOS_RED)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            width: if is_high_contrast(theme) { 2.0 } else { 0.0 },
            color: text_primary(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(mix(SOS_RED, Color::BLACK, 0.15))),
            ..base
        },
        _ => base,
    }
}

/// Selectable card; `hover` is the animated hover amount
pub fn choice_card(
    theme: &Theme,
    status: button::Status,
    selected: bool,
    hover: f32,
) -> button::Style {
    let rest = if selected {
        primary_container(theme)
    } else {
        surface(theme)
    };
    let hover = match status {
        button::Status::Pressed => 1.0,
        _ => hover,
    };
    button::Style {
        background: Some(Background::Color(mix(rest, hover_bg_solid(theme), hover * 0.5))),
        text_color: text_primary(theme),
        border: Border {
            radius: 12.0.into(),
            width: if selected { 2.0 } else { border_width(theme) },
            color: if selected {
                primary(theme)
            } else {
                border_color(theme)
            },
        },
        ..Default::default()
    }
}

fn hover_bg_solid(theme: &Theme) -> Color {
    mix(surface(theme), text_primary(theme), 0.12)
}

/// A seat in the lecture hall grid
pub fn seat_button(
    theme: &Theme,
    status: button::Status,
    fill: Color,
    selected: bool,
) -> button::Style {
    let fill = match status {
        button::Status::Hovered => mix(fill, text_primary(theme), 0.15),
        button::Status::Disabled => Color { a: 0.6, ..fill },
        _ => fill,
    };
    button::Style {
        background: Some(Background::Color(if selected { primary(theme) } else { fill })),
        text_color: if selected {
            on_primary(theme)
        } else {
            text_primary(theme)
        },
        border: Border {
            radius: 6.0.into(),
            width: if selected { 3.0 } else { border_width(theme) },
            color: if selected {
                text_primary(theme)
            } else {
                border_color(theme)
            },
        },
        ..Default::default()
    }
}

// ============================================================================
// Input Styles
// ============================================================================

pub fn input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: Background::Color(background(theme)),
        border: Border {
            radius: 8.0.into(),
            width: if focused { 2.0 } else { border_width(theme) },
            color: if focused {
                primary(theme)
            } else {
                border_color(theme)
            },
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color {
            a: 0.3,
            ..primary(theme)
        },
    }
}

pub fn editor(theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let focused = matches!(status, text_editor::Status::Focused { .. });
    let base = text_editor::default(theme, status);
    text_editor::Style {
        background: Background::Color(background(theme)),
        border: Border {
            radius: 8.0.into(),
            width: if focused { 2.0 } else { border_width(theme) },
            color: if focused {
                primary(theme)
            } else {
                border_color(theme)
            },
        },
        placeholder: text_muted(theme),
        value: text_primary(theme),
        ..base
    }
}

pub fn check(theme: &Theme, status: checkbox::Status) -> checkbox::Style {
    let is_checked = matches!(
        status,
        checkbox::Status::Active { is_checked: true }
            | checkbox::Status::Hovered { is_checked: true }
    );
    checkbox::Style {
        background: Background::Color(if is_checked {
            primary(theme)
        } else {
            background(theme)
        }),
        icon_color: on_primary(theme),
        border: Border {
            radius: 4.0.into(),
            width: border_width(theme),
            color: if is_checked {
                primary(theme)
            } else {
                border_color(theme)
            },
        },
        text_color: Some(text_primary(theme)),
    }
}

pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_variants() {
        let light = app_theme(false, false);
        assert!(!is_dark(&light));
        assert!(!is_high_contrast(&light));

        let dark_hc = app_theme(true, true);
        assert!(is_dark(&dark_hc));
        assert!(is_high_contrast(&dark_hc));
        assert_eq!(background(&dark_hc), Color::BLACK);
        assert_eq!(border_width(&dark_hc), 2.0);
    }

    #[test]
    fn test_text_scale() {
        assert_eq!(TextScale::from_large_text(false).size(16.0), 16.0);
        assert_eq!(TextScale::from_large_text(true).size(16.0), 20.0);
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(Color::BLACK, Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(mix(Color::BLACK, Color::WHITE, 2.0), Color::WHITE);
    }
}
