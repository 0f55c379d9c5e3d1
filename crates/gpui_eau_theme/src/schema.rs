use std::{ops::Deref, sync::LazyLock};

use gpui::{Pixels, Rgba, SharedString, px};
use gpui_bezel::{BrightnessRange, InnerBezelColors};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{
    ThemeError,
    deserializers::{de_pixels, de_string_or_non_empty_list},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub metrics: ThemeMetrics,
    pub text: ThemeText,
    #[serde(default)]
    pub style: ThemeStyle,
    pub colors: ThemeColors,
    pub gradients: ThemeGradients,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_json(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!(["../themes/eau.json", DEFAULT]);

    /// Parses and validates a theme document.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(json.as_ref())?;

        if let Err(err) = theme.metrics.validate() {
            log::warn!("rejecting theme `{}`: {err}", theme.name);
            return Err(err);
        }

        log::debug!("loaded theme `{}`", theme.name);
        Ok(theme)
    }
}

/// Fixed dimensions of the decorations, in logical pixels.
///
/// | constant | default | range |
/// |---|---|---|
/// | `titlebar_height` | 24 | 16–48 |
/// | `button_width` | 24 | 12–48 |
/// | `button_height` | 18 | 10–48, at most `titlebar_height` |
/// | `edge_inset` | 4 | 0–16 |
/// | `button_gap` | 2 | 0–16 |
/// | `corner_radius` | 3 | 0–12 |
/// | `icon_scale` | 0.4 | 0.2–0.8 |
/// | `icon_stroke_width` | 1.5 | 0.5–4 |
/// | `title_font_size` | 13 | 8–24 |
/// | `grip_size` | 14 | 8–32 |
/// | `menu_item_padding` | 10 | 4–16, even |
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeMetrics {
    #[serde(deserialize_with = "de_pixels")]
    pub titlebar_height: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub button_width: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub button_height: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub edge_inset: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub button_gap: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub corner_radius: Pixels,
    /// Icon size as a fraction of the button's smaller side.
    pub icon_scale: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub icon_stroke_width: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub title_font_size: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub grip_size: Pixels,
    /// Total horizontal padding of a menu item, split equally between both sides.
    #[serde(deserialize_with = "de_pixels")]
    pub menu_item_padding: Pixels,
}

impl Default for ThemeMetrics {
    fn default() -> Self {
        Self {
            titlebar_height: px(24.),
            button_width: px(24.),
            button_height: px(18.),
            edge_inset: px(4.),
            button_gap: px(2.),
            corner_radius: px(3.),
            icon_scale: 0.4,
            icon_stroke_width: px(1.5),
            title_font_size: px(13.),
            grip_size: px(14.),
            menu_item_padding: px(10.),
        }
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ThemeError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ThemeError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

fn to_f32(pixels: Pixels) -> f32 {
    pixels.to_f64() as f32
}

impl ThemeMetrics {
    pub fn validate(&self) -> Result<(), ThemeError> {
        check_range("titlebar_height", to_f32(self.titlebar_height), 16., 48.)?;
        check_range("button_width", to_f32(self.button_width), 12., 48.)?;
        check_range("button_height", to_f32(self.button_height), 10., 48.)?;
        check_range("edge_inset", to_f32(self.edge_inset), 0., 16.)?;
        check_range("button_gap", to_f32(self.button_gap), 0., 16.)?;
        check_range("corner_radius", to_f32(self.corner_radius), 0., 12.)?;
        check_range("icon_scale", self.icon_scale, 0.2, 0.8)?;
        check_range("icon_stroke_width", to_f32(self.icon_stroke_width), 0.5, 4.)?;
        check_range("title_font_size", to_f32(self.title_font_size), 8., 24.)?;
        check_range("grip_size", to_f32(self.grip_size), 8., 32.)?;

        let padding = to_f32(self.menu_item_padding);
        check_range("menu_item_padding", padding, 4., 16.)?;
        if padding % 2. != 0. {
            return Err(ThemeError::NotEven {
                name: "menu_item_padding",
                value: padding,
            });
        }

        if self.button_height > self.titlebar_height {
            return Err(ThemeError::ButtonTallerThanTitlebar {
                button_height: to_f32(self.button_height),
                titlebar_height: to_f32(self.titlebar_height),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub title_font: SmallVec<[SharedString; 1]>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeStyle {
    #[serde(default)]
    pub button_shape: ButtonShape,
    #[serde(default)]
    pub title_alignment: TitleAlignment,
}

/// How title bar buttons are outlined.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ButtonShape {
    /// Rounded rectangles sitting at the title bar edges.
    #[default]
    Edge,
    /// Circular buttons.
    Ball,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TitleAlignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub titlebar: Rgba,
    pub title_text: Rgba,
    pub control_stroke: Rgba,
    pub grip: Rgba,
    pub buttons: ThemeButtonColors,
    pub icons: ThemeIconColors,
    pub bezel: ThemeBezelColors,
}

/// Semantic base colors for the title bar buttons.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeButtonColors {
    pub close: Rgba,
    pub minimize: Rgba,
    pub maximize: Rgba,
    /// Used for every button when disabled or when the window is inactive.
    pub neutral: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeIconColors {
    pub active: Rgba,
    pub inactive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBezelColors {
    pub highlight: Rgba,
    pub shadow: Rgba,
}

impl From<&ThemeBezelColors> for InnerBezelColors {
    fn from(colors: &ThemeBezelColors) -> Self {
        InnerBezelColors {
            highlight: colors.highlight.into(),
            shadow: colors.shadow.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ThemeBrightness {
    pub top: f32,
    pub bottom: f32,
}

impl From<ThemeBrightness> for BrightnessRange {
    fn from(brightness: ThemeBrightness) -> Self {
        BrightnessRange::new(brightness.top, brightness.bottom)
    }
}

/// Tint applied to colors of inactive windows.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ThemeInactiveTint {
    /// Factor the saturation is multiplied by.
    pub saturation: f32,
    /// Offset added to the lightness.
    pub lightness: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeGradients {
    pub button: ThemeBrightness,
    pub titlebar: ThemeBrightness,
    pub hover_shift: f32,
    pub pressed_shift: f32,
    pub inactive: ThemeInactiveTint,
}
