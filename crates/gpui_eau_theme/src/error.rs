use thiserror::Error;

/// Reasons a theme document can be rejected.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{name}` is {value}, expected a value between {min} and {max}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("`{name}` is {value}, expected an even number")]
    NotEven { name: &'static str, value: f32 },

    #[error("button height {button_height} exceeds titlebar height {titlebar_height}")]
    ButtonTallerThanTitlebar {
        button_height: f32,
        titlebar_height: f32,
    },
}
