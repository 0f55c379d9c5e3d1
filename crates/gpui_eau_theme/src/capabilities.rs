use std::env;

/// Environment variable that forces flat (gradient-free) decorations.
pub const FLAT_DECORATIONS_ENV: &str = "EAU_FLAT_DECORATIONS";

/// Host capabilities that choose between drawing paths.
///
/// Resolved once when the decorations are set up, never from inside a paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether gradient fills are used. When false, base colors are painted flat.
    pub gradients: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { gradients: true }
    }
}

impl Capabilities {
    /// Reads the capabilities from the process environment.
    pub fn detect() -> Self {
        Self::from_flat_setting(env::var(FLAT_DECORATIONS_ENV).ok().as_deref())
    }

    fn from_flat_setting(value: Option<&str>) -> Self {
        let flat = match value.map(str::trim) {
            None | Some("") => false,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => {
                log::warn!("ignoring unrecognized {FLAT_DECORATIONS_ENV} value `{other}`");
                false
            }
        };

        Self { gradients: !flat }
    }
}
