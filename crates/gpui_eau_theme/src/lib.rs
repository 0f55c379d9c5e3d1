//! Theme configuration for Eau window decorations.
//!
//! A theme is a fixed set of named metrics, colors and gradient offsets loaded
//! from JSON. It carries no process-wide state: hosts build one (or use
//! [`Theme::DEFAULT`]) and hand it to the decorations that need it.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod capabilities;
pub use capabilities::*;
