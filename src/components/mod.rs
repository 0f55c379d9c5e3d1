mod root;
pub use root::*;

mod titlebar;
pub use titlebar::*;
