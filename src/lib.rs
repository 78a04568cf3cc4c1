// Wren - interactive shell front-end
// Library exports

pub mod complete;
pub mod editor;
pub mod env;
pub mod history;
pub mod prompt;
pub mod session;
pub mod style;
