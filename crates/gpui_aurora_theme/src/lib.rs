//! Theme model shared by the aurora components: palettes, modes and the
//! token mapper that turns a palette into CSS custom properties.

mod colors;
pub use colors::*;

mod config;
pub use config::*;

mod mode;
pub use mode::*;

mod tokens;
pub use tokens::*;

pub mod deserializers;
