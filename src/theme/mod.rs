//! Theme sessions: the state a user's theme choice lives in, the reducer
//! that moves it, and the glue that shares it across a GPUI app.
//!
//! Palettes, modes and the token mapper live in [`gpui_aurora_theme`] and are
//! re-exported here.

pub use gpui_aurora_theme::*;

mod action;
pub use action::*;

mod appearance;
pub use appearance::*;

pub(crate) mod builtin;
pub use builtin::default_theme;

mod error;
pub use error::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod persistence;
pub use persistence::*;

mod reducer;
pub use reducer::*;

mod registry;
pub use registry::*;

mod state;
pub use state::*;

mod store;
pub use store::*;
