//! Terminal front end.
//!
//! [`app::App`] owns the fetch cache and the view state; everything drawn is
//! derived from them on each frame by [`render::draw`].

pub mod app;
pub mod browse;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod table;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
