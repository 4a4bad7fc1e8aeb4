//! Presentation seams - the traits the controllers drive the UI through,
//! plus headless implementations for the shell binary and tests.

pub mod menu;
pub mod surface;

pub use menu::{Menu, MenuState};
pub use surface::{HeadlessSurface, VisualSurface};
