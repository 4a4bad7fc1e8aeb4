//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Keyboard event classification and dispatch
//! - Window-size class recomputation

pub mod keyboard;
pub mod window_size;
