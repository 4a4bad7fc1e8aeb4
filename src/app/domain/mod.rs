//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Key events and chord parsing
//! - Editor commands produced by keyboard classification
//! - The editor controller contract and its option types
//! - Window-size buckets and their derived surface classes
//! - The persisted configuration record

pub mod commands;
pub mod config;
pub mod editor;
pub mod keys;
pub mod window_size;

pub use commands::{Command, FontSizeAction};
pub use config::ConfigState;
pub use editor::{EditorController, EditorOptions, EditorOptionsUpdate, ScriptOutcome};
pub use keys::{Key, KeyEvent};
pub use window_size::{SizeBucket, SizeClass, SizeClassSet, WindowSize};
