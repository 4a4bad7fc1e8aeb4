//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (keys, commands, editor contract, config)
//! - `controllers/` - Orchestration (keyboard dispatch, window-size classes)
//! - `services/` - Business operations (config store, in-memory editor)
//! - `infrastructure/` - External integrations (platform, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::commands::{Command, FontSizeAction};
pub use domain::editor::{EditorController, EditorOptions, ScriptOutcome};
pub use domain::keys::{Key, KeyEvent};
pub use domain::window_size::{SizeBucket, SizeClass, WindowSize};
pub use infrastructure::platform::PrimaryModifier;
pub use services::config_store::ConfigStore;
pub use state::AppState;
