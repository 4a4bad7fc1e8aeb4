//! Input and reaction layer for the ScriptPad editor shell.
//!
//! Two components drive the shell: the keyboard controller turns
//! modifier-held key events into editor commands, and the window-size
//! controller keeps the root surface's bucket classes in sync with the
//! persisted `window_size` configuration value. Everything else (script
//! execution, menu contents, the real UI) sits behind the collaborator
//! traits in [`app::domain`] and [`ui`].

pub mod app;
pub mod ui;

pub use app::controllers::keyboard::{DispatchTargets, EventDisposition, KeyboardController};
pub use app::controllers::window_size::{
    WindowSizeController, recompute_window_size_classes, size_classes,
};
pub use app::domain::commands::{Command, FontSizeAction};
pub use app::domain::config::ConfigState;
pub use app::domain::editor::{
    DEFAULT_FONT_SIZE, EditorController, EditorOption, EditorOptions, EditorOptionsUpdate,
    FONT_SIZE_MAX, FONT_SIZE_MIN, ScriptOutcome,
};
pub use app::domain::keys::{Key, KeyEvent};
pub use app::domain::window_size::{SizeBucket, SizeClass, SizeClassSet, WindowSize};
pub use app::infrastructure::error::{AppError, Result};
pub use app::infrastructure::platform::PrimaryModifier;
pub use app::services::config_store::{ChangeEvent, ConfigKey, ConfigStore, Subscription};
pub use app::services::editor::ScriptEditor;
pub use app::state::AppState;
pub use ui::menu::{Menu, MenuState};
pub use ui::surface::{HeadlessSurface, VisualSurface};
