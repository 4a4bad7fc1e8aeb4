use serde::{Deserialize, Serialize};

use crate::app::domain::editor::DEFAULT_FONT_SIZE;
use crate::app::domain::window_size::WindowSize;

/// The persisted configuration record.
///
/// Every field carries a serde default so config files written by older
/// versions still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigState {
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default)]
    pub window_size: WindowSize,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            window_size: WindowSize::default(),
        }
    }
}
