/// Smallest font size the shell will propose.
pub const FONT_SIZE_MIN: u32 = 8;
/// Largest font size the shell will propose.
pub const FONT_SIZE_MAX: u32 = 30;
/// Font size used when nothing is persisted and for the reset shortcut.
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Editor-tunable settings. The keyboard controller only ever proposes a
/// `font_size` change; the remaining fields are adjusted through the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub font_size: u32,
    pub word_wrap: bool,
    pub line_numbers: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            word_wrap: true,
            line_numbers: true,
        }
    }
}

/// Partial update of [`EditorOptions`]; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorOptionsUpdate {
    pub font_size: Option<u32>,
    pub word_wrap: Option<bool>,
    pub line_numbers: Option<bool>,
}

impl EditorOptionsUpdate {
    pub fn font_size(size: u32) -> Self {
        Self {
            font_size: Some(size),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.font_size.is_none() && self.word_wrap.is_none() && self.line_numbers.is_none()
    }
}

/// Identifies a single field of [`EditorOptions`] in a changed-keys report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOption {
    FontSize,
    WordWrap,
    LineNumbers,
}

/// Result of a run or stop request against the current script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    Started,
    AlreadyRunning,
    Stopped,
    AlreadyIdle,
}

/// Contract the shell drives the editor through.
///
/// `update_options` reports which fields actually changed so callers can
/// gate follow-up work (cache invalidation, persistence) on a real change.
pub trait EditorController {
    fn run_current_script(&mut self) -> ScriptOutcome;

    fn stop_current_script(&mut self) -> ScriptOutcome;

    fn clear_messages(&mut self);

    fn update_options(&mut self, update: EditorOptionsUpdate) -> Vec<EditorOption>;

    /// Drops all cached per-line visual metadata. Required after a font-size
    /// change: the cached measurements were taken at the old glyph size.
    fn clear_all_meta_info(&mut self);

    fn font_size(&self) -> u32;

    fn default_font_size(&self) -> u32 {
        DEFAULT_FONT_SIZE
    }
}
