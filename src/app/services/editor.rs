use std::collections::HashMap;

use crate::app::domain::editor::{
    EditorController, EditorOption, EditorOptions, EditorOptionsUpdate, ScriptOutcome,
};

/// In-memory editor backing the shell.
///
/// Holds the run flag, the message log, the options record and the cached
/// per-line metadata. Script execution itself lives outside this crate; the
/// run flag is the entire run model here.
#[derive(Debug, Default)]
pub struct ScriptEditor {
    running: bool,
    messages: Vec<String>,
    options: EditorOptions,
    line_meta: HashMap<u32, String>,
}

impl ScriptEditor {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn options(&self) -> EditorOptions {
        self.options
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Attach a metadata annotation to a line (measurements, decorations).
    pub fn set_line_meta(&mut self, line: u32, meta: impl Into<String>) {
        self.line_meta.insert(line, meta.into());
    }

    pub fn line_meta_count(&self) -> usize {
        self.line_meta.len()
    }
}

impl EditorController for ScriptEditor {
    fn run_current_script(&mut self) -> ScriptOutcome {
        if self.running {
            ScriptOutcome::AlreadyRunning
        } else {
            self.running = true;
            ScriptOutcome::Started
        }
    }

    fn stop_current_script(&mut self) -> ScriptOutcome {
        if self.running {
            self.running = false;
            ScriptOutcome::Stopped
        } else {
            ScriptOutcome::AlreadyIdle
        }
    }

    fn clear_messages(&mut self) {
        self.messages.clear();
    }

    fn update_options(&mut self, update: EditorOptionsUpdate) -> Vec<EditorOption> {
        let mut changed = Vec::new();
        if let Some(font_size) = update.font_size {
            if font_size != self.options.font_size {
                self.options.font_size = font_size;
                changed.push(EditorOption::FontSize);
            }
        }
        if let Some(word_wrap) = update.word_wrap {
            if word_wrap != self.options.word_wrap {
                self.options.word_wrap = word_wrap;
                changed.push(EditorOption::WordWrap);
            }
        }
        if let Some(line_numbers) = update.line_numbers {
            if line_numbers != self.options.line_numbers {
                self.options.line_numbers = line_numbers;
                changed.push(EditorOption::LineNumbers);
            }
        }
        changed
    }

    fn clear_all_meta_info(&mut self) {
        self.line_meta.clear();
    }

    fn font_size(&self) -> u32 {
        self.options.font_size
    }
}
