use crate::app::domain::commands::{Command, FontSizeAction};
use crate::app::domain::editor::{
    EditorController, EditorOption, EditorOptionsUpdate, FONT_SIZE_MAX, FONT_SIZE_MIN,
};
use crate::app::domain::keys::{Key, KeyEvent};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform::PrimaryModifier;
use crate::app::services::config_store::ConfigStore;
use crate::ui::menu::Menu;
use crate::ui::surface::VisualSurface;

/// What the event source should do with a key event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// Handled; suppress the default action and further propagation.
    Consumed,
    /// Not ours; leave the event for other handlers.
    PassThrough,
}

/// The collaborators a dispatch round acts on, borrowed for the call.
pub struct DispatchTargets<'a> {
    pub editor: &'a mut dyn EditorController,
    pub menu: &'a mut dyn Menu,
    pub surface: &'a mut dyn VisualSurface,
    pub config: &'a ConfigStore,
}

/// Classifies modifier-held key events into editor commands and applies
/// them. The rule order is fixed and first-match-wins.
pub struct KeyboardController {
    primary: PrimaryModifier,
}

impl KeyboardController {
    pub fn new(primary: PrimaryModifier) -> Self {
        Self { primary }
    }

    /// Entry point for the raw key-down stream. Events without meta or ctrl
    /// never reach classification.
    pub fn on_key_down(
        &self,
        event: &KeyEvent,
        targets: &mut DispatchTargets,
    ) -> Result<EventDisposition> {
        if !(event.meta || event.ctrl) {
            return Ok(EventDisposition::PassThrough);
        }
        if self.handle_key(event, targets)? {
            Ok(EventDisposition::Consumed)
        } else {
            Ok(EventDisposition::PassThrough)
        }
    }

    /// Maps a key event to a command. Pure; evaluates the rules in order and
    /// stops at the first match.
    pub fn classify(&self, event: &KeyEvent) -> Option<Command> {
        let meta_primary = self.primary.is_meta();

        // run or stop the current script
        if matches!(event.key, Key::Enter | Key::Char('r') | Key::Char('s')) {
            return Some(if event.shift {
                Command::StopScript
            } else {
                Command::RunScript
            });
        }

        // force stop (ctrl-shift-X)
        if matches!(event.key, Key::Char('x') | Key::Char('X')) && event.ctrl && event.shift {
            return Some(Command::StopScript);
        }

        // clear the message log (ctrl-L anywhere, meta-K where meta is primary)
        if (event.key == Key::Char('l') && event.ctrl)
            || (meta_primary && event.meta && event.key == Key::Char('k'))
        {
            return Some(Command::ClearMessages);
        }

        // toggle menu; meta-M is a reserved host shortcut on meta-primary
        // platforms and must not be intercepted
        if event.key == Key::Char('m') && !(meta_primary && event.meta) {
            return Some(Command::ToggleMenu);
        }

        match event.key {
            Key::Char('=') | Key::Char('+') => {
                Some(Command::AdjustFontSize(FontSizeAction::Increase))
            }
            Key::Char('-') => Some(Command::AdjustFontSize(FontSizeAction::Decrease)),
            Key::Char('0') => Some(Command::AdjustFontSize(FontSizeAction::Reset)),
            _ => None,
        }
    }

    /// Classifies and applies a key event, returning whether it was handled.
    /// An event matching no rule is a normal no-op, not an error.
    pub fn handle_key(&self, event: &KeyEvent, targets: &mut DispatchTargets) -> Result<bool> {
        let Some(command) = self.classify(event) else {
            return Ok(false);
        };
        match command {
            Command::RunScript => {
                targets.editor.run_current_script();
                Ok(true)
            }
            Command::StopScript => {
                targets.editor.stop_current_script();
                Ok(true)
            }
            Command::ClearMessages => {
                targets.editor.clear_messages();
                Ok(true)
            }
            Command::ToggleMenu => {
                targets.menu.toggle();
                Ok(true)
            }
            Command::AdjustFontSize(action) => self.adjust_font_size(action, targets),
        }
    }

    fn adjust_font_size(
        &self,
        action: FontSizeAction,
        targets: &mut DispatchTargets,
    ) -> Result<bool> {
        let proposed = match action {
            FontSizeAction::Increase => (targets.editor.font_size() + 1).min(FONT_SIZE_MAX),
            FontSizeAction::Decrease => {
                targets.editor.font_size().saturating_sub(1).max(FONT_SIZE_MIN)
            }
            FontSizeAction::Reset => targets.editor.default_font_size(),
        };

        // Immediate visual feedback; happens before the editor confirms.
        targets.surface.set_font_size_px(proposed);

        let changed = targets
            .editor
            .update_options(EditorOptionsUpdate::font_size(proposed));
        if changed.is_empty() {
            return Ok(false);
        }
        if changed.contains(&EditorOption::FontSize) {
            // Cached line metadata measures the old glyph size.
            targets.editor.clear_all_meta_info();
            targets.config.set_font_size(proposed)?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::editor::{EditorOptions, ScriptOutcome};
    use crate::app::services::editor::ScriptEditor;
    use crate::ui::menu::MenuState;
    use crate::ui::surface::HeadlessSurface;

    struct Shell {
        editor: ScriptEditor,
        menu: MenuState,
        surface: HeadlessSurface,
        config: ConfigStore,
    }

    impl Shell {
        fn new() -> Self {
            Self::with_font_size(EditorOptions::default().font_size)
        }

        fn with_font_size(font_size: u32) -> Self {
            let config = ConfigStore::in_memory();
            config.set_font_size(font_size).unwrap();
            Self {
                editor: ScriptEditor::new(EditorOptions {
                    font_size,
                    ..EditorOptions::default()
                }),
                menu: MenuState::new(),
                surface: HeadlessSurface::new(),
                config,
            }
        }

        fn dispatch(&mut self, controller: &KeyboardController, chord: &str) -> bool {
            let event: KeyEvent = chord.parse().unwrap();
            let mut targets = DispatchTargets {
                editor: &mut self.editor,
                menu: &mut self.menu,
                surface: &mut self.surface,
                config: &self.config,
            };
            controller.handle_key(&event, &mut targets).unwrap()
        }
    }

    fn ctrl_primary() -> KeyboardController {
        KeyboardController::new(PrimaryModifier::Ctrl)
    }

    fn meta_primary() -> KeyboardController {
        KeyboardController::new(PrimaryModifier::Meta)
    }

    #[test]
    fn test_run_keys_start_the_script() {
        for chord in ["Ctrl+Enter", "Ctrl+r", "Meta+s"] {
            let mut shell = Shell::new();
            assert!(shell.dispatch(&ctrl_primary(), chord), "chord {:?}", chord);
            assert!(shell.editor.is_running(), "chord {:?}", chord);
        }
    }

    #[test]
    fn test_shifted_run_keys_stop_instead() {
        let mut shell = Shell::new();
        let controller = ctrl_primary();
        shell.dispatch(&controller, "Ctrl+Enter");
        assert!(shell.editor.is_running());
        assert!(shell.dispatch(&controller, "Ctrl+Shift+Enter"));
        assert!(!shell.editor.is_running());
    }

    #[test]
    fn test_run_reports_handled_when_already_running() {
        // fire-and-forget: handled regardless of the editor's outcome
        let mut shell = Shell::new();
        let controller = ctrl_primary();
        shell.dispatch(&controller, "Ctrl+r");
        assert!(shell.dispatch(&controller, "Ctrl+r"));
        assert!(shell.dispatch(&controller, "Ctrl+Shift+s"));
        assert!(shell.dispatch(&controller, "Ctrl+Shift+s"));
    }

    #[test]
    fn test_force_stop_rule_is_reachable() {
        // "x" is not a run/stop key, so only the force-stop rule can match
        let mut shell = Shell::new();
        let controller = ctrl_primary();
        shell.dispatch(&controller, "Ctrl+r");

        let event: KeyEvent = "Ctrl+Shift+x".parse().unwrap();
        assert_eq!(controller.classify(&event), Some(Command::StopScript));
        assert!(shell.dispatch(&controller, "Ctrl+Shift+x"));
        assert!(!shell.editor.is_running());
        assert_eq!(
            shell.editor.stop_current_script(),
            ScriptOutcome::AlreadyIdle,
            "the script must have been stopped exactly once"
        );
    }

    #[test]
    fn test_force_stop_requires_both_modifiers() {
        let controller = ctrl_primary();
        let event: KeyEvent = "Ctrl+x".parse().unwrap();
        assert_eq!(controller.classify(&event), None);
        let event: KeyEvent = "Meta+Shift+x".parse().unwrap();
        assert_eq!(controller.classify(&event), None);
    }

    #[test]
    fn test_clear_messages_rules() {
        let controller = meta_primary();
        assert_eq!(
            controller.classify(&"Ctrl+l".parse().unwrap()),
            Some(Command::ClearMessages)
        );
        assert_eq!(
            controller.classify(&"Meta+k".parse().unwrap()),
            Some(Command::ClearMessages)
        );
        // meta-K is reserved for meta-primary platforms only
        assert_eq!(ctrl_primary().classify(&"Meta+k".parse().unwrap()), None);

        let mut shell = Shell::new();
        shell.editor.push_message("old output");
        shell.dispatch(&meta_primary(), "Meta+k");
        assert!(shell.editor.messages().is_empty());
    }

    #[test]
    fn test_menu_toggle_suppressed_for_host_shortcut() {
        // meta-primary platform: meta-M belongs to the host
        let mut shell = Shell::new();
        assert!(!shell.dispatch(&meta_primary(), "Meta+m"));
        assert!(!shell.menu.is_visible());

        // ctrl-M still toggles there
        assert!(shell.dispatch(&meta_primary(), "Ctrl+m"));
        assert!(shell.menu.is_visible());

        // ctrl-primary platform: meta-M is fair game
        let mut shell = Shell::new();
        assert!(shell.dispatch(&ctrl_primary(), "Meta+m"));
        assert!(shell.menu.is_visible());
    }

    #[test]
    fn test_font_size_increase_decrease() {
        let mut shell = Shell::with_font_size(16);
        let controller = ctrl_primary();

        assert!(shell.dispatch(&controller, "Ctrl+="));
        assert_eq!(shell.editor.font_size(), 17);
        assert_eq!(shell.surface.font_size_px(), Some(17));
        assert_eq!(shell.config.font_size(), 17);

        assert!(shell.dispatch(&controller, "Ctrl+-"));
        assert!(shell.dispatch(&controller, "Ctrl+-"));
        assert_eq!(shell.editor.font_size(), 15);
        assert_eq!(shell.config.font_size(), 15);
    }

    #[test]
    fn test_font_size_clamped_at_max() {
        let mut shell = Shell::with_font_size(FONT_SIZE_MAX);
        shell.editor.set_line_meta(1, "cached");

        // clamped proposal equals the current value: nothing changes,
        // nothing is persisted, and the event is reported unhandled
        assert!(!shell.dispatch(&ctrl_primary(), "Ctrl+="));
        assert_eq!(shell.editor.font_size(), FONT_SIZE_MAX);
        assert_eq!(shell.config.font_size(), FONT_SIZE_MAX);
        assert_eq!(shell.editor.line_meta_count(), 1);
        // the style write still happened before the editor declined
        assert_eq!(shell.surface.font_size_px(), Some(FONT_SIZE_MAX));
    }

    #[test]
    fn test_font_size_clamped_at_min() {
        let mut shell = Shell::with_font_size(FONT_SIZE_MIN);
        assert!(!shell.dispatch(&ctrl_primary(), "Ctrl+-"));
        assert_eq!(shell.editor.font_size(), FONT_SIZE_MIN);
        assert_eq!(shell.config.font_size(), FONT_SIZE_MIN);
    }

    #[test]
    fn test_font_size_reset_end_to_end() {
        let mut shell = Shell::with_font_size(22);
        shell.editor.set_line_meta(5, "stale");

        assert!(shell.dispatch(&meta_primary(), "Meta+0"));
        let default = shell.editor.default_font_size();
        assert_eq!(shell.editor.font_size(), default);
        assert_eq!(shell.surface.font_size_px(), Some(default));
        assert_eq!(shell.config.font_size(), default);
        assert_eq!(shell.editor.line_meta_count(), 0, "metadata invalidated");
    }

    #[test]
    fn test_persistence_gated_on_editor_confirmation() {
        // an editor that never applies changes must never trigger
        // persistence or invalidation
        struct RefusingEditor {
            meta_cleared: bool,
        }
        impl EditorController for RefusingEditor {
            fn run_current_script(&mut self) -> ScriptOutcome {
                ScriptOutcome::Started
            }
            fn stop_current_script(&mut self) -> ScriptOutcome {
                ScriptOutcome::Stopped
            }
            fn clear_messages(&mut self) {}
            fn update_options(&mut self, _update: EditorOptionsUpdate) -> Vec<EditorOption> {
                Vec::new()
            }
            fn clear_all_meta_info(&mut self) {
                self.meta_cleared = true;
            }
            fn font_size(&self) -> u32 {
                20
            }
        }

        let mut editor = RefusingEditor {
            meta_cleared: false,
        };
        let mut menu = MenuState::new();
        let mut surface = HeadlessSurface::new();
        let config = ConfigStore::in_memory();
        config.set_font_size(20).unwrap();

        let controller = ctrl_primary();
        let mut targets = DispatchTargets {
            editor: &mut editor,
            menu: &mut menu,
            surface: &mut surface,
            config: &config,
        };
        let handled = controller
            .handle_key(&"Ctrl+=".parse().unwrap(), &mut targets)
            .unwrap();

        assert!(!handled);
        assert_eq!(config.font_size(), 20);
        assert!(!editor.meta_cleared);
        // style feedback is unconditional once a proposal exists
        assert_eq!(surface.font_size_px(), Some(21));
    }

    #[test]
    fn test_unmatched_event_is_a_no_op() {
        let mut shell = Shell::new();
        let controller = ctrl_primary();
        assert!(!shell.dispatch(&controller, "Ctrl+q"));
        assert!(!shell.editor.is_running());
        assert!(!shell.menu.is_visible());
        assert_eq!(shell.surface.font_size_px(), None);
    }

    #[test]
    fn test_unmodified_events_never_reach_classification() {
        let mut shell = Shell::new();
        let controller = ctrl_primary();
        // Enter would match the run rule if it got that far
        let event = KeyEvent::new(Key::Enter);
        let mut targets = DispatchTargets {
            editor: &mut shell.editor,
            menu: &mut shell.menu,
            surface: &mut shell.surface,
            config: &shell.config,
        };
        let disposition = controller.on_key_down(&event, &mut targets).unwrap();
        assert_eq!(disposition, EventDisposition::PassThrough);
        assert!(!shell.editor.is_running());
    }

    #[test]
    fn test_handled_events_are_consumed() {
        let mut shell = Shell::new();
        let controller = ctrl_primary();
        let mut targets = DispatchTargets {
            editor: &mut shell.editor,
            menu: &mut shell.menu,
            surface: &mut shell.surface,
            config: &shell.config,
        };
        let consumed = controller
            .on_key_down(&"Ctrl+Enter".parse().unwrap(), &mut targets)
            .unwrap();
        assert_eq!(consumed, EventDisposition::Consumed);

        let passed = controller
            .on_key_down(&"Ctrl+q".parse().unwrap(), &mut targets)
            .unwrap();
        assert_eq!(passed, EventDisposition::PassThrough);
    }

    #[test]
    fn test_rule_order_run_beats_font_rules() {
        // "s" with shift held is a stop, never anything below it
        let controller = ctrl_primary();
        assert_eq!(
            controller.classify(&"Ctrl+Shift+s".parse().unwrap()),
            Some(Command::StopScript)
        );
    }
}
