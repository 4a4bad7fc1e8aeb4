use std::cell::RefCell;
use std::rc::Rc;

use crate::app::controllers::keyboard::{DispatchTargets, EventDisposition, KeyboardController};
use crate::app::controllers::window_size::WindowSizeController;
use crate::app::domain::editor::EditorOptions;
use crate::app::domain::keys::KeyEvent;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform::PrimaryModifier;
use crate::app::services::config_store::ConfigStore;
use crate::app::services::editor::ScriptEditor;
use crate::ui::menu::MenuState;
use crate::ui::surface::HeadlessSurface;

/// Wires the controllers to their collaborators and feeds them events.
///
/// Construction order matters: the config store must already be loaded when
/// the window-size controller attaches, so its initial recompute reads real
/// values.
pub struct AppState {
    pub keyboard: KeyboardController,
    pub editor: ScriptEditor,
    pub menu: MenuState,
    pub surface: Rc<RefCell<HeadlessSurface>>,
    pub config: Rc<ConfigStore>,
    _window_size: WindowSizeController,
}

impl AppState {
    pub fn new(config: Rc<ConfigStore>, primary: PrimaryModifier) -> Self {
        let editor = ScriptEditor::new(EditorOptions {
            font_size: config.font_size(),
            ..EditorOptions::default()
        });
        let surface = Rc::new(RefCell::new(HeadlessSurface::new()));
        let window_size = WindowSizeController::attach(&config, Rc::clone(&surface));

        Self {
            keyboard: KeyboardController::new(primary),
            editor,
            menu: MenuState::new(),
            surface,
            config,
            _window_size: window_size,
        }
    }

    /// Feed one raw key-down event through the registration filter and the
    /// keyboard controller.
    ///
    /// The surface borrow is held across the dispatch, so config listeners
    /// must only touch the surface for `window_size` changes - which a key
    /// event never produces.
    pub fn on_key_down(&mut self, event: &KeyEvent) -> Result<EventDisposition> {
        let mut surface = self.surface.borrow_mut();
        let mut targets = DispatchTargets {
            editor: &mut self.editor,
            menu: &mut self.menu,
            surface: &mut *surface,
            config: &self.config,
        };
        self.keyboard.on_key_down(event, &mut targets)
    }
}
