use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::window_size::{SizeClass, SizeClassSet, WindowSize};
use crate::app::services::config_store::{ConfigKey, ConfigStore, Subscription};
use crate::ui::surface::VisualSurface;

/// Desired surface classes for a window size. Pure; an unrecognized bucket
/// contributes nothing for its axis.
pub fn size_classes(size: WindowSize) -> SizeClassSet {
    SizeClassSet {
        width: SizeClass::for_width(size.width),
        height: SizeClass::for_height(size.height),
    }
}

/// Rebuild the surface's bucket classes from the stored window size.
///
/// All six classes are removed before the active ones are added, so the
/// result never depends on what the surface carried before - calling this
/// twice with an unchanged config value is idempotent.
pub fn recompute_window_size_classes(config: &ConfigStore, surface: &mut dyn VisualSurface) {
    let desired = size_classes(config.window_size());
    for class in SizeClass::ALL {
        surface.remove_class(class.class_name());
    }
    for class in desired.iter() {
        surface.add_class(class.class_name());
    }
}

/// Keeps a surface's bucket classes in sync with the config store's
/// `window_size` value for as long as it is attached.
pub struct WindowSizeController {
    config: Rc<ConfigStore>,
    subscription: Option<Subscription>,
}

impl WindowSizeController {
    /// Subscribe to config changes and perform the initial recompute, so the
    /// surface is correct before any change ever fires. The config must be
    /// loaded before this is called.
    pub fn attach<S>(config: &Rc<ConfigStore>, surface: Rc<RefCell<S>>) -> Self
    where
        S: VisualSurface + 'static,
    {
        // Weak, because the listener is stored inside the config store and a
        // strong reference would keep the store alive through its own list.
        let store = Rc::downgrade(config);
        let listener_surface = Rc::clone(&surface);
        let subscription = config.on_change(move |event| {
            if event.key == ConfigKey::WindowSize {
                if let Some(config) = store.upgrade() {
                    recompute_window_size_classes(&config, &mut *listener_surface.borrow_mut());
                }
            }
        });

        recompute_window_size_classes(config, &mut *surface.borrow_mut());

        Self {
            config: Rc::clone(config),
            subscription: Some(subscription),
        }
    }

    /// Stop reacting to config changes. The surface keeps its last state.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.config.unsubscribe(subscription);
        }
    }
}

impl Drop for WindowSizeController {
    fn drop(&mut self) {
        self.detach();
    }
}
