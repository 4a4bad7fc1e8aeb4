use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::app::domain::config::ConfigState;
use crate::app::domain::window_size::WindowSize;
use crate::app::infrastructure::error::Result;

/// Identifies which configuration value changed in a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    FontSize,
    WindowSize,
}

/// Delivered synchronously to every subscriber after a value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub key: ConfigKey,
}

/// Handle for a registered change listener; pass back to
/// [`ConfigStore::unsubscribe`] to tear the subscription down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&ChangeEvent)>;

/// Persisted key-value configuration with synchronous change notifications.
///
/// Single-threaded: the store is shared as `Rc<ConfigStore>` and uses
/// interior mutability, so listeners may read values back from the store
/// while a notification is being delivered.
pub struct ConfigStore {
    path: Option<PathBuf>,
    state: RefCell<ConfigState>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    // removals requested while a notification round holds the listener list
    pending_removals: RefCell<Vec<u64>>,
    notifying: Cell<bool>,
    next_id: Cell<u64>,
}

impl ConfigStore {
    /// Load the store from `path`, falling back to defaults when the file is
    /// missing or unparseable. A missing file is seeded with the defaults.
    pub fn load(path: PathBuf) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => Self::with_state(Some(path), state),
                Err(e) => {
                    warn!("failed to parse config: {e}; using defaults");
                    Self::with_state(Some(path), ConfigState::default())
                }
            },
            Err(_) => {
                // File doesn't exist; seed it so the next launch starts
                // from a real config
                let store = Self::with_state(Some(path), ConfigState::default());
                let _ = store.save();
                store
            }
        }
    }

    /// Store without a backing file; used by tests and one-off tooling.
    pub fn in_memory() -> Self {
        Self::with_state(None, ConfigState::default())
    }

    fn with_state(path: Option<PathBuf>, state: ConfigState) -> Self {
        Self {
            path,
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            pending_removals: RefCell::new(Vec::new()),
            notifying: Cell::new(false),
            next_id: Cell::new(0),
        }
    }

    /// Config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("scriptpad");
        path.push("config.json");
        path
    }

    pub fn font_size(&self) -> u32 {
        self.state.borrow().font_size
    }

    pub fn window_size(&self) -> WindowSize {
        self.state.borrow().window_size
    }

    /// Set and persist the font size. Emits a change event only when the
    /// stored value actually changes.
    pub fn set_font_size(&self, font_size: u32) -> Result<()> {
        {
            let mut state = self.state.borrow_mut();
            if state.font_size == font_size {
                return Ok(());
            }
            state.font_size = font_size;
        }
        self.emit(&ChangeEvent {
            key: ConfigKey::FontSize,
        });
        self.save()
    }

    /// Set and persist the window size. Emits a change event only when the
    /// stored value actually changes.
    pub fn set_window_size(&self, window_size: WindowSize) -> Result<()> {
        {
            let mut state = self.state.borrow_mut();
            if state.window_size == window_size {
                return Ok(());
            }
            state.window_size = window_size;
        }
        self.emit(&ChangeEvent {
            key: ConfigKey::WindowSize,
        });
        self.save()
    }

    /// Write the current state to disk. A store without a backing file is a
    /// no-op.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&*self.state.borrow())?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Register a change listener. Listeners run synchronously, in
    /// subscription order, inside the call that mutated the store.
    pub fn on_change(&self, listener: impl FnMut(&ChangeEvent) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        if self.notifying.get() {
            // The listener list is checked out by emit(); drop it afterwards.
            self.pending_removals.borrow_mut().push(subscription.0);
        } else {
            self.listeners
                .borrow_mut()
                .retain(|(id, _)| *id != subscription.0);
        }
    }

    fn emit(&self, event: &ChangeEvent) {
        // The list is moved out while listeners run so they can call back
        // into the store (get, subscribe, unsubscribe) without re-borrowing.
        let mut active = std::mem::take(&mut *self.listeners.borrow_mut());
        self.notifying.set(true);
        for (_, listener) in active.iter_mut() {
            listener(event);
        }
        self.notifying.set(false);

        let mut listeners = self.listeners.borrow_mut();
        // Listeners added during the round land after the existing ones.
        active.append(&mut listeners);
        *listeners = active;
        let removals = std::mem::take(&mut *self.pending_removals.borrow_mut());
        if !removals.is_empty() {
            listeners.retain(|(id, _)| !removals.contains(id));
        }
    }
}
