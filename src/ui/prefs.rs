//! Process-wide UI preferences (dark/light mode).
//!
//! Lives next to the data core but apart from it: nothing in models,
//! filter, api, controller or export reads this. Only the embedding shell
//! does, with explicit read / update / subscribe semantics.

use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError, RwLock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

type Subscriber = Box<dyn Fn(UiPrefs) + Send + Sync>;

static PREFS: Lazy<RwLock<UiPrefs>> = Lazy::new(|| RwLock::new(UiPrefs::default()));
static SUBSCRIBERS: Lazy<Mutex<Vec<Subscriber>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn read() -> UiPrefs {
    *PREFS.read().unwrap_or_else(PoisonError::into_inner)
}

/// Applies `change` to the shared preferences and notifies subscribers
/// with the new value.
pub fn update<F: FnOnce(&mut UiPrefs)>(change: F) -> UiPrefs {
    let new_value = {
        let mut prefs = PREFS.write().unwrap_or_else(PoisonError::into_inner);
        change(&mut prefs);
        *prefs
    };
    let subscribers = SUBSCRIBERS.lock().unwrap_or_else(PoisonError::into_inner);
    for subscriber in subscribers.iter() {
        subscriber(new_value);
    }
    new_value
}

pub fn toggle_dark_mode() -> UiPrefs {
    update(|p| p.dark_mode = !p.dark_mode)
}

/// Registers a callback fired on every update. Subscriptions last for the
/// process lifetime.
pub fn subscribe<F: Fn(UiPrefs) + Send + Sync + 'static>(callback: F) {
    SUBSCRIBERS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(Box::new(callback));
}
