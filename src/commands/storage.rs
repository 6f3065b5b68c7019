//! Remembered Display Name
//!
//! The only value the app persists: the last name a task was submitted under.

use web_sys::Storage;

const DISPLAY_NAME_KEY: &str = "taskboard.displayName";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Last remembered name, if any
pub fn remembered_name() -> Option<String> {
    let storage = local_storage()?;
    match storage.get_item(DISPLAY_NAME_KEY) {
        Ok(name) => name.filter(|n| !n.trim().is_empty()),
        Err(e) => {
            log::warn!("Could not read remembered name: {:?}", e);
            None
        }
    }
}

pub fn remember_name(name: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, name not remembered");
        return;
    };
    if let Err(e) = storage.set_item(DISPLAY_NAME_KEY, name) {
        log::warn!("Could not remember name: {:?}", e);
    }
}
