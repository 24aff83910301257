use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Store an opaque string value (the session token is kept raw, not JSON).
pub fn set_string(key: &str, value: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage unavailable")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("could not write '{}' to localStorage", key))
}

pub fn get_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage unavailable")?;
    let json = serde_json::to_string(value).map_err(|e| format!("serialize error: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| format!("could not write '{}' to localStorage", key))
}

pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove(key: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage unavailable")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("could not remove '{}' from localStorage", key))
}
