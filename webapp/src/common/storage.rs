use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use crate::config::STORAGE_PREFIX;

pub fn storage_key(key: &str) -> String {
    format!("{STORAGE_PREFIX}_{key}")
}

pub fn set_local_storage<T>(key: &str, value: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// A key that was never written is not an error
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_prefixed() {
        assert_eq!(storage_key("theme"), "service2u_theme");
    }
}
