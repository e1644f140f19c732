use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{
        Arc,
        Mutex,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::GundelikError;

const APP_NAME: &str = "gundelik";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// String-keyed durable storage. One logical key holds one JSON document.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, GundelikError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GundelikError>;
    fn remove(&mut self, key: &str) -> Result<(), GundelikError>;
}

/// Stores each key as `<key>.json` in the app data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    pub fn new() -> Self {
        Self { data_dir: get_app_data_dir() }
    }

    pub fn with_dir(data_dir: PathBuf) -> Self {
        let _ = fs::create_dir_all(&data_dir);
        Self { data_dir }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, GundelikError> {
        let file_path = self.file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&file_path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GundelikError> {
        fs::write(self.file_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), GundelikError> {
        let file_path = self.file_path(key);
        if file_path.exists() {
            fs::remove_file(&file_path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions. Clones share the same
/// underlying map, so a second reader sees everything a first writer saved.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, GundelikError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GundelikError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), GundelikError> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        Ok(())
    }
}

pub fn store<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    data: &T,
) -> Result<(), GundelikError> {
    let json = serde_json::to_string_pretty(data)?;
    store.set(key, &json)
}

/// Missing and corrupt records both come back as the default value; a record
/// that fails to parse is reported and discarded. Only an unreadable store
/// surfaces as an error, so callers can drop to in-memory operation.
pub fn load_or_default<T: for<'de> Deserialize<'de> + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<T, GundelikError> {
    match store.get(key)? {
        Some(json) => match serde_json::from_str(&json) {
            Ok(data) => Ok(data),
            Err(e) => {
                eprintln!("Failed to parse stored {}: {}. Starting fresh.", key, e);
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}
