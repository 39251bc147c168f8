use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::Bytes;

use super::content_store::{
    file_name_from_reference, generate_file_name, reference_for, validate_file_name,
    ContentStore, DeleteOutcome, StorageError, MAX_NAME_ATTEMPTS,
};

/// In-process content store with simple fault injection for tests
#[derive(Default)]
pub struct InMemoryContentStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    files: HashMap<String, Bytes>,
    /// Remaining successful writes before `put` starts failing
    writes_before_failure: Option<usize>,
    fail_deletes: bool,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `count` writes succeed, then fail every later one
    pub fn fail_writes_after(self, count: usize) -> Self {
        self.state.lock().unwrap().writes_before_failure = Some(count);
        self
    }

    /// Make every delete of an existing file fail
    pub fn fail_deletes(self) -> Self {
        self.state.lock().unwrap().fail_deletes = true;
        self
    }

    pub fn contains(&self, reference: &str) -> bool {
        let name = match file_name_from_reference(reference) {
            Ok(name) => name,
            Err(_) => return false,
        };
        self.state.lock().unwrap().files.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    /// Drop a file behind the store's back, as an operator might
    pub fn remove_out_of_band(&self, reference: &str) {
        if let Ok(name) = file_name_from_reference(reference) {
            self.state.lock().unwrap().files.remove(name);
        }
    }
}

fn injected(action: &'static str, name: &str) -> StorageError {
    StorageError::Io {
        action,
        name: name.to_string(),
        source: std::io::Error::other("injected failure"),
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn put(&self, data: Bytes, extension: Option<&str>) -> Result<String, StorageError> {
        let mut state = self.state.lock().unwrap();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = generate_file_name(extension);
            if state.files.contains_key(&name) {
                continue;
            }

            if let Some(left) = state.writes_before_failure.as_mut() {
                if *left == 0 {
                    return Err(injected("write", &name));
                }
                *left -= 1;
            }

            state.files.insert(name.clone(), data);
            return Ok(reference_for(&name));
        }

        Err(StorageError::NameExhausted(MAX_NAME_ATTEMPTS))
    }

    async fn get(&self, file_name: &str) -> Result<Option<Bytes>, StorageError> {
        validate_file_name(file_name)?;
        Ok(self.state.lock().unwrap().files.get(file_name).cloned())
    }

    async fn delete(&self, reference: &str) -> Result<DeleteOutcome, StorageError> {
        let name = file_name_from_reference(reference)?;
        let mut state = self.state.lock().unwrap();

        if !state.files.contains_key(name) {
            return Ok(DeleteOutcome::Missing);
        }
        if state.fail_deletes {
            return Err(injected("delete", name));
        }

        state.files.remove(name);
        Ok(DeleteOutcome::Removed)
    }
}
