//! Storage module for uploaded file content
//!
//! Features talk to the [`ContentStore`] trait. Production uses the flat
//! local directory store; tests swap in the in-memory store.

mod content_store;
mod local;
#[cfg(test)]
mod memory;

pub use content_store::{
    content_type_for_name, extension_of, ContentStore, DeleteOutcome, StorageError,
};
pub use local::LocalContentStore;
#[cfg(test)]
pub use memory::InMemoryContentStore;
