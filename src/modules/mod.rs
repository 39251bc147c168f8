//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters the features depend on through traits, currently the
//! content store that holds uploaded report images.

pub mod storage;
