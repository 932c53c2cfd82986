//! Data-driven policy loading.
//!
//! This crate reads the user's policy from disk and serves it to the decision
//! core:
//! - Policy files (TOML, or RON for tooling that prefers it)
//! - A file-backed [`farm_core::ConfigStore`] with explicit reload
//!
//! All loaders use farm-core types directly with serde for deserialization.

pub mod loaders;
pub mod store;

pub use loaders::{ContentFactory, LoadResult, PolicyLoader};
pub use store::FileConfigStore;
