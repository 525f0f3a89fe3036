//! Persistent generator settings.
//!
//! The settings document remembers identity answers between runs and carries
//! the plugin catalog offered during the interview.
//!
//! # Structure
//!
//! - `meta` - Identity defaults and the merge rule applied on update
//! - `catalog` - Plugin catalog entries and built-in defaults
//! - `store` - Loading, updating and persisting the settings document

mod catalog;
mod meta;
mod store;

pub use catalog::PluginEntry;
pub use meta::Meta;
pub use store::{SettingsError, SettingsStore};
