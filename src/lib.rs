//! Launcher plugin that opens work-item URLs built from per-site templates.
//!
//! The user picks a configured site from the launcher catalog, types an
//! identifier, and the plugin opens the site's URL with the identifier
//! substituted for `{itemId}`.

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod plugin;
pub mod registry;

pub use browser::{SystemBrowser, UrlOpener};
pub use catalog::{CatalogItem, ItemCategory};
pub use config::{ConfigDocument, ConfigSource, FileConfig, InlineConfig, MainSettings};
pub use error::{ConfigWarning, LookupError, ParseWarning, PayloadError};
pub use plugin::{LauncherPlugin, WorkItemLookup};
pub use registry::{build_registry, RegistryBuild, SiteDescriptor, SiteRegistry};
