//! Domain models for ae
//!
//! Pure value types shared by the catalog, the installer and the CLI layer.

pub mod result;
pub mod scope;

pub use result::{InstallResult, Subject};
pub use scope::{Location, Scope};
