//! Nativegen Config
//!
//! Everything the generator reads besides class metadata:
//! - **Overrides**: `.properties` tables of known types (`overrides`)
//! - **Class names**: validation of JVM binary names (`class_name`)
//! - **Project**: optional `nativegen.toml` (`project`)

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod class_name;
pub mod error;
pub mod overrides;
pub mod project;
pub mod properties;

pub use class_name::derived_type_name;
pub use error::ConfigError;
pub use overrides::OverrideTable;
pub use project::{GeneratorConfig, ProjectConfig, CONFIG_FILE_NAME};
