//! Configuration system for pypher.
//!
//! Configuration supplies the defaults offered by the prompts and the
//! structural fields of the descriptor:
//! - the YAML user configuration (`~/.pypher/config.yaml`, or `$PYPHER_CONFIG`)
//! - `PYPHER_*` environment variable overrides
//! - programmatic overrides via the builder
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PYPHER_*`)
//! 3. User config
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use pypher::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         build_backend: Some("flit_core.buildapi".to_string()),
//!         build_requires: Some(vec!["flit_core>=3.4".to_string()]),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.build_system().backend, "flit_core.buildapi");
//! assert_eq!(config.default_version(), "0.1.0");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
