//! Configuration loading and environment merging.
//!
//! A landing-zone document is a YAML mapping with these recognized
//! top-level sections: `global`, `environments`, `networking`, `security`,
//! `applications`, `containers`, `data`, `identity` and `monitoring`.
//! Missing sections behave as empty mappings.
//!
//! # Environment Overrides
//!
//! The active environment comes from `global.environment` (default
//! `sandbox`). If `environments.<env>` exists, it is merged onto the whole
//! document:
//!
//! 1. Overrides of the environment named by `inherits` (if any), recursively
//! 2. The environment's own keys, which win over inherited ones
//!
//! # Examples
//!
//! ```
//! use alz::ConfigLoader;
//!
//! let yaml = "\
//! global:
//!   environment: dev
//! environments:
//!   base:
//!     networking:
//!       hubVnet: {addressSpace: 10.10.0.0/16}
//!       spokeVnet: {addressSpace: 10.11.0.0/16}
//!   dev:
//!     inherits: base
//!     networking:
//!       spokeVnet: {addressSpace: 10.21.0.0/16}
//! ";
//!
//! let config = ConfigLoader::load_str(yaml, "inline").unwrap();
//! let hub = config.component("networking", "hubVnet").unwrap();
//! let spoke = config.component("networking", "spokeVnet").unwrap();
//! assert_eq!(hub.get("addressSpace").and_then(|v| v.as_str()), Some("10.10.0.0/16"));
//! assert_eq!(spoke.get("addressSpace").and_then(|v| v.as_str()), Some("10.21.0.0/16"));
//! ```

pub mod loader;
pub mod merged;
pub mod merger;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use loader::ConfigLoader;
pub use merged::{Component, MergedConfig, DEFAULT_ENVIRONMENT};
pub use merger::{ConfigMerger, MAX_INHERITANCE_DEPTH};
