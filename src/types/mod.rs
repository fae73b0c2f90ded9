//! Tipos compartilhados do Resolva.

pub mod config;
pub mod definition;
pub mod errors;

pub use config::{CacheConfig, Config, FreshnessConfig, FreshnessMode};
pub use definition::Definition;
pub use errors::{ResolvaError, ResolvaResult};
