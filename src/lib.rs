//! # Resolva
//!
//! Camada de cache transparente para resolução de definições.
//!
//! Resolva interpõe um backend de cache plugável entre o chamador e uma
//! fonte de definições mais lenta (introspecção, parsing de arquivos),
//! evitando recomputações em lookups repetidos. Opcionalmente, cada hit
//! pode ser validado contra o mtime do arquivo que define o nome
//! (rastreamento de frescor, uma conveniência de desenvolvimento).
//!
//! ## Módulos
//!
//! - [`source`] - Fontes de definição e o decorador de cache
//! - [`cache`] - Backends de cache chave/valor
//! - [`locate`] - Localização de artefatos-fonte para nomes
//! - [`types`] - Tipos compartilhados
//!
//! ## Exemplo
//!
//! ```
//! use std::sync::Arc;
//! use resolva::locate::NullLocator;
//! use resolva::cache::MemoryBackend;
//! use resolva::source::{CachedDefinitionSource, StaticSource};
//! use resolva::types::Definition;
//!
//! let source = StaticSource::new().with(Definition::new("db.connection"));
//! let resolver = CachedDefinitionSource::new(
//!     Arc::new(source),
//!     Arc::new(MemoryBackend::new(100)),
//!     Arc::new(NullLocator),
//! );
//!
//! let definition = resolver.resolve("db.connection").unwrap();
//! assert!(definition.is_some());
//! ```

pub mod cache;
pub mod locate;
pub mod source;
pub mod types;

pub use types::config::{Config, FreshnessMode};
pub use types::errors::{ResolvaError, ResolvaResult};
