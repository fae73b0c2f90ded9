//! Fontes de resolução de definições.
//!
//! Este módulo define o contrato [`DefinitionSource`] e o decorador
//! [`CachedDefinitionSource`], que interpõe um backend de cache entre o
//! chamador e uma fonte mais lenta.

mod base;
mod cached;
mod freshness;

pub use base::{DefinitionSource, StaticSource};
pub use cached::{CachedDefinitionSource, CACHE_PREFIX};
