//! Backends de cache chave/valor.
//!
//! Este módulo define o contrato [`CacheBackend`] consumido pela camada
//! de resolução e um backend em memória com evicção LRU para uso direto
//! e em testes.

mod backend;
mod memory;

pub use backend::CacheBackend;
pub use memory::{CacheStats, MemoryBackend};
