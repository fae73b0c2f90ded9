//! Backend de cache em memória.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use lru::LruCache;
use serde_json::Value;

use super::backend::CacheBackend;
use crate::{ResolvaError, ResolvaResult};

/// Estatísticas do cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima.
    pub capacity: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Backend de cache em memória com evicção LRU.
///
/// Entradas menos usadas são descartadas quando a capacidade é atingida;
/// a evicção é responsabilidade exclusiva do backend, a camada de
/// resolução nunca remove entradas explicitamente.
pub struct MemoryBackend {
    entries: Mutex<LruCache<String, Value>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryBackend {
    /// Cria um novo backend.
    ///
    /// # Argumentos
    /// - `capacity`: Número máximo de entradas
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1000).unwrap());
        Self {
            entries: Mutex::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cria um backend com capacidade padrão.
    pub fn default_config() -> Self {
        Self::new(1000)
    }

    fn lock(&self) -> ResolvaResult<std::sync::MutexGuard<'_, LruCache<String, Value>>> {
        self.entries
            .lock()
            .map_err(|_| ResolvaError::backend("lock envenenado no cache em memória"))
    }

    /// Limpa todo o cache.
    pub fn clear(&self) -> ResolvaResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        let (size, capacity) = match self.entries.lock() {
            Ok(entries) => (entries.len(), entries.cap().get()),
            Err(_) => (0, 0),
        };
        CacheStats {
            size,
            capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl CacheBackend for MemoryBackend {
    fn fetch(&self, key: &str) -> ResolvaResult<Option<Value>> {
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(value.clone()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    fn store(&self, key: &str, value: Value) -> ResolvaResult<()> {
        self.lock()?.put(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_miss() {
        let backend = MemoryBackend::new(10);
        assert!(backend.fetch("nonexistent").unwrap().is_none());

        let stats = backend.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_store_then_fetch() {
        let backend = MemoryBackend::new(10);
        backend.store("key1", json!({"a": 1})).unwrap();

        let value = backend.fetch("key1").unwrap();
        assert_eq!(value, Some(json!({"a": 1})));

        let stats = backend.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_store_overwrites() {
        let backend = MemoryBackend::new(10);
        backend.store("key1", json!("old")).unwrap();
        backend.store("key1", json!("new")).unwrap();

        assert_eq!(backend.fetch("key1").unwrap(), Some(json!("new")));
        assert_eq!(backend.stats().size, 1);
    }

    #[test]
    fn test_null_value_is_present() {
        // Ausência cacheada é serializada como null; o backend deve
        // distinguir "null gravado" de "chave inexistente".
        let backend = MemoryBackend::new(10);
        backend.store("key1", Value::Null).unwrap();

        assert_eq!(backend.fetch("key1").unwrap(), Some(Value::Null));
        assert!(backend.fetch("key2").unwrap().is_none());
    }

    #[test]
    fn test_lru_eviction() {
        let backend = MemoryBackend::new(2);
        backend.store("key1", json!(1)).unwrap();
        backend.store("key2", json!(2)).unwrap();
        backend.store("key3", json!(3)).unwrap(); // Deve evictar key1

        assert!(backend.fetch("key1").unwrap().is_none()); // Evictado
        assert!(backend.fetch("key2").unwrap().is_some());
        assert!(backend.fetch("key3").unwrap().is_some());
    }

    #[test]
    fn test_clear() {
        let backend = MemoryBackend::new(10);
        backend.store("key1", json!(1)).unwrap();
        backend.store("key2", json!(2)).unwrap();

        backend.clear().unwrap();

        assert!(backend.fetch("key1").unwrap().is_none());
        assert_eq!(backend.stats().size, 0);
    }

    #[test]
    fn test_stats() {
        let backend = MemoryBackend::new(10);
        backend.store("key1", json!(1)).unwrap();

        backend.fetch("key1").unwrap(); // Hit
        backend.fetch("key2").unwrap(); // Miss
        backend.fetch("key1").unwrap(); // Hit

        let stats = backend.stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.666).abs() < 0.01);
    }

    #[test]
    fn test_zero_capacity_falls_back() {
        let backend = MemoryBackend::new(0);
        assert_eq!(backend.stats().capacity, 1000);
    }
}
