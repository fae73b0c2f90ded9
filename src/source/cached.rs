//! Decorador de cache para fontes de definição.

use std::sync::Arc;

use chrono::Utc;

use super::base::DefinitionSource;
use super::freshness;
use crate::cache::{CacheBackend, MemoryBackend};
use crate::locate::SourceLocator;
use crate::types::config::{Config, FreshnessMode};
use crate::types::definition::Definition;
use crate::ResolvaResult;

/// Prefixo das chaves de cache, para evitar conflitos com outros
/// sistemas usando o mesmo backend.
pub const CACHE_PREFIX: &str = "DI\\Definition";

/// Deriva a chave de cache para um nome.
pub(crate) fn cache_key(name: &str) -> String {
    format!("{}{}", CACHE_PREFIX, name)
}

/// Cacheia os resultados de outra fonte de definições.
///
/// O decorador expõe o mesmo contrato de resolução da fonte interna,
/// consultando primeiro o backend e recorrendo à fonte em caso de miss
/// ou de entrada obsoleta. Em modo [`FreshnessMode::TrackFreshness`],
/// cada hit é validado contra o mtime do arquivo que define o nome.
///
/// Nenhuma coordenação de concorrência é feita aqui: dois chamadores
/// disputando o mesmo nome não-cacheado podem ambos invocar a fonte
/// interna e ambos escrever no backend. As garantias do backend são
/// herdadas, não ampliadas; quem precisar de de-duplicação (lock por
/// chave, single-flight) deve compô-la por fora.
pub struct CachedDefinitionSource {
    source: Arc<dyn DefinitionSource>,
    cache: Arc<dyn CacheBackend>,
    locator: Arc<dyn SourceLocator>,
    mode: FreshnessMode,
}

impl CachedDefinitionSource {
    /// Cria o decorador em modo [`FreshnessMode::TrustCache`].
    pub fn new(
        source: Arc<dyn DefinitionSource>,
        cache: Arc<dyn CacheBackend>,
        locator: Arc<dyn SourceLocator>,
    ) -> Self {
        Self {
            source,
            cache,
            locator,
            mode: FreshnessMode::TrustCache,
        }
    }

    /// Define o modo de frescor.
    pub fn with_mode(mut self, mode: FreshnessMode) -> Self {
        self.mode = mode;
        self
    }

    /// Cria o decorador a partir da configuração, com um
    /// [`MemoryBackend`] dimensionado por ela.
    pub fn from_config(
        source: Arc<dyn DefinitionSource>,
        locator: Arc<dyn SourceLocator>,
        config: &Config,
    ) -> Self {
        Self {
            source,
            cache: Arc::new(MemoryBackend::new(config.cache.capacity)),
            locator,
            mode: config.freshness.mode,
        }
    }

    /// Resolve os metadados para `name`, consultando o cache primeiro.
    ///
    /// Ausência (`Ok(None)`) é sempre persistida, evitando repetir
    /// lookups caros que falham; definições presentes só são persistidas
    /// quando [`Definition::is_cacheable`] é verdadeiro. Erros do
    /// backend e da fonte interna se propagam intactos.
    pub fn resolve(&self, name: &str) -> ResolvaResult<Option<Definition>> {
        let key = cache_key(name);

        if let Some(value) = self.cache.fetch(&key)? {
            let fresh = match self.mode {
                FreshnessMode::TrustCache => true,
                FreshnessMode::TrackFreshness => freshness::is_fresh(
                    self.cache.as_ref(),
                    self.locator.as_ref(),
                    &key,
                    name,
                )?,
            };

            if fresh {
                tracing::debug!(name, "cache hit");
                let cached: Option<Definition> = serde_json::from_value(value)?;
                return Ok(cached);
            }
            tracing::debug!(name, "entrada obsoleta, recomputando");
        }

        let result = self.source.resolve(name)?;

        match &result {
            Some(definition) if !definition.is_cacheable() => {
                tracing::debug!(name, "definição não-cacheável, não persistida");
            }
            _ => self.persist(&key, &result)?,
        }

        Ok(result)
    }

    /// Grava a entrada e, em modo de rastreamento, o marcador de frescor.
    fn persist(&self, key: &str, result: &Option<Definition>) -> ResolvaResult<()> {
        self.cache.store(key, serde_json::to_value(result)?)?;
        if self.mode == FreshnessMode::TrackFreshness {
            let marker = serde_json::to_value(Utc::now())?;
            self.cache.store(&freshness::marker_key(key), marker)?;
        }
        Ok(())
    }

    /// Retorna o modo de frescor atual.
    pub fn mode(&self) -> FreshnessMode {
        self.mode
    }

    /// Altera o modo de frescor.
    pub fn set_mode(&mut self, mode: FreshnessMode) {
        self.mode = mode;
    }

    /// Retorna a fonte interna.
    pub fn source(&self) -> Arc<dyn DefinitionSource> {
        Arc::clone(&self.source)
    }

    /// Substitui a fonte interna.
    pub fn set_source(&mut self, source: Arc<dyn DefinitionSource>) {
        self.source = source;
    }

    /// Retorna o backend de cache.
    pub fn cache(&self) -> Arc<dyn CacheBackend> {
        Arc::clone(&self.cache)
    }

    /// Substitui o backend de cache.
    pub fn set_cache(&mut self, cache: Arc<dyn CacheBackend>) {
        self.cache = cache;
    }

    /// Substitui o localizador de fontes.
    pub fn set_locator(&mut self, locator: Arc<dyn SourceLocator>) {
        self.locator = locator;
    }
}
