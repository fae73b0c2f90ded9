//! Definição resolvida para um nome.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadados resolvidos para um nome.
///
/// Uma definição é imutável e serializável: o conteúdo em `metadata` é
/// opaco para a camada de cache. O produtor decide se a definição pode
/// ser persistida através do campo `cacheable`.
///
/// A ausência de definição (nome que não resolve) é representada como
/// `Option<Definition> = None` pelas fontes, e é um resultado válido e
/// cacheável por si só.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Definition {
    /// Nome resolvido.
    pub name: String,

    /// Metadados opacos produzidos pela fonte.
    #[serde(default)]
    pub metadata: Value,

    /// Se a definição pode ser persistida em cache.
    cacheable: bool,
}

impl Definition {
    /// Cria uma nova definição cacheável, sem metadados.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            metadata: Value::Null,
            cacheable: true,
        }
    }

    /// Define os metadados.
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// Marca a definição como não-cacheável.
    ///
    /// Definições não-cacheáveis são retornadas normalmente, mas nunca
    /// escritas no backend.
    pub fn non_cacheable(mut self) -> Self {
        self.cacheable = false;
        self
    }

    /// Indica se a definição pode ser persistida em cache.
    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }
}
