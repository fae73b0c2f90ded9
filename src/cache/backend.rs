//! Contrato do backend de cache.

use serde_json::Value;

use crate::ResolvaResult;

/// Trait para backends de cache chave/valor.
///
/// O backend é um armazenamento opaco: as chaves já chegam namespaceadas
/// pela camada de resolução e os valores são JSON arbitrário. A única
/// garantia assumida é last-write-wins visível para fetches subsequentes
/// do mesmo processo; nenhuma atomicidade entre chamadores concorrentes
/// é adicionada por esta camada.
///
/// Falhas do backend se propagam intactas ao chamador; esta camada não
/// adiciona retries nem supressão.
pub trait CacheBackend: Send + Sync {
    /// Busca um valor. `None` indica chave nunca escrita.
    fn fetch(&self, key: &str) -> ResolvaResult<Option<Value>>;

    /// Grava um valor sob a chave, sobrescrevendo qualquer anterior.
    fn store(&self, key: &str, value: Value) -> ResolvaResult<()>;
}
