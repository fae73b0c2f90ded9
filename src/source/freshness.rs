//! Validação de frescor de entradas de cache.

use chrono::{DateTime, Utc};

use crate::cache::CacheBackend;
use crate::locate::SourceLocator;
use crate::ResolvaResult;

/// Prefixo que distingue marcadores de frescor das entradas.
const MARKER_PREFIX: &str = "[C]";

/// Deriva a chave do marcador de frescor a partir da chave da entrada.
pub(crate) fn marker_key(cache_key: &str) -> String {
    format!("{}{}", MARKER_PREFIX, cache_key)
}

/// Decide se a entrada cacheada para `name` ainda é confiável.
///
/// Regras:
/// - nome sem arquivo associado: trivialmente fresco (nada pode tê-lo
///   invalidado);
/// - mtime ilegível: trivialmente fresco (falha de introspecção nunca
///   vira erro);
/// - marcador ausente: obsoleto;
/// - caso contrário, fresco sse `marcador >= mtime` (igualdade conta
///   como fresco).
///
/// A checagem é advisória e best-effort: resolução de timestamps do
/// filesystem, skew de relógio e definições montadas de múltiplos
/// arquivos são limitações conhecidas e não tratadas.
pub(crate) fn is_fresh(
    cache: &dyn CacheBackend,
    locator: &dyn SourceLocator,
    cache_key: &str,
    name: &str,
) -> ResolvaResult<bool> {
    let path = match locator.locate(name) {
        Some(path) => path,
        None => return Ok(true),
    };

    let modified = match locator.last_modified(&path) {
        Some(modified) => modified,
        None => return Ok(true),
    };

    let marker = match cache.fetch(&marker_key(cache_key))? {
        Some(value) => value,
        None => return Ok(false),
    };

    let written_at: DateTime<Utc> = serde_json::from_value(marker)?;
    Ok(written_at >= modified)
}
