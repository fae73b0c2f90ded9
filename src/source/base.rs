//! Trait base para fontes de definição.

use std::collections::HashMap;

use crate::types::definition::Definition;
use crate::ResolvaResult;

/// Trait para fontes de resolução de definições.
///
/// Uma fonte computa os metadados de um nome por meios potencialmente
/// caros (introspecção, parsing de arquivos, varredura de anotações).
/// A resolução deve ser idempotente o suficiente para que cacheá-la
/// faça sentido.
///
/// `Ok(None)` é um resultado bem-sucedido: o nome não resolve. Um erro
/// nunca é interpretado como ausência pela camada de cache.
pub trait DefinitionSource: Send + Sync {
    /// Resolve os metadados para `name`.
    fn resolve(&self, name: &str) -> ResolvaResult<Option<Definition>>;
}

/// Fonte baseada em um mapa estático de definições.
///
/// Útil como raiz de composição simples e em testes.
#[derive(Debug, Default)]
pub struct StaticSource {
    definitions: HashMap<String, Definition>,
}

impl StaticSource {
    /// Cria uma fonte vazia.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona uma definição, indexada pelo próprio nome.
    pub fn with(mut self, definition: Definition) -> Self {
        self.definitions
            .insert(definition.name.clone(), definition);
        self
    }

    /// Insere uma definição.
    pub fn insert(&mut self, definition: Definition) {
        self.definitions
            .insert(definition.name.clone(), definition);
    }
}

impl DefinitionSource for StaticSource {
    fn resolve(&self, name: &str) -> ResolvaResult<Option<Definition>> {
        Ok(self.definitions.get(name).cloned())
    }
}
