//! Localização de artefatos-fonte para nomes.
//!
//! O rastreamento de frescor precisa saber qual arquivo define cada
//! nome. Essa capacidade é injetada pelo chamador através do trait
//! [`SourceLocator`], mantendo a camada de resolução desacoplada de
//! qualquer mecanismo específico de introspecção.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Trait para localizar o artefato-fonte que define um nome.
///
/// Toda falha de introspecção é mapeada para `None`, nunca para erro:
/// um nome sem arquivo associado (sintético, builtin) é tratado como
/// trivialmente fresco pela validação de frescor.
pub trait SourceLocator: Send + Sync {
    /// Retorna o caminho do arquivo que define `name`, se houver.
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Retorna o instante da última modificação do arquivo.
    ///
    /// A implementação padrão consulta o filesystem; `None` quando o
    /// arquivo não existe ou o mtime não pode ser lido.
    fn last_modified(&self, path: &Path) -> Option<DateTime<Utc>> {
        let modified = std::fs::metadata(path).ok()?.modified().ok()?;
        Some(DateTime::<Utc>::from(modified))
    }
}

/// Localizador baseado em um mapa explícito nome → arquivo.
#[derive(Debug, Default)]
pub struct MapLocator {
    locations: HashMap<String, PathBuf>,
}

impl MapLocator {
    /// Cria um localizador vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associa um nome a um arquivo.
    pub fn with<N: Into<String>, P: Into<PathBuf>>(mut self, name: N, path: P) -> Self {
        self.locations.insert(name.into(), path.into());
        self
    }

    /// Insere uma associação nome → arquivo.
    pub fn insert<N: Into<String>, P: Into<PathBuf>>(&mut self, name: N, path: P) {
        self.locations.insert(name.into(), path.into());
    }
}

impl SourceLocator for MapLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.locations.get(name).cloned()
    }
}

/// Localizador que nunca encontra um arquivo.
///
/// Útil quando nenhum nome tem artefato-fonte rastreável; com ele, todo
/// hit de cache é trivialmente fresco.
#[derive(Debug, Default)]
pub struct NullLocator;

impl SourceLocator for NullLocator {
    fn locate(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_map_locator() {
        let locator = MapLocator::new().with("app.mailer", "/src/mailer.rs");
        assert_eq!(
            locator.locate("app.mailer"),
            Some(PathBuf::from("/src/mailer.rs"))
        );
        assert!(locator.locate("app.logger").is_none());
    }

    #[test]
    fn test_null_locator() {
        assert!(NullLocator.locate("anything").is_none());
    }

    #[test]
    fn test_last_modified_for_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "conteúdo").unwrap();

        let locator = NullLocator;
        let modified = locator.last_modified(file.path());
        assert!(modified.is_some());
        assert!(modified.unwrap() <= Utc::now() + chrono::Duration::seconds(1));
    }

    #[test]
    fn test_last_modified_missing_file_is_none() {
        let locator = NullLocator;
        assert!(locator
            .last_modified(Path::new("/caminho/que/nao/existe"))
            .is_none());
    }
}
