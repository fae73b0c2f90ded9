//! Tipos de erro do Resolva.

use thiserror::Error;

/// Tipo de resultado padrão do Resolva.
pub type ResolvaResult<T> = Result<T, ResolvaError>;

/// Erros possíveis no Resolva.
#[derive(Error, Debug)]
pub enum ResolvaError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backend de cache falhou: {0}")]
    Backend(String),

    #[error("Fonte de definições falhou ao resolver '{0}': {1}")]
    Resolution(String, String),

    #[error("{0}")]
    Other(String),
}

impl ResolvaError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Cria um erro de backend de cache.
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Self::Backend(msg.into())
    }

    /// Cria um erro de resolução para o nome informado.
    pub fn resolution<N: Into<String>, S: Into<String>>(name: N, msg: S) -> Self {
        Self::Resolution(name.into(), msg.into())
    }
}
