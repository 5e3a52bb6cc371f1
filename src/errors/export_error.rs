use std::path::PathBuf;

use notaria_core::ExpansionError;
use thiserror::Error;

/// Fallos a nivel de fichero. Cualquiera de ellos aborta la exportación sin
/// escribir salida.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Fichero de entrada no encontrado: {0}")]
    NotFound(PathBuf),
    #[error("JSON mal formado en {path}: {source}")]
    Malformed { path: PathBuf,
                #[source]
                source: serde_json::Error },
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de expansión: {0}")]
    Expansion(#[from] ExpansionError),
    #[error("Error de configuración: {0}")]
    Config(String),
}

impl ExportError {
    /// Código de salida del proceso para este fallo.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::Config(_) => 2,
            ExportError::Malformed { .. } => 3,
            ExportError::NotFound(_) => 4,
            ExportError::Io(_) | ExportError::Expansion(_) => 5,
        }
    }
}
