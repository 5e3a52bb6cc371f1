//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez en `CONFIG` y las traduce a
//! un `ExpansionConfig` del motor. Los valores inválidos se informan como
//! `ExportError::Config` en lugar de abortar.
use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use notaria_core::{ExpansionConfig, SalesPriceProperty, Vocabulary};

use crate::errors::ExportError;

pub const ENV_INCLUDE_INTERNAL_NOTES: &str = "NOTARIA_INCLUDE_INTERNAL_NOTES";
pub const ENV_GRAPH_FIELD: &str = "NOTARIA_GRAPH_FIELD";
pub const ENV_SALES_PRICE_PROPERTY: &str = "NOTARIA_SALES_PRICE_PROPERTY";
pub const ENV_PARALLEL: &str = "NOTARIA_PARALLEL";
pub const ENV_VOCABULARY_FILE: &str = "NOTARIA_VOCABULARY_FILE";

/// Valores crudos del entorno, sin interpretar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub include_internal_notes: Option<String>,
    pub graph_field: Option<String>,
    pub sales_price_property: Option<String>,
    pub parallel: Option<String>,
    pub vocabulary_file: Option<PathBuf>,
}

/// Instancia global perezosa, evaluada una sola vez (tras leer `.env`).
pub static CONFIG: Lazy<EnvSettings> = Lazy::new(|| {
    dotenvy::dotenv().ok();
    EnvSettings::from_lookup(|key| env::var(key).ok())
});

fn parse_flag(key: &str, value: &str) -> Result<bool, ExportError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ExportError::Config(format!("{key}: valor booleano inválido '{other}'"))),
    }
}

impl EnvSettings {
    /// Lee las variables con una función de búsqueda arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        Self { include_internal_notes: lookup(ENV_INCLUDE_INTERNAL_NOTES),
               graph_field: lookup(ENV_GRAPH_FIELD).filter(|f| !f.trim().is_empty()),
               sales_price_property: lookup(ENV_SALES_PRICE_PROPERTY),
               parallel: lookup(ENV_PARALLEL),
               vocabulary_file: lookup(ENV_VOCABULARY_FILE).filter(|p| !p.trim().is_empty())
                                                           .map(PathBuf::from) }
    }

    /// Construye la configuración del motor partiendo de los valores por
    /// defecto.
    pub fn to_config(&self) -> Result<ExpansionConfig, ExportError> {
        let mut config = ExpansionConfig::default();
        if let Some(v) = &self.include_internal_notes {
            config.include_internal_annotations = parse_flag(ENV_INCLUDE_INTERNAL_NOTES, v)?;
        }
        if let Some(field) = &self.graph_field {
            config.graph_field = field.trim().to_string();
        }
        if let Some(v) = &self.sales_price_property {
            config.sales_price_property = v.parse::<SalesPriceProperty>()
                                           .map_err(|e| ExportError::Config(format!("{ENV_SALES_PRICE_PROPERTY}: {e}")))?;
        }
        if let Some(v) = &self.parallel {
            config.parallel = parse_flag(ENV_PARALLEL, v)?;
        }
        if let Some(path) = &self.vocabulary_file {
            config.vocabulary = load_vocabulary(path)?;
        }
        Ok(config)
    }
}

/// Sustituciones de términos de vocabulario desde un fichero JSON; los
/// términos ausentes conservan su valor por defecto.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, ExportError> {
    let invalid = |e: &dyn std::fmt::Display| ExportError::Config(format!("{ENV_VOCABULARY_FILE} {}: {e}", path.display()));
    let text = fs::read_to_string(path).map_err(|e| invalid(&e))?;
    serde_json::from_str(&text).map_err(|e| invalid(&e))
}

/// Carga `.env` (una sola vez) y fija las variables del proceso. El binario
/// la llama antes de inicializar el logging para que `RUST_LOG` pueda venir
/// del fichero.
pub fn init_env() {
    Lazy::force(&CONFIG);
}

/// Configuración del motor según el entorno del proceso.
pub fn load_config() -> Result<ExpansionConfig, ExportError> {
    CONFIG.to_config()
}
