//! Errores de la frontera de exportación (fichero → pipeline → fichero).

pub mod export_error;

pub use export_error::ExportError;
