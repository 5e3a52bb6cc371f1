//! Frontera de exportación: lee un fichero JSON (registro, lista o
//! contenedor), aplica el pipeline y escribe el resultado con la misma forma.
//!
//! Todo fallo de lectura o parseo ocurre antes de escribir, así que una
//! exportación fallida no deja salida parcial.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;
use notaria_core::{BatchReport, ExpansionConfig, ExpansionPipeline};
use serde_json::Value;

use crate::errors::ExportError;

/// Lee y parsea el fichero de entrada.
pub fn read_input(path: &Path) -> Result<Value, ExportError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
                                           ErrorKind::NotFound => ExportError::NotFound(path.to_path_buf()),
                                           _ => ExportError::Io(e),
                                       })?;
    serde_json::from_str(&text).map_err(|source| ExportError::Malformed { path: path.to_path_buf(),
                                                                          source })
}

/// Exporta con un pipeline ya construido.
pub fn export_with(pipeline: &ExpansionPipeline,
                   input: &Path,
                   output: &Path,
                   config: &ExpansionConfig)
                   -> Result<BatchReport, ExportError> {
    let value = read_input(input)?;
    let outcome = pipeline.transform_collection(value, config)?;
    let mut bytes = serde_json::to_vec_pretty(&outcome.output).map_err(std::io::Error::from)?;
    bytes.push(b'\n');
    fs::write(output, bytes)?;
    info!("{} -> {}: {} record(s) expanded",
          input.display(),
          output.display(),
          outcome.report.transformed);
    Ok(outcome.report)
}

/// Exporta con el catálogo estándar de transformadores.
pub fn export_file(input: &Path, output: &Path, config: &ExpansionConfig) -> Result<BatchReport, ExportError> {
    let pipeline = ExpansionPipeline::standard()?;
    export_with(&pipeline, input, output, config)
}
