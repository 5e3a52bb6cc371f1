//! notaria-expand
//!
//! Librería de exportación sobre `notaria-core`:
//! - `config` traduce el entorno (.env) a un `ExpansionConfig`.
//! - `export` lee un fichero, aplica el pipeline y escribe el resultado.
//! - `errors` define los fallos a nivel de fichero y sus códigos de salida.
//!
//! La usa el binario `notaria` (crate `notaria-cli`).

pub mod config;
pub mod errors;
pub mod export;

pub use config::load_config;
pub use errors::ExportError;
pub use export::{export_file, export_with, read_input};
