//! notaria-core: motor de expansión de atajos (F1)
//!
//! Reescribe los atajos compactos de registros notariales (contratos,
//! personas, lugares, objetos) en estructuras completas del modelo destino
//! (adquisiciones, actividades, apelaciones, intervalos temporales).
//!
//! Piezas, de las hojas hacia arriba:
//! - `hashing`: JSON canónico y acuñado determinista de identificadores.
//! - `resolver`: acceso get-or-create a estructuras compartidas.
//! - `dispatch`: clasificación del tipo de documento.
//! - `transform`: familias de transformadores; `registry`: catálogo ordenado.
//! - `pipeline`: driver por registro y por lote.

pub mod config;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod transform;
pub mod vocabulary;

pub use config::{ExpansionConfig, SalesPriceProperty};
pub use dispatch::{classify, DocumentKind};
pub use errors::ExpansionError;
pub use hashing::{mint, mint_parts};
pub use model::Record;
pub use pipeline::{BatchOutcome, BatchReport, CollectionShape, ExpansionPipeline, ResidualShortcut, SkippedRecord,
                   TransformerInfo};
pub use resolver::SharedSlot;
pub use transform::{Expansion, Phase, RecordCtx, ShortcutTransformer};
pub use vocabulary::{Term, Vocabulary};
