//! Drivers del pipeline: por registro y por lote.
//!
//! `ExpansionPipeline` guarda la lista ordenada de transformadores y la
//! valida al construirse: claves únicas, fases no decrecientes y, para cada
//! predicado que un transformador lee, todos sus escritores antes que él.
//! Así la dependencia vendedor → procurador/fiador es una propiedad
//! comprobada y no una convención.

use indexmap::IndexMap;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::config::ExpansionConfig;
use crate::errors::ExpansionError;
use crate::model::Record;
use crate::registry::standard_transformers;
use crate::transform::{Phase, RecordCtx, ShortcutTransformer};

#[derive(Debug)]
pub struct ExpansionPipeline {
    transformers: Vec<Box<dyn ShortcutTransformer>>,
    index: IndexMap<&'static str, usize>,
}

/// Fila del listado del registro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformerInfo {
    pub position: usize,
    pub key: &'static str,
    pub phase: String,
    pub writes: Vec<String>,
    pub reads: Vec<String>,
}

/// Forma de la entrada de un lote; la salida conserva la misma forma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionShape {
    Single,
    List,
    Container,
}

/// Elemento de la colección que no es un registro y se devolvió intacto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// Atajo que sigue presente tras la pasada (p.ej. polimórfico sin tipo
/// reconocido).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidualShortcut {
    pub index: usize,
    pub record: Option<String>,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub shape: CollectionShape,
    pub transformed: usize,
    pub skipped: Vec<SkippedRecord>,
    pub residual: Vec<ResidualShortcut>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub output: Value,
    pub report: BatchReport,
}

enum ItemOutcome {
    Transformed { value: Value, residual: Vec<ResidualShortcut> },
    Skipped { value: Value, reason: String },
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ExpansionPipeline {
    /// Construye un pipeline validando el orden declarado.
    pub fn new(transformers: Vec<Box<dyn ShortcutTransformer>>) -> Result<Self, ExpansionError> {
        let mut index = IndexMap::with_capacity(transformers.len());
        let mut previous = Phase::Naming;
        for (i, t) in transformers.iter().enumerate() {
            if index.insert(t.key(), i).is_some() {
                return Err(ExpansionError::DuplicateShortcut(t.key().to_string()));
            }
            if t.phase() < previous {
                return Err(ExpansionError::PhaseRegression { key: t.key().to_string(),
                                                             phase: t.phase(),
                                                             previous });
            }
            previous = t.phase();
        }
        for (i, reader) in transformers.iter().enumerate() {
            for read in reader.reads() {
                if let Some(writer) = transformers.iter()
                                                  .skip(i + 1)
                                                  .find(|w| w.writes().contains(&read))
                {
                    return Err(ExpansionError::OrderViolation { reader: reader.key().to_string(),
                                                                writer: writer.key().to_string(),
                                                                predicate: read.to_string() });
                }
            }
        }
        Ok(Self { transformers, index })
    }

    /// Pipeline con el catálogo estándar.
    pub fn standard() -> Result<Self, ExpansionError> {
        Self::new(standard_transformers())
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn shortcut_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.index.keys().copied()
    }

    pub fn transformer(&self, key: &str) -> Option<&dyn ShortcutTransformer> {
        self.position(key).map(|i| self.transformers[i].as_ref())
    }

    pub fn describe(&self) -> Vec<TransformerInfo> {
        self.transformers
            .iter()
            .enumerate()
            .map(|(position, t)| TransformerInfo { position,
                                                   key: t.key(),
                                                   phase: format!("{:?}", t.phase()),
                                                   writes: t.writes().iter().map(ToString::to_string).collect(),
                                                   reads: t.reads().iter().map(ToString::to_string).collect() })
            .collect()
    }

    /// Atajos registrados que siguen presentes en el registro.
    pub fn residual_keys(&self, record: &Record) -> Vec<&'static str> {
        self.shortcut_keys().filter(|k| record.contains(k)).collect()
    }

    /// Aplica todos los transformadores, una vez y en orden, a un registro.
    pub fn transform_record(&self, record: Record, config: &ExpansionConfig) -> Record {
        let ctx = RecordCtx::new(config, &record);
        debug!("expanding {} as {:?}", record.anchor(), ctx.kind);
        self.transformers
            .iter()
            .fold(record, |record, t| t.transform(record, &ctx))
    }

    /// Variante sobre un valor JSON que debe ser un objeto.
    pub fn transform_value(&self, value: Value, config: &ExpansionConfig) -> Result<Value, ExpansionError> {
        let record = Record::from_value(value)?;
        Ok(self.transform_record(record, config).into_value())
    }

    fn process_item(&self, index: usize, item: Value, config: &ExpansionConfig) -> ItemOutcome {
        match item {
            Value::Object(body) => {
                let record = self.transform_record(Record::from_node(body), config);
                let residual = self.residual_keys(&record)
                                   .into_iter()
                                   .map(|key| ResidualShortcut { index,
                                                                 record: record.id().map(str::to_string),
                                                                 key: key.to_string() })
                                   .collect();
                ItemOutcome::Transformed { value: record.into_value(),
                                           residual }
            }
            other => {
                let reason = format!("expected object, found {}", kind_of(&other));
                warn!("skipping element {}: {}", index, reason);
                ItemOutcome::Skipped { value: other, reason }
            }
        }
    }

    fn process_items(&self, items: Vec<Value>, config: &ExpansionConfig, report: &mut BatchReport) -> Vec<Value> {
        let outcomes: Vec<ItemOutcome> = if config.parallel {
            items.into_par_iter()
                 .enumerate()
                 .map(|(i, item)| self.process_item(i, item, config))
                 .collect()
        } else {
            items.into_iter()
                 .enumerate()
                 .map(|(i, item)| self.process_item(i, item, config))
                 .collect()
        };
        let mut output = Vec::with_capacity(outcomes.len());
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                ItemOutcome::Transformed { value, residual } => {
                    report.transformed += 1;
                    report.residual.extend(residual);
                    output.push(value);
                }
                ItemOutcome::Skipped { value, reason } => {
                    report.skipped.push(SkippedRecord { index, reason });
                    output.push(value);
                }
            }
        }
        output
    }

    /// Aplica el pipeline a un registro suelto, a una lista de registros o a
    /// un contenedor con la colección en `config.graph_field`, conservando la
    /// forma de la entrada. Los elementos que no son objetos se devuelven
    /// intactos y se anotan en el informe.
    pub fn transform_collection(&self, input: Value, config: &ExpansionConfig) -> Result<BatchOutcome, ExpansionError> {
        let (output, report) = match input {
            Value::Array(items) => {
                let mut report = Self::empty_report(CollectionShape::List);
                let output = self.process_items(items, config, &mut report);
                (Value::Array(output), report)
            }
            Value::Object(mut container) if container.get(&config.graph_field).is_some_and(Value::is_array) => {
                let mut report = Self::empty_report(CollectionShape::Container);
                let items = match container.remove(&config.graph_field) {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                let output = self.process_items(items, config, &mut report);
                container.insert(config.graph_field.clone(), Value::Array(output));
                (Value::Object(container), report)
            }
            Value::Object(body) => {
                let mut report = Self::empty_report(CollectionShape::Single);
                let mut output = self.process_items(vec![Value::Object(body)], config, &mut report);
                (output.pop().unwrap_or(Value::Null), report)
            }
            other => return Err(ExpansionError::UnsupportedShape(kind_of(&other).to_string())),
        };
        info!("batch ({:?}): {} transformed, {} skipped, {} residual shortcut(s)",
              report.shape,
              report.transformed,
              report.skipped.len(),
              report.residual.len());
        Ok(BatchOutcome { output, report })
    }

    fn empty_report(shape: CollectionShape) -> BatchReport {
        BatchReport { shape,
                      transformed: 0,
                      skipped: Vec::new(),
                      residual: Vec::new() }
    }
}
