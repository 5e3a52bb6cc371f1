//! `Record`: un registro (contrato, persona, lugar, objeto) en tránsito por el
//! pipeline.
//!
//! El registro se mueve por valor a través de los transformadores; cada uno
//! recibe la propiedad exclusiva y la devuelve, de modo que los efectos
//! quedan confinados a este registro.

use serde_json::Value;

use super::node::{node_id, node_types, push_unique, Node};
use crate::dispatch::{classify, DocumentKind};
use crate::errors::ExpansionError;
use crate::hashing::blank_anchor;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identificador usado como padre al acuñar: el `id` del registro o, si
    /// falta, un ancla derivada de su contenido de entrada.
    anchor: String,
    body: Node,
}

impl Record {
    pub fn from_value(value: Value) -> Result<Self, ExpansionError> {
        match value {
            Value::Object(body) => Ok(Self::from_node(body)),
            Value::Array(_) => Err(ExpansionError::NotARecord("array".into())),
            Value::String(_) => Err(ExpansionError::NotARecord("string".into())),
            Value::Number(_) => Err(ExpansionError::NotARecord("number".into())),
            Value::Bool(_) => Err(ExpansionError::NotARecord("boolean".into())),
            Value::Null => Err(ExpansionError::NotARecord("null".into())),
        }
    }

    pub fn from_node(body: Node) -> Self {
        let anchor = match node_id(&body) {
            Some(id) => id.to_string(),
            None => blank_anchor(&Value::Object(body.clone())),
        };
        Self { anchor, body }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn id(&self) -> Option<&str> {
        node_id(&self.body)
    }

    pub fn types(&self) -> Vec<&str> {
        node_types(&self.body)
    }

    /// Clase de documento declarada por el campo de tipo.
    pub fn kind(&self) -> DocumentKind {
        classify(self.types())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.body.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Retira un predicado del registro y devuelve su valor. El resto de
    /// claves conserva su orden.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.body.shift_remove(key)
    }

    /// Añade un valor a un predicado de lista directamente sobre el registro.
    pub fn push(&mut self, predicate: &str, value: Value) -> bool {
        push_unique(&mut self.body, predicate, value)
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    /// Acceso mutable al cuerpo junto con el ancla, para el resolvedor de
    /// sub-estructuras.
    pub(crate) fn parts_mut(&mut self) -> (&str, &mut Node) {
        (&self.anchor, &mut self.body)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.body)
    }
}
