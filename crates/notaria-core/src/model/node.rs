//! Utilidades sobre nodos JSON (`serde_json::Map`).
//!
//! Aquí vive la coerción permisiva de valores de atajo: cada elemento se
//! normaliza a una referencia tipada o a un literal, y lo que no encaja se
//! descarta devolviendo `None`.

use serde_json::{json, Map, Value};

use crate::constants::{class, ID, ID_ALT, TYPE, TYPE_ALT};
use crate::dispatch::local_name;

pub type Node = Map<String, Value>;

/// Identificador del nodo (`id` o `@id`), si es un string no vacío.
pub fn node_id(node: &Node) -> Option<&str> {
    node.get(ID)
        .or_else(|| node.get(ID_ALT))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Tipos declarados del nodo; acepta un string o una lista de strings.
pub fn node_types(node: &Node) -> Vec<&str> {
    match node.get(TYPE).or_else(|| node.get(TYPE_ALT)) {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Compara por nombre local: `crm:E8_Acquisition` es `E8_Acquisition`.
pub fn has_type(node: &Node, class: &str) -> bool {
    let wanted = local_name(class);
    node_types(node).iter().any(|t| local_name(t) == wanted)
}

/// Sin tipo declarado o con tipos vacíos.
pub fn lacks_type(node: &Node) -> bool {
    node_types(node).iter().all(|t| t.trim().is_empty())
}

pub fn new_node(id: impl Into<String>, class: &str) -> Node {
    let mut node = Node::new();
    node.insert(ID.to_string(), Value::String(id.into()));
    node.insert(TYPE.to_string(), Value::String(class.to_string()));
    node
}

/// Referencia a un término de vocabulario.
pub fn type_ref(term: &str) -> Value {
    json!({ ID: term, TYPE: class::TYPE })
}

/// Elementos de un valor de atajo en orden de entrada: una lista se recorre,
/// `null` no aporta nada y cualquier otro valor cuenta como un elemento.
pub fn elements(raw: &Value) -> Vec<&Value> {
    match raw {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Normaliza un elemento a un nodo con `id` y `type`.
///
/// Un string no vacío se convierte en referencia del tipo `default_class`; un
/// objeto con identificador se conserva y sólo recibe `default_class` si no
/// declara tipo propio. Todo lo demás devuelve `None`.
pub fn normalize_reference(element: &Value, default_class: &str) -> Option<Node> {
    match element {
        Value::String(s) if !s.trim().is_empty() => Some(new_node(s.trim(), default_class)),
        Value::Object(obj) => {
            node_id(obj)?;
            let mut node = obj.clone();
            if lacks_type(&node) {
                node.shift_remove(TYPE_ALT);
                node.insert(TYPE.to_string(), Value::String(default_class.to_string()));
            }
            Some(node)
        }
        _ => None,
    }
}

/// Lee un literal: strings no vacíos, números, o un objeto `{"@value": ..}`.
pub fn literal(element: &Value) -> Option<String> {
    match element {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(obj) => obj.get("@value").or_else(|| obj.get("value")).and_then(literal),
        _ => None,
    }
}

/// Lista bajo `predicate`, creándola si falta; un escalar previo pasa a ser
/// su primer elemento.
pub fn list_mut<'n>(node: &'n mut Node, predicate: &str) -> &'n mut Vec<Value> {
    let entry = node.entry(predicate.to_string()).or_insert(Value::Null);
    if !entry.is_array() {
        let previous = entry.take();
        *entry = Value::Array(if previous.is_null() { Vec::new() } else { vec![previous] });
    }
    match entry {
        Value::Array(items) => items,
        _ => unreachable!("entry normalised to an array above"),
    }
}

fn same_element(a: &Value, b: &Value) -> bool {
    match (a.as_object().and_then(node_id), b.as_object().and_then(node_id)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Añade `value` a la lista `predicate` salvo que ya exista un elemento con
/// el mismo identificador (o el mismo literal). Devuelve `true` si se añadió.
pub fn push_unique(node: &mut Node, predicate: &str, value: Value) -> bool {
    let items = list_mut(node, predicate);
    if items.iter().any(|existing| same_element(existing, &value)) {
        return false;
    }
    items.push(value);
    true
}
