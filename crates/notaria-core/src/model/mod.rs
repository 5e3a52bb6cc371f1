//! Modelo de datos: registros como bolsas de propiedades JSON y utilidades
//! para leer y extender nodos expandidos.

pub mod node;
pub mod record;

pub use node::{elements, has_type, lacks_type, list_mut, literal, new_node, node_id, node_types, normalize_reference,
               push_unique, type_ref, Node};
pub use record::Record;
