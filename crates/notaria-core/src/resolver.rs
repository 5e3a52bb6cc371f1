//! Resolución de sub-estructuras compartidas (get-or-create).
//!
//! Varias transformaciones extienden el mismo nodo: vendedor, comprador,
//! fiador y precio trabajan sobre una única adquisición por registro. Cada
//! tipo de estructura tiene una ranura fija (`SharedSlot`): predicado en el
//! anfitrión, clase y sufijo de acuñado. Si el predicado es exclusivo de la
//! ranura se reutiliza su primer nodo, sea cual sea su tipo. En un predicado
//! compartido (`P70_documents`) se reutiliza el primer nodo cuya clase
//! coincide por nombre local o, en su defecto, el primer nodo sin tipo. Nunca
//! conviven dos estructuras del mismo tipo en un registro.

use serde_json::Value;

use crate::config::{ExpansionConfig, SalesPriceProperty};
use crate::constants::{class, predicate, ID, TYPE, TYPE_ALT};
use crate::dispatch::DocumentKind;
use crate::hashing::mint;
use crate::model::{has_type, lacks_type, list_mut, new_node, node_id, push_unique, type_ref, Node, Record};

/// Ranuras de estructura compartida colgadas directamente del registro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SharedSlot {
    Creation,
    Acquisition,
    Activity,
    Birth,
    Death,
}

impl SharedSlot {
    pub const ALL: [SharedSlot; 5] = [Self::Creation, Self::Acquisition, Self::Activity, Self::Birth, Self::Death];

    pub fn spec(self) -> SlotSpec<'static> {
        match self {
            Self::Creation => SlotSpec::new(predicate::WAS_CREATED_BY, class::CREATION, "creation"),
            Self::Acquisition => SlotSpec::new(predicate::DOCUMENTS, class::ACQUISITION, "acquisition").shared(),
            Self::Activity => SlotSpec::new(predicate::DOCUMENTS, class::ACTIVITY, "activity").shared(),
            Self::Birth => SlotSpec::new(predicate::WAS_BORN, class::BIRTH, "birth"),
            Self::Death => SlotSpec::new(predicate::DIED_IN, class::DEATH, "death"),
        }
    }

    /// Las estructuras documentales llevan el tipo de documento del registro.
    fn carries_document_kind(self) -> bool {
        matches!(self, Self::Acquisition | Self::Activity)
    }
}

/// Predicado, clase y sufijo de acuñado de una ranura.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec<'a> {
    pub predicate: &'a str,
    pub class: &'a str,
    pub suffix: &'a str,
    /// Otras estructuras comparten el predicado; la clase decide.
    pub shared: bool,
}

impl<'a> SlotSpec<'a> {
    pub const fn new(predicate: &'a str, class: &'a str, suffix: &'a str) -> Self {
        Self { predicate,
               class,
               suffix,
               shared: false }
    }

    #[must_use]
    pub const fn shared(mut self) -> Self {
        self.shared = true;
        self
    }

    pub fn time_span() -> SlotSpec<'static> {
        SlotSpec::new(predicate::HAS_TIME_SPAN, class::TIME_SPAN, "time-span")
    }

    /// `P43_has_dimension` admite otras dimensiones, así que se trata como
    /// compartido.
    pub fn sales_price(config: &ExpansionConfig) -> SlotSpec<'static> {
        let spec = SlotSpec::new(config.sales_price_property.predicate(), class::MONETARY_AMOUNT, "sales-price");
        match config.sales_price_property {
            SalesPriceProperty::HadSalesPrice => spec,
            SalesPriceProperty::HasDimension => spec.shared(),
        }
    }
}

/// Posición del nodo que la ranura reutiliza dentro de `items`.
fn claimed(items: &[Value], spec: &SlotSpec<'_>) -> Option<usize> {
    let mut objects = items.iter()
                           .enumerate()
                           .filter_map(|(i, v)| v.as_object().map(|n| (i, n)));
    if !spec.shared {
        return objects.next().map(|(i, _)| i);
    }
    let mut untyped = None;
    for (i, node) in objects {
        if has_type(node, spec.class) {
            return Some(i);
        }
        if untyped.is_none() && lacks_type(node) {
            untyped = Some(i);
        }
    }
    untyped
}

/// Devuelve el nodo reutilizable bajo `host[spec.predicate]` o crea uno con
/// identificador `mint(host_id, spec.suffix)`. Un nodo reutilizado sin tipo
/// recibe `spec.class`. El booleano indica si el nodo es nuevo.
pub fn get_or_create<'n>(host: &'n mut Node, host_id: &str, spec: &SlotSpec<'_>) -> (&'n mut Node, bool) {
    let items = list_mut(host, spec.predicate);
    let existing = claimed(items, spec);
    let created = existing.is_none();
    let index = match existing {
        Some(i) => i,
        None => {
            items.push(Value::Object(new_node(mint(host_id, spec.suffix), spec.class)));
            items.len() - 1
        }
    };
    let node = match &mut items[index] {
        Value::Object(node) => node,
        _ => unreachable!("slot position only matches objects"),
    };
    if node_id(node).is_none() {
        node.insert(ID.to_string(), Value::String(mint(host_id, spec.suffix)));
    }
    if lacks_type(node) {
        node.shift_remove(TYPE_ALT);
        node.insert(TYPE.to_string(), Value::String(spec.class.to_string()));
    }
    (node, created)
}

/// Nodo anidado (intervalo temporal, importe) bajo un nodo ya resuelto; su
/// identificador se acuña a partir del identificador del propio nodo.
pub fn nested<'n>(host: &'n mut Node, fallback_id: &str, spec: &SlotSpec<'_>) -> &'n mut Node {
    let host_id = node_id(host).unwrap_or(fallback_id).to_string();
    get_or_create(host, &host_id, spec).0
}

impl Record {
    /// Acceso get-or-create a una ranura compartida del registro.
    pub fn slot(&mut self, slot: SharedSlot, config: &ExpansionConfig, kind: DocumentKind) -> &mut Node {
        let (anchor, body) = self.parts_mut();
        let anchor = anchor.to_string();
        let (node, created) = get_or_create(body, &anchor, &slot.spec());
        if created && slot.carries_document_kind() {
            if let Some(term) = config.vocabulary.document_kind(kind) {
                push_unique(node, predicate::HAS_TYPE, type_ref(term));
            }
        }
        node
    }

    /// Nodo de la ranura si ya existe, sin crearlo.
    pub fn existing_slot(&self, slot: SharedSlot) -> Option<&Node> {
        let spec = slot.spec();
        let items = match self.get(spec.predicate)? {
            Value::Array(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };
        claimed(items, &spec).and_then(|i| items[i].as_object())
    }
}
