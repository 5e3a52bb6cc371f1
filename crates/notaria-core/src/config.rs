//! Configuración del motor.
//!
//! Sólo `include_internal_annotations` cambia el comportamiento de un
//! transformador; el resto afecta a la forma de la salida (propiedad del
//! precio de venta, vocabulario) o al driver por lotes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{predicate, DEFAULT_GRAPH_FIELD};
use crate::vocabulary::Vocabulary;

/// Propiedad que enlaza la adquisición con su importe monetario.
///
/// Las dos lecturas del modelo discrepan: `P179_had_sales_price` es la
/// propiedad de compra de CRM 7, `P43_has_dimension` es la que usaban los
/// ficheros de referencia antiguos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesPriceProperty {
    #[default]
    HadSalesPrice,
    HasDimension,
}

impl SalesPriceProperty {
    pub fn predicate(self) -> &'static str {
        match self {
            Self::HadSalesPrice => predicate::HAD_SALES_PRICE,
            Self::HasDimension => predicate::HAS_DIMENSION,
        }
    }
}

impl FromStr for SalesPriceProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "had_sales_price" | "p179" | "p179_had_sales_price" => Ok(Self::HadSalesPrice),
            "has_dimension" | "p43" | "p43_has_dimension" => Ok(Self::HasDimension),
            other => Err(format!("unknown sales price property: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Expande las notas editoriales/internas; si es `false` se eliminan.
    pub include_internal_annotations: bool,
    /// Campo que contiene la colección cuando la entrada es un contenedor.
    pub graph_field: String,
    pub sales_price_property: SalesPriceProperty,
    /// Procesa los registros de un lote en paralelo (rayon).
    pub parallel: bool,
    pub vocabulary: Vocabulary,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self { include_internal_annotations: false,
               graph_field: DEFAULT_GRAPH_FIELD.to_string(),
               sales_price_property: SalesPriceProperty::default(),
               parallel: true,
               vocabulary: Vocabulary::default() }
    }
}

impl ExpansionConfig {
    #[must_use]
    pub fn with_internal_annotations(mut self, include: bool) -> Self {
        self.include_internal_annotations = include;
        self
    }

    #[must_use]
    pub fn with_sales_price_property(mut self, property: SalesPriceProperty) -> Self {
        self.sales_price_property = property;
        self
    }

    #[must_use]
    pub fn with_graph_field(mut self, field: impl Into<String>) -> Self {
        self.graph_field = field.into();
        self
    }

    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
