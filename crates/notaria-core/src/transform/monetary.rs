//! Importe y moneda de la venta.
//!
//! Ambos extienden el mismo nodo `E97_Monetary_Amount` colgado de la
//! adquisición; el primero en correr lo crea y el segundo lo completa, así que
//! el resultado no depende del orden entre ellos.

use log::debug;
use serde_json::{Number, Value};

use super::{Expansion, Host, Phase, RecordCtx, ShortcutTransformer, Target};
use crate::constants::{class, predicate};
use crate::model::{elements, literal, normalize_reference, push_unique, Node, Record};
use crate::resolver::{nested, SharedSlot, SlotSpec};

fn sales_price<'r>(record: &'r mut Record, ctx: &RecordCtx<'_>) -> &'r mut Node {
    let anchor = record.anchor().to_string();
    let acquisition = record.slot(SharedSlot::Acquisition, ctx.config, ctx.kind);
    nested(acquisition, &anchor, &SlotSpec::sales_price(ctx.config))
}

fn monetary_writes(predicate: &'static str) -> Vec<Target> {
    vec![Target::on(Host::Slot(SharedSlot::Acquisition), predicate::HAD_SALES_PRICE),
         Target::on(Host::Slot(SharedSlot::Acquisition), predicate::HAS_DIMENSION),
         Target::on(Host::SalesPrice, predicate)]
}

/// Número JSON a partir de un literal: entero si cabe, si no decimal finito.
pub fn parse_amount(text: &str) -> Option<Number> {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::from(n));
    }
    text.parse::<f64>().ok().filter(|f| f.is_finite()).and_then(Number::from_f64)
}

#[derive(Debug, Clone)]
pub struct AmountShortcut {
    key: &'static str,
}

impl AmountShortcut {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl ShortcutTransformer for AmountShortcut {
    fn key(&self) -> &'static str {
        self.key
    }

    fn phase(&self) -> Phase {
        Phase::Monetary
    }

    fn writes(&self) -> Vec<Target> {
        monetary_writes(predicate::HAS_AMOUNT)
    }

    /// `P181_has_amount` es univaluado: gana el primer importe válido y los
    /// demás se ignoran sin contarse como mal formados.
    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion {
        let amounts: Vec<Number> = elements(raw).into_iter()
                                                .filter_map(literal)
                                                .filter_map(|t| parse_amount(&t))
                                                .collect();
        let Some(first) = amounts.first().cloned() else {
            return Expansion::Applied(0);
        };
        if amounts.len() > 1 {
            debug!("{}: {} extra amount(s) ignored in {}", self.key, amounts.len() - 1, record.anchor());
        }
        sales_price(record, ctx).insert(predicate::HAS_AMOUNT.to_string(), Value::Number(first));
        Expansion::Applied(amounts.len())
    }
}

#[derive(Debug, Clone)]
pub struct CurrencyShortcut {
    key: &'static str,
}

impl CurrencyShortcut {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl ShortcutTransformer for CurrencyShortcut {
    fn key(&self) -> &'static str {
        self.key
    }

    fn phase(&self) -> Phase {
        Phase::Monetary
    }

    fn writes(&self) -> Vec<Target> {
        monetary_writes(predicate::HAS_CURRENCY)
    }

    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion {
        let currencies: Vec<Node> = elements(raw).into_iter()
                                                 .filter_map(|e| normalize_reference(e, class::CURRENCY))
                                                 .collect();
        if currencies.is_empty() {
            return Expansion::Applied(0);
        }
        let accepted = currencies.len();
        let price = sales_price(record, ctx);
        for currency in currencies {
            push_unique(price, predicate::HAS_CURRENCY, Value::Object(currency));
        }
        Expansion::Applied(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpansionConfig, SalesPriceProperty};
    use serde_json::json;

    fn run(cfg: &ExpansionConfig, ts: &[&dyn ShortcutTransformer], v: Value) -> Value {
        let mut record = Record::from_value(v).expect("record");
        let ctx = RecordCtx::new(cfg, &record);
        for t in ts {
            record = t.transform(record, &ctx);
        }
        record.into_value()
    }

    #[test]
    fn amounts_parse_as_numbers() {
        assert_eq!(parse_amount("1500"), Some(Number::from(1500)));
        assert_eq!(parse_amount(" 1500.50 ").map(|n| n.to_string()), Some("1500.5".to_string()));
        assert_eq!(parse_amount("mille lire"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn amount_and_currency_commute() {
        let cfg = ExpansionConfig::default();
        let input = json!({"id": "contract:7", "saleAmount": ["1500.50"], "saleCurrency": ["currency:lira"]});
        let amount = AmountShortcut::new("saleAmount");
        let currency = CurrencyShortcut::new("saleCurrency");
        let a = run(&cfg, &[&amount, &currency], input.clone());
        let b = run(&cfg, &[&currency, &amount], input);
        assert_eq!(a, b);
        let price = &a["P70_documents"][0]["P179_had_sales_price"][0];
        assert_eq!(price["type"], json!("E97_Monetary_Amount"));
        assert_eq!(price["P181_has_amount"], json!(1500.5));
        assert_eq!(price["P180_has_currency"], json!([{"id": "currency:lira", "type": "E98_Currency"}]));
    }

    #[test]
    fn legacy_dimension_property() {
        let cfg = ExpansionConfig::default().with_sales_price_property(SalesPriceProperty::HasDimension);
        let out = run(&cfg, &[&AmountShortcut::new("saleAmount")], json!({"id": "c", "saleAmount": 12}));
        assert_eq!(out["P70_documents"][0]["P43_has_dimension"][0]["P181_has_amount"], json!(12));
        assert!(out["P70_documents"][0].get("P179_had_sales_price").is_none());
    }

    #[test]
    fn non_numeric_amount_is_skipped_without_creating_nodes() {
        let cfg = ExpansionConfig::default();
        let out = run(&cfg, &[&AmountShortcut::new("saleAmount")], json!({"id": "c", "saleAmount": ["mille lire"]}));
        assert_eq!(out, json!({"id": "c"}));
    }

    #[test]
    fn extra_valid_amounts_are_accepted_but_unused() {
        let cfg = ExpansionConfig::default();
        let mut record = Record::from_value(json!({"id": "c"})).expect("record");
        let ctx = RecordCtx::new(&cfg, &record);
        let raw = json!(["100", "200", "cento"]);
        assert_eq!(AmountShortcut::new("saleAmount").expand(&mut record, &raw, &ctx), Expansion::Applied(2));
        let out = record.into_value();
        assert_eq!(out["P70_documents"][0]["P179_had_sales_price"][0]["P181_has_amount"], json!(100));
    }
}
