//! Fechas: `enactedOn`, `birthDate`, `deathDate`.
//!
//! Cada literal se añade a `P82_at_some_time_within` del intervalo temporal
//! de la ranura. Las fechas `YYYY`, `YYYY-MM` y `YYYY-MM-DD` además fijan los
//! límites exteriores (inicio del inicio, fin del fin) sobre todas las fechas
//! del intervalo.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use super::{Expansion, Host, Phase, RecordCtx, ShortcutTransformer, Target};
use crate::constants::predicate;
use crate::model::{elements, literal, push_unique, Node, Record};
use crate::resolver::{nested, SharedSlot, SlotSpec};

#[derive(Debug, Clone)]
pub struct TimeSpanShortcut {
    key: &'static str,
    phase: Phase,
    slot: SharedSlot,
}

impl TimeSpanShortcut {
    pub const fn new(key: &'static str, phase: Phase, slot: SharedSlot) -> Self {
        Self { key, phase, slot }
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

/// Primer y último día cubiertos por una fecha de precisión variable.
pub fn date_bounds(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let date = text.split('T').next()?.trim();
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [y] if y.len() == 4 => {
            let year = y.parse().ok()?;
            Some((NaiveDate::from_ymd_opt(year, 1, 1)?, NaiveDate::from_ymd_opt(year, 12, 31)?))
        }
        [y, m] if y.len() == 4 => {
            let (year, month) = (y.parse().ok()?, m.parse().ok()?);
            Some((NaiveDate::from_ymd_opt(year, month, 1)?, last_day_of_month(year, month)?))
        }
        [_, _, _] => {
            let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            (day.year() >= 0).then_some((day, day))
        }
        _ => None,
    }
}

fn refresh_bounds(span: &mut Node) {
    let bounds = span.get(predicate::AT_SOME_TIME_WITHIN)
                     .and_then(Value::as_array)
                     .into_iter()
                     .flatten()
                     .filter_map(Value::as_str)
                     .filter_map(date_bounds)
                     .fold(None, |acc: Option<(NaiveDate, NaiveDate)>, (start, end)| match acc {
                         None => Some((start, end)),
                         Some((s, e)) => Some((s.min(start), e.max(end))),
                     });
    if let Some((start, end)) = bounds {
        span.insert(predicate::BEGIN_OF_THE_BEGIN.to_string(),
                    Value::String(format!("{}T00:00:00", start.format("%Y-%m-%d"))));
        span.insert(predicate::END_OF_THE_END.to_string(),
                    Value::String(format!("{}T23:59:59", end.format("%Y-%m-%d"))));
    }
}

impl ShortcutTransformer for TimeSpanShortcut {
    fn key(&self) -> &'static str {
        self.key
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn writes(&self) -> Vec<Target> {
        vec![Target::on(Host::Slot(self.slot), predicate::HAS_TIME_SPAN),
             Target::on(Host::TimeSpan(self.slot), predicate::AT_SOME_TIME_WITHIN)]
    }

    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion {
        let dates: Vec<String> = elements(raw).into_iter().filter_map(literal).collect();
        if dates.is_empty() {
            return Expansion::Applied(0);
        }
        let anchor = record.anchor().to_string();
        let host = record.slot(self.slot, ctx.config, ctx.kind);
        let span = nested(host, &anchor, &SlotSpec::time_span());
        let accepted = dates.len();
        for date in dates {
            push_unique(span, predicate::AT_SOME_TIME_WITHIN, Value::String(date));
        }
        refresh_bounds(span);
        Expansion::Applied(accepted)
    }
}
