//! Lenient accessors over the intent argument object
//!
//! Arguments come from a speech/LLM extractor, so numbers may arrive as JSON
//! numbers or as strings written with Persian digits.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::error::{AssistantError, AssistantResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentArgs(Map<String, Value>);

/// One line of a spoken requisition request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestedLine {
    pub drug_name: Option<String>,
    pub quantity: Option<u32>,
}

impl IntentArgs {
    pub fn from_value(value: Value) -> AssistantResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(AssistantError::MalformedArgs(format!(
                "expected an object, got {}",
                other
            ))),
        }
    }

    /// Trimmed text; empty strings count as missing
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Positive whole quantity
    pub fn quantity(&self, key: &str) -> Option<u32> {
        self.0.get(key).and_then(quantity_from_value)
    }

    /// Decimal amount; zero is a value, not a missing argument
    pub fn amount(&self, key: &str) -> Option<Decimal> {
        self.0.get(key).and_then(decimal_from_value)
    }

    /// ISO `YYYY-MM-DD` date
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        let text = self.text(key)?;
        NaiveDate::parse_from_str(&ascii_digits(&text), "%Y-%m-%d").ok()
    }

    /// Requisition lines under `key`; a missing or non-array value gives none
    pub fn requested_lines(&self, key: &str) -> Vec<RequestedLine> {
        let Some(Value::Array(items)) = self.0.get(key) else {
            return Vec::new();
        };
        items
            .iter()
            .map(|item| {
                let line = match item {
                    Value::Object(map) => IntentArgs(map.clone()),
                    _ => IntentArgs::default(),
                };
                RequestedLine {
                    drug_name: line.text("drugName"),
                    quantity: line.quantity("quantity"),
                }
            })
            .collect()
    }
}

impl From<Map<String, Value>> for IntentArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn quantity_from_value(value: &Value) -> Option<u32> {
    let decimal = decimal_from_value(value)?;
    if decimal <= Decimal::ZERO || !decimal.fract().is_zero() {
        return None;
    }
    decimal.to_u32()
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Value::String(s) => parse_decimal_text(s),
        _ => None,
    }
}

fn parse_decimal_text(text: &str) -> Option<Decimal> {
    let cleaned: String = ascii_digits(text.trim())
        .chars()
        .filter(|c| *c != ',' && *c != '٬')
        .map(|c| if c == '٫' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Persian (U+06F0..) and Arabic-Indic (U+0660..) digits to ASCII
fn ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c,
        })
        .collect()
}
