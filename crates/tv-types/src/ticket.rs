use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// A traffic ticket as returned by the `main_page` action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub driver_name: String,
    pub offense: String,
    pub fine_amount: FineAmount,
    #[serde(deserialize_with = "lenient_points")]
    pub penalty_points: i64,
    pub issue_date: String,
}

/// Fine amount in the implied currency.
///
/// Accepts JSON numbers and numeric strings. A string is displayed exactly as
/// received (`"150.50"` stays `150.50`); numbers use the shortest form, so
/// whole amounts display without a fractional part (`200`, not `200.0`).
#[derive(Clone, Debug, PartialEq)]
pub struct FineAmount {
    value: f64,
    text: Option<String>,
}

impl FineAmount {
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self { value, text: None })
    }

    /// Parse a numeric string, keeping it as the display form.
    pub fn from_text(raw: &str) -> Option<Self> {
        let value = parse_decimal(raw)?;
        Some(Self {
            value,
            text: Some(raw.to_string()),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for FineAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => f.write_str(text),
            None => write!(f, "{}", self.value),
        }
    }
}

impl Serialize for FineAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.text {
            Some(text) => serializer.serialize_str(text),
            None => serializer.serialize_f64(self.value),
        }
    }
}

impl<'de> Deserialize<'de> for FineAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => {
                let value = n.as_f64().ok_or_else(|| de::Error::custom("fine amount out of range"))?;
                FineAmount::new(value).ok_or_else(|| de::Error::custom("fine amount must be finite"))
            }
            NumberOrText::Text(s) => FineAmount::from_text(&s).ok_or_else(|| de::Error::custom(format!("invalid fine amount '{}'", s))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

// Accepts both "150.50" and "150,50".
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

fn lenient_points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => Ok(v as i64),
                _ => Err(de::Error::custom(format!("invalid penalty points {}", n))),
            }
        }
        NumberOrText::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid penalty points '{}'", s))),
    }
}

/// Errors raised while decoding a ticket listing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of tickets, found {found}")]
    NotAnArray { found: &'static str },

    #[error("ticket #{index} is malformed: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a `main_page` response body.
///
/// The listing is decoded as a whole: if any element is malformed the entire
/// response is rejected, so callers never see a partial list. Element order
/// is preserved.
pub fn parse_tickets(body: &str) -> Result<Vec<Ticket>, ParseError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => return Err(ParseError::NotAnArray { found: json_kind(&other) }),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Ticket::deserialize(item).map_err(|source| ParseError::Record { index, source }))
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
