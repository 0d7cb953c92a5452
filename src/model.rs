// src/model.rs
//
// Entry / Dataset as delivered by data.json. Entries are read-only after
// decoding; a Dataset is only ever replaced whole.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::consts::{LAST_UPDATED_LOADING, LAST_UPDATED_UNKNOWN};

/// One package-insert record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(deserialize_with = "de_text")]
    pub code: String,
    #[serde(deserialize_with = "de_text")]
    pub name: String,
    #[serde(deserialize_with = "de_text")]
    pub license: String,
    #[serde(deserialize_with = "de_flag")]
    pub is_changed: bool,
    #[serde(deserialize_with = "de_opt_text")]
    pub last_change_date: Option<String>,
    #[serde(deserialize_with = "de_text")]
    pub old_text: String,
    #[serde(deserialize_with = "de_text")]
    pub current_text: String,
    #[serde(deserialize_with = "de_text")]
    pub fda_url: String,
}

impl Entry {
    /// Change date, only when the entry is flagged as changed.
    pub fn change_date(&self) -> Option<&str> {
        if self.is_changed { self.last_change_date.as_deref() } else { None }
    }
}

/// One fetched snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    pub items: Vec<Entry>,
    pub last_updated: String,
}

impl Dataset {
    pub fn new(items: Vec<Entry>, last_updated: impl Into<String>) -> Self {
        Self { items, last_updated: last_updated.into() }
    }

    /// Empty dataset shown while the first load is in flight.
    pub fn pending() -> Self {
        Self::new(Vec::new(), LAST_UPDATED_LOADING)
    }

    /// Items without a timestamp (legacy bare-list documents).
    pub fn undated(items: Vec<Entry>) -> Self {
        Self::new(items, LAST_UPDATED_UNKNOWN)
    }

    #[inline] pub fn len(&self) -> usize { self.items.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// First license that appears more than once, if any.
    pub fn duplicate_license(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .find(|e| !seen.insert(e.license.as_str()))
            .map(|e| e.license.as_str())
    }
}

impl Default for Dataset {
    fn default() -> Self { Self::pending() }
}

/* ---------- lenient field decoding ---------- */

// The producer copies spreadsheet cells, so codes and licenses can come
// through as numbers.
fn de_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(s!()),
        other => Err(serde::de::Error::custom(format!("expected text, found {other}"))),
    }
}

fn de_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let s = de_text(d)?;
    Ok(if s.trim().is_empty() { None } else { Some(s) })
}

fn de_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    match Value::deserialize(d)? {
        Value::Bool(b) => Ok(b),
        Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!("expected boolean, found {other}"))),
    }
}
