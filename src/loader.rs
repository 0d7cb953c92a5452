// src/loader.rs
//
// Fetch data.json once, parse it, and normalize the two document shapes
// the producer has emitted over time:
//   { "items": [...], "last_updated": "..." }   (current)
//   [ ... ]                                      (legacy, no timestamp)

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::config::consts::LAST_UPDATED_UNKNOWN;
use crate::config::options::{Location, SourceOptions};
use crate::core::net::{Fetch, Fetcher};
use crate::core::sanitize::strip_bom;
use crate::model::{Dataset, Entry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("HTTP error (status {0})")]
    HttpStatus(u16),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("Invalid JSON: {0}")]
    Parse(String),
    #[error("Unrecognized data shape: {0}")]
    UnrecognizedShape(String),
}

/// Coarse grouping used for user-facing status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkOrHttp,
    Parse,
    UnrecognizedShape,
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::HttpStatus(_) | LoadError::Transport(_) | LoadError::Timeout(_) => ErrorKind::NetworkOrHttp,
            LoadError::Parse(_) => ErrorKind::Parse,
            LoadError::UnrecognizedShape(_) => ErrorKind::UnrecognizedShape,
        }
    }
}

/// Resolve the configured source and load it with the real transport.
pub fn load(source: &SourceOptions) -> Result<Dataset, LoadError> {
    let fetcher = Fetcher::new(source.timeout)?;
    load_from(&fetcher, &source.base.data_location())
}

/// One fetch, no retry.
pub fn load_from(fetcher: &dyn Fetch, location: &Location) -> Result<Dataset, LoadError> {
    logf!("Load: GET {location}");

    let resp = fetcher.fetch(location).inspect_err(|e| loge!("Load: Transport error: {e}"))?;
    if !resp.is_success() {
        loge!("Load: HTTP status {} for {location}", resp.status);
        return Err(LoadError::HttpStatus(resp.status));
    }
    logd!("Load: {} byte(s) received", resp.body.len());

    let ds = parse_document(&resp.body).inspect_err(|e| loge!("Load: {e}"))?;
    logf!("Load: OK items={} last_updated={}", ds.len(), ds.last_updated);
    Ok(ds)
}

/// Parse raw bytes (UTF-8 JSON, optional BOM) into a canonical Dataset.
pub fn parse_document(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let value: Value = serde_json::from_slice(strip_bom(bytes))
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    normalize(value)
}

pub fn normalize(value: Value) -> Result<Dataset, LoadError> {
    let ds = match value {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => {
                let last_updated = match map.remove("last_updated") {
                    Some(Value::String(s)) if !s.trim().is_empty() => s,
                    _ => s!(LAST_UPDATED_UNKNOWN),
                };
                Dataset::new(decode_items(items)?, last_updated)
            }
            Some(other) => {
                return Err(LoadError::UnrecognizedShape(format!("'items' is {}, expected a list", json_kind(&other))));
            }
            None => return Err(LoadError::UnrecognizedShape(s!("object without an 'items' list"))),
        },
        Value::Array(items) => Dataset::undated(decode_items(items)?),
        other => {
            return Err(LoadError::UnrecognizedShape(format!("top-level {}", json_kind(&other))));
        }
    };

    // one item per source row; rows sharing a license are all kept
    if let Some(dup) = ds.duplicate_license() {
        loge!("Load: License '{dup}' appears more than once, keeping every row");
    }
    Ok(ds)
}

fn decode_items(items: Vec<Value>) -> Result<Vec<Entry>, LoadError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Object(_) => serde_json::from_value::<Entry>(v)
                .map_err(|e| LoadError::UnrecognizedShape(format!("items[{i}]: {e}"))),
            other => Err(LoadError::UnrecognizedShape(format!("items[{i}] is {}", json_kind(&other)))),
        })
        .collect()
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
