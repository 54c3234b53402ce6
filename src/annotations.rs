//! Case captions
//!
//! An annotation file is a flat JSON object mapping a case identifier (the
//! video file stem) to a human-readable caption:
//!
//! ```json
//! { "caseA": "A dancer spinning on a beach", "intro": "Overview" }
//! ```
//!
//! Lookups never fail. Unknown cases fall back to the stem itself, or to a
//! positional "Case N" label on comparison prompt lines.

use serde_json::Value;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    captions: BTreeMap<String, String>,
    /// Keys whose value was null, an array, or an object
    ignored: Vec<String>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an annotation file
    ///
    /// Anything other than a JSON object is `InvalidData`. Values are taken
    /// key by key: strings as they are, numbers and booleans as their JSON
    /// text. Other values are left out and listed in [`ignored`](Self::ignored).
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let entries: BTreeMap<String, Value> = serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut annotations = Self::default();
        for (case, value) in entries {
            match value {
                Value::String(caption) => {
                    annotations.captions.insert(case, caption);
                }
                Value::Number(_) | Value::Bool(_) => {
                    annotations.captions.insert(case, value.to_string());
                }
                Value::Null | Value::Array(_) | Value::Object(_) => annotations.ignored.push(case),
            }
        }
        Ok(annotations)
    }

    /// Like [`load`](Self::load) but degrades to an empty map, handing the
    /// error back for the caller to report
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Self, Option<io::Error>) {
        match Self::load(path) {
            Ok(annotations) => (annotations, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn insert(&mut self, case: &str, caption: &str) {
        self.captions.insert(case.to_string(), caption.to_string());
    }

    pub fn get(&self, case: &str) -> Option<&str> {
        self.captions.get(case).map(String::as_str)
    }

    /// Caption under a video: the annotation, else the stem itself
    pub fn caption<'a>(&'a self, stem: &'a str) -> &'a str {
        self.get(stem).unwrap_or(stem)
    }

    /// Prompt line above a comparison row: the annotation, else "Case N"
    /// with `ordinal` counted from 1
    pub fn prompt(&self, stem: &str, ordinal: usize) -> String {
        match self.get(stem) {
            Some(caption) => caption.to_string(),
            None => format!("Case {}", ordinal),
        }
    }

    /// Keys present in the file but without a usable caption, sorted
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }
}
