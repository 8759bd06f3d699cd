use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// A validated, non-empty list of finite numbers.
///
/// Only [`NumericList::new`] and the request validator build one, so holding a
/// `NumericList` is proof that the values passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericList(Vec<f64>);

impl NumericList {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        let mut errors = Vec::new();
        if values.is_empty() {
            errors.push(FieldError::too_short(FieldError::body_path(["values"]), 0));
        }
        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() {
                errors.push(FieldError::new(
                    FieldError::element_path(index),
                    ErrorKind::FiniteNumber,
                    format!("Item at index {} must be a finite number, got {}", index, value),
                ));
            }
        }

        if errors.is_empty() {
            Ok(Self(values))
        } else {
            Err(CalcError::ValidationError(errors))
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Service identity, resolved once at startup and shared read-only by handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Missing,
    DictType,
    ListType,
    TooShort,
    FloatType,
    FiniteNumber,
    JsonInvalid,
    ContentType,
}

/// One client-input defect, located by its path inside the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<PathSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

impl FieldError {
    pub fn new(loc: Vec<PathSegment>, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }

    pub fn body_path<const N: usize>(keys: [&str; N]) -> Vec<PathSegment> {
        std::iter::once(PathSegment::from("body"))
            .chain(keys.into_iter().map(PathSegment::from))
            .collect()
    }

    pub fn element_path(index: usize) -> Vec<PathSegment> {
        let mut loc = Self::body_path(["values"]);
        loc.push(PathSegment::Index(index));
        loc
    }

    pub fn too_short(loc: Vec<PathSegment>, actual: usize) -> Self {
        Self::new(
            loc,
            ErrorKind::TooShort,
            format!("List should have at least 1 item, not {}", actual),
        )
    }
}
