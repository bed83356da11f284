use std::fmt;

use thiserror::Error;

use crate::value::Value;

/// One step from a parent value into a child.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Location of a value inside a decoded document, printed as `$.a.b[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn push_front(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Wire data that does not describe the expected entity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("missing required field at {path}")]
    MissingRequiredField { path: FieldPath },

    #[error("type mismatch at {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unknown enumeration code {code} at {path}")]
    UnknownEnumerationCode { path: FieldPath, code: i64 },

    #[error("value at {path} matches no branch of {union}")]
    UnmatchedUnionBranch { path: FieldPath, union: &'static str },
}

impl DecodeError {
    pub fn missing_field() -> Self {
        Self::MissingRequiredField {
            path: FieldPath::root(),
        }
    }

    pub fn type_mismatch(expected: &'static str, actual: &Value) -> Self {
        Self::TypeMismatch {
            path: FieldPath::root(),
            expected,
            actual: actual.kind(),
        }
    }

    pub fn unknown_code(code: i64) -> Self {
        Self::UnknownEnumerationCode {
            path: FieldPath::root(),
            code,
        }
    }

    pub fn unmatched_branch(union: &'static str) -> Self {
        Self::UnmatchedUnionBranch {
            path: FieldPath::root(),
            union,
        }
    }

    /// Re-roots the error under `segment` of the enclosing value.
    #[must_use]
    pub fn within(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path_mut().push_front(segment.into());
        self
    }

    pub fn path(&self) -> &FieldPath {
        match self {
            Self::MissingRequiredField { path }
            | Self::TypeMismatch { path, .. }
            | Self::UnknownEnumerationCode { path, .. }
            | Self::UnmatchedUnionBranch { path, .. } => path,
        }
    }

    fn path_mut(&mut self) -> &mut FieldPath {
        match self {
            Self::MissingRequiredField { path }
            | Self::TypeMismatch { path, .. }
            | Self::UnknownEnumerationCode { path, .. }
            | Self::UnmatchedUnionBranch { path, .. } => path,
        }
    }
}
