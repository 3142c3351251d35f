//! Parsing and reconstruction of share documents.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use arcanum_integers::{Integer, LiteralError};
use arcanum_solve::{reconstruct_constant, reconstruct_secret, Point, PointSet, ReconstructError};

/// Reserved member naming the document's requirement block.
const KEYS_MEMBER: &str = "keys";

/// How many shares a document declares and how many a reconstruction
/// needs. `k` shares determine a polynomial of degree `k - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Requirement {
    /// Total number of shares in the document.
    pub n: usize,
    /// Number of shares required to reconstruct the secret.
    pub k: usize,
}

/// An error produced while reading a share document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document could not be read from disk.
    #[error("failed to read share document")]
    Io(#[from] std::io::Error),
    /// The document is not syntactically valid JSON, or a member has
    /// the wrong shape.
    #[error("malformed share document")]
    Json(#[from] serde_json::Error),
    /// The reserved `"keys"` member is missing.
    #[error("share document has no \"keys\" member")]
    MissingRequirement,
    /// The declared requirement is unusable.
    #[error("requirement k={k} is not within 1..=n (n={n})")]
    InvalidRequirement {
        /// Declared share count.
        n: usize,
        /// Declared threshold.
        k: usize,
    },
    /// A share's member key is not a decimal integer.
    #[error("share id {0:?} is not a decimal integer")]
    InvalidShareId(String),
    /// A share is missing a field or carries one of the wrong type.
    #[error("share {x} has a missing or malformed {field:?} field")]
    MalformedShare {
        /// The share's x coordinate.
        x: i64,
        /// Name of the offending field.
        field: &'static str,
    },
    /// A share's encoded value does not decode in its declared base.
    #[error("share {x} does not decode")]
    Undecodable {
        /// The share's x coordinate.
        x: i64,
        /// The underlying decode failure.
        #[source]
        source: LiteralError,
    },
    /// The decoded points do not determine a unique polynomial.
    #[error(transparent)]
    Reconstruct(#[from] ReconstructError),
}

/// A parsed share document: the declared requirement plus every share
/// decoded into an exact integer point, in document order.
#[derive(Debug, Clone)]
pub struct ShareDocument {
    requirement: Requirement,
    points: PointSet,
}

impl FromStr for ShareDocument {
    type Err = DocumentError;

    /// Parses a share document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] describing the first problem found:
    /// bad JSON, a missing or out-of-range requirement, or a share that
    /// is malformed or does not decode.
    fn from_str(text: &str) -> Result<Self, DocumentError> {
        let root: Map<String, Value> = serde_json::from_str(text)?;

        let requirement = root
            .get(KEYS_MEMBER)
            .ok_or(DocumentError::MissingRequirement)
            .and_then(|value| {
                serde_json::from_value::<Requirement>(value.clone()).map_err(DocumentError::from)
            })?;
        if requirement.k == 0 || requirement.k > requirement.n {
            return Err(DocumentError::InvalidRequirement {
                n: requirement.n,
                k: requirement.k,
            });
        }

        let mut points = PointSet::new();
        for (member, value) in &root {
            if member.as_str() == KEYS_MEMBER {
                continue;
            }
            points.push(parse_share(member, value)?);
        }

        Ok(Self { requirement, points })
    }
}

impl ShareDocument {
    /// Reads and parses a share document from a file.
    ///
    /// # Errors
    ///
    /// As the [`FromStr`] implementation, plus I/O failures.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        fs::read_to_string(path)?.parse()
    }

    /// Returns the declared requirement.
    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Returns the decoded points in document order.
    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Reconstructs the constant term of the hidden polynomial from the
    /// first `k` shares.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Reconstruct`] when the document carries
    /// fewer than `k` shares or the selected shares are degenerate.
    pub fn constant(&self) -> Result<f64, DocumentError> {
        Ok(reconstruct_constant(&self.points, self.requirement.k)?)
    }

    /// Reconstructs the secret, truncated toward zero.
    ///
    /// # Errors
    ///
    /// As [`ShareDocument::constant`].
    pub fn secret(&self) -> Result<i128, DocumentError> {
        Ok(reconstruct_secret(&self.points, self.requirement.k)?)
    }
}

/// Parses one share member into a point.
fn parse_share(member: &str, value: &Value) -> Result<Point, DocumentError> {
    let x: i64 = member
        .parse()
        .map_err(|_| DocumentError::InvalidShareId(member.to_owned()))?;

    let base = value
        .get("base")
        .and_then(base_field)
        .ok_or(DocumentError::MalformedShare { x, field: "base" })?;
    let literal = value
        .get("value")
        .and_then(Value::as_str)
        .ok_or(DocumentError::MalformedShare { x, field: "value" })?;

    let y = Integer::from_str_radix(literal, base)
        .map_err(|source| DocumentError::Undecodable { x, source })?;

    Ok(Point::new(x, y))
}

/// Reads a base field that may be either a JSON string or a number;
/// documents in the wild use both spellings.
fn base_field(value: &Value) -> Option<u32> {
    match value {
        Value::String(text) => text.parse().ok(),
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}
