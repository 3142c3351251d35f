//! # arcanum-shares
//!
//! Share-document handling for Arcanum.
//!
//! A share document is a JSON object with one reserved member, `"keys"`,
//! declaring how many shares exist (`n`) and how many are required
//! (`k`). Every other member is a share: its key is the decimal x
//! coordinate, its value an object with `"base"` and `"value"` fields
//! carrying the encoded y coordinate.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "2", "value": "100" },
//!     "2": { "base": "16", "value": "8" },
//!     "3": { "base": "8", "value": "16" },
//!     "4": { "base": "36", "value": "M" }
//! }
//! ```
//!
//! Shares are consumed in document order; when more than `k` are
//! present, the first `k` determine the secret.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;

pub use document::{DocumentError, Requirement, ShareDocument};
