//! # Arcanum
//!
//! Reconstructs a hidden constant from points on an unknown polynomial.
//!
//! Given `n` shares of which `k` are required, Arcanum decodes each
//! share's value from its declared base, fits the unique degree `k-1`
//! polynomial through the first `k` points by Gauss-Jordan elimination
//! of the Vandermonde system, and returns the polynomial's constant
//! term as the secret.
//!
//! ## Crates
//!
//! - **Exact decoding**: integer literals in any base 2-36, kept at
//!   arbitrary precision until the solver needs floating point
//! - **Interpolation**: deterministic first-`k` selection, no-pivot
//!   elimination matching the historical scheme, with a partial-pivot
//!   variant behind the same contract
//! - **Share documents**: the JSON container format, parsed in
//!   document order
//!
//! ## Quick Start
//!
//! ```rust
//! use arcanum::prelude::*;
//!
//! // y = x^2 + x + 2
//! let points: PointSet = [(1, 4), (2, 8), (3, 14), (4, 22)]
//!     .into_iter()
//!     .map(|(x, y)| Point::new(x, Integer::new(y)))
//!     .collect();
//!
//! let secret = reconstruct_secret(&points, 3).unwrap();
//! assert_eq!(secret, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use arcanum_integers as integers;
pub use arcanum_linalg as linalg;
pub use arcanum_shares as shares;
pub use arcanum_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use arcanum_integers::{Integer, LiteralError};
    pub use arcanum_linalg::Pivoting;
    pub use arcanum_shares::{DocumentError, Requirement, ShareDocument};
    pub use arcanum_solve::{
        reconstruct_constant, reconstruct_polynomial, reconstruct_secret, Point, PointSet,
        Polynomial, ReconstructError,
    };
}
