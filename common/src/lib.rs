//! Shared data model of `lanmap`.
//!
//! * [`network`]: reachability results, address helpers and subnet arithmetic.
//! * [`discovery`]: the two discovery record families.
//! * [`snapshot`]: the per-source input blocks a caller hands over.
//! * [`utils`]: small string helpers.

pub mod config;
pub mod discovery;
pub mod error;
pub mod network;
pub mod snapshot;
pub mod utils;
pub mod vendors;

pub use error::{CidrError, CidrFault};
