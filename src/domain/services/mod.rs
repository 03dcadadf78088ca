//! Domain services
//!
//! Pure byte-level logic shared by the engines.

pub mod byte_transform;
mod repair;
mod signature_catalog;

pub use repair::{Repair, RepairRule, find_repair};
pub use signature_catalog::{SIGNATURES, SignatureCatalog};
