//! Domain models for the patient registry.

mod clinical;
mod family;
mod patient;

pub use clinical::*;
pub use family::*;
pub use patient::*;
