//! clearbrook-page
//!
//! The page-boundary layer: mandatory-field validation, the static progress
//! chart handed to the external renderer, the small page behaviors (anchor
//! scroll, mobile menu), and the capability interfaces real checkout and
//! scheduling integrations plug into.

pub mod chart;
pub mod error;
pub mod integrations;
pub mod surface;
pub mod validate;

pub use error::PageError;
pub use validate::{FieldOutcome, validate, validate_fields};
