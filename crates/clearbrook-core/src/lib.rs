//! clearbrook-core
//!
//! Pure domain types for the screening page: the typed form/field model and
//! the registry that replaces ambient page access. No I/O — this is the
//! shared vocabulary of the Clearbrook system.

pub mod error;
pub mod form;

pub use error::CoreError;
pub use form::{Field, FieldKind, Form, FormRegistry};
