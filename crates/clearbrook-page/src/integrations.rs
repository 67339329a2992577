//! Checkout and scheduling capability interfaces.
//!
//! The site's payment and scheduling widgets are third-party. The core
//! only defines the capabilities; real integrations implement these
//! traits, and until one is wired in the logging placeholders stand in.

use tracing::info;

use crate::error::PageError;

/// Capability to start a paid checkout flow.
pub trait CheckoutProvider {
    fn initialize(&self) -> Result<(), PageError>;
}

/// Capability to open an external scheduling widget for a consultation
/// type (e.g., "initial-consult", "follow-up").
pub trait SchedulingProvider {
    fn open(&self, consultation_type: &str) -> Result<(), PageError>;
}

/// Placeholder checkout: emits a diagnostic event and succeeds.
pub struct LoggingCheckout;

impl CheckoutProvider for LoggingCheckout {
    fn initialize(&self) -> Result<(), PageError> {
        info!("checkout initialized");
        Ok(())
    }
}

/// Placeholder scheduler: emits a diagnostic event and succeeds.
pub struct LoggingScheduler;

impl SchedulingProvider for LoggingScheduler {
    fn open(&self, consultation_type: &str) -> Result<(), PageError> {
        info!(consultation_type, "opening scheduler");
        Ok(())
    }
}
