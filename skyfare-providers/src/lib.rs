//! Airline provider adapters.
//!
//! Each adapter implements the [`skyfare_core::Provider`] capability
//! contract: translate the normalized request, execute the source query,
//! normalize the response. Current connectors are deterministic stubs
//! pending the real upstream integrations.

pub mod blackstone;
pub mod flyone;
pub mod mock;

pub use blackstone::Blackstone;
pub use flyone::FlyOne;
pub use mock::MockProvider;
