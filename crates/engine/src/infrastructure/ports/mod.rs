//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Parameter resolution and failure policy (owned by the workflow host)
//! - Outbound HTTP (reqwest in production, mocks in tests)
//! - Clock (for testing)

mod error;
mod external;
mod host;
mod testing;

// =============================================================================
// Host Ports
// =============================================================================
pub use host::{ErrorReporter, ParameterSource, ParameterSourceExt};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{HttpClient, TEXT_PLAIN};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockHttpClient;
#[cfg(test)]
pub use host::{MockErrorReporter, MockParameterSource};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{HttpError, ParameterError};
