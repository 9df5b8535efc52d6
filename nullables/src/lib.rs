//! Nullable infrastructure for deterministic testing.
//!
//! Everything the verification core takes from the outside world (the
//! current time, proofs from the oracle operator, signatures from wallet
//! owners, the call target) has a test-friendly stand-in here that:
//! - returns deterministic values
//! - can be controlled programmatically
//! - never touches the network or a real key store
//!
//! Usage: swap real collaborators for nullables in tests.

pub mod clock;
pub mod executor;
pub mod prover;
pub mod signers;

pub use clock::NullClock;
pub use executor::NullExecutor;
pub use prover::NullProver;
pub use signers::NullSigners;
