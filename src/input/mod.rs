//! Hardware input adapters.
//!
//! Adapters here read physical lines and hand raw levels to the debounced
//! input reader in `core::input`.

pub mod gpio;
