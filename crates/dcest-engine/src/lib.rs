//! # dcest-engine: Pure Estimators
//!
//! The two calculation cores behind the data-center study estimator:
//!
//! - [`bus_count::estimate`] - sizes every distribution tier of a data-center
//!   power system and counts the resulting electrical buses
//! - [`study_cost::estimate`] - prices the engineering studies performed on
//!   that system
//!
//! Both are pure, deterministic functions over an immutable configuration
//! record from `dcest-core`: no I/O, no shared state, no side effects.
//! Concurrent invocations need no coordination.
//!
//! Each call either returns a complete, consistent result or fails fast with
//! [`EstError::Config`](dcest_core::EstError); advisory findings ride along
//! on valid results instead of degrading them.

pub mod bus_count;
pub mod study_cost;

pub use bus_count::estimate as estimate_bus_count;
pub use study_cost::estimate as estimate_study_cost;
