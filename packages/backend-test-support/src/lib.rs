//! Shared test support for the backend.
//!
//! Houses the assertions and logging bootstrap that both unit tests and
//! integration suites need, without depending on backend types.

pub mod logging;
pub mod problem_details;
