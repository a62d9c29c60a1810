#![cfg(test)]

//! One-time initialization shared by unit tests.
//!
//! The implementation lives in `backend-test-support` so the integration
//! suites configure themselves the same way.

pub mod logging {
    pub use backend_test_support::logging::init;
}
