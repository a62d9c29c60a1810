//! Infrastructure layer: database access, state assembly, payment provider.

pub mod db;
pub mod state;
pub mod stripe;
