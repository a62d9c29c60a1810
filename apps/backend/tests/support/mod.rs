// Not every suite uses every helper; each test binary compiles its own copy.
#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod factory;

pub use app_builder::create_test_app;
