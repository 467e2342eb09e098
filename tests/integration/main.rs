//! Integration test suite

mod config_test;
mod params_test;
mod pipeline_test;
