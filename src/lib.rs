//! odds-apex: Fair odds and staking for football matches
//!
//! This library provides the core components for:
//! - Expected-goals estimation, in-play and pre-match
//! - Win/draw/loss probabilities from a negative binomial goal model
//! - Blending model probabilities with de-margined market prices
//! - Zero-inflated Poisson final-scoreline tables
//! - Fractional Kelly lay and back staking
//! - Tagged text reports and a TOML-configured CLI

pub mod cli;
pub mod config;
pub mod engine;
pub mod market;
pub mod model;
pub mod params;
pub mod report;
pub mod risk;
pub mod telemetry;
