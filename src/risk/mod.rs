//! Risk management module
//!
//! Edge measurement and Kelly-scaled stake/liability sizing

mod kelly;
mod types;

pub use kelly::{back_edge, lay_edge, positive_edge, KellyFraction, StakingAdvisor};
pub use types::{ExposureSide, Recommendation, Subject};
