//! riskdb - persistence-layer model for probabilistic safety assessment
//!
//! Fault trees, event trees, stochastic parameters, and the read-only
//! traversal utilities that operate on them.

pub mod catalog;
pub mod distribution;
pub mod model;
pub mod observability;
pub mod store;
pub mod traversal;
