//! BDE Solver - Event-driven simulation of Boolean delay equations
//!
//! A Boolean delay equation model defines each variable's present state as
//! a Boolean function of the variables' (and optionally some forcing
//! inputs') past states at fixed positive delays. This crate implements:
//! - The transition capability and solver configuration (model)
//! - The candidate switch-time queue (candidates)
//! - Cached read views over forcing inputs (forcing)
//! - The event-driven solver itself (engine)
//! - A solution checker for validating solved series (validator)

pub mod candidates;
pub mod engine;
pub mod forcing;
pub mod model;
pub mod validator;

pub use candidates::*;
pub use engine::*;
pub use forcing::*;
pub use model::*;
pub use validator::*;
