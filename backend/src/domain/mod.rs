//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `participant` - User records that sessions are booked between
//! - `session` - Booked sessions, schedule classification and display views

pub mod foundation;
pub mod participant;
pub mod session;
