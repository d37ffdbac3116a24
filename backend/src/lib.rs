//! Coaching Schedule - session booking and schedule queries
//!
//! This crate books coaching sessions between a student and a coach and
//! answers "what is on my schedule" for either side of a booking. Storage is
//! an external document store reached through the [`ports::DocumentStore`]
//! port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
