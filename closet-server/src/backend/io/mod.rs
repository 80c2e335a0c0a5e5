//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services: JSON request
//! and response types, error translation to status codes, and the mappers
//! that also define the persisted record layout.

pub mod rest;

pub use rest::*;
