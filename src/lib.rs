//! Starport server application core modules.
//!
//! This crate contains all functionality for the Starport ship registry,
//! including HTTP routing, request validation, rating derivation, dynamic
//! filter composition, and database operations.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
