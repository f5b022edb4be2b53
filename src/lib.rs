//! ecoflow-ctl: EcoFlow power station controller
//!
//! A library for resolving EcoFlow API credentials from layered sources,
//! validating a requested operation, building the energy-strategy command
//! envelope, and talking to the EcoFlow IoT open API.

pub mod api;
pub mod command;
pub mod config;
