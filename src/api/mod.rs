//! Device API client layer.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`]) and reading responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`]) with a reqwest implementation ([`ReqwestClient`])
//! - Request signing ([`sign`])
//! - The three device operations ([`DeviceApi`]) and their EcoFlow
//!   implementation ([`EcoflowClient`])

mod client;
mod device;
mod ecoflow;
mod error;
mod http;
mod response;
pub mod sign;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;
#[cfg(test)]
mod sign_tests;

pub use client::ReqwestClient;
pub use device::{DeviceApi, DeviceInfo, ParameterSet, SetResult};
pub use ecoflow::{Credentials, EcoflowClient, header, path};
pub use error::{ApiError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
