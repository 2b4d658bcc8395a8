//! Data Transfer Objects for the orchestration service API
//!
//! Lightweight shapes of the responses the service sends back, as opposed
//! to the domain documents themselves.

pub mod task;
