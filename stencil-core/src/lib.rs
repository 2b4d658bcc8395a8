//! Stencil Core
//!
//! Core types and the conversion engine for turning a deployed Spinnaker
//! pipeline configuration into a reusable pipeline template.
//!
//! This crate contains:
//! - Domain types: the source pipeline configuration and the template document
//! - DTOs: responses exchanged with the orchestration service
//! - Conversion: ID synthesis, field normalization, stage graph reconstruction
//!
//! Nothing in here performs I/O.

pub mod convert;
pub mod domain;
pub mod dto;
pub mod error;

pub use convert::convert_pipeline;
pub use error::{ConvertError, Result};
