//! Domain types for the Stencil converter

pub mod pipeline;
pub mod template;
