//! Pipeline to template conversion
//!
//! Every step is a pure function over borrowed input:
//! - [`id`]: template and stage identifiers
//! - [`normalize`]: positional trigger and notification names
//! - [`config`]: passthrough stage configuration
//! - [`stages`]: stage graph reconstruction
//! - [`assemble`]: the final template document

pub mod assemble;
pub mod config;
pub mod id;
pub mod normalize;
pub mod stages;

pub use assemble::{FALLBACK_DESCRIPTION, convert_pipeline};
pub use config::extract_config;
pub use id::{stage_id, template_id};
pub use normalize::{normalize_notifications, normalize_triggers};
pub use stages::{RawStage, build_stages};
