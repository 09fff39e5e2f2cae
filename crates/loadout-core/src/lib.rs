//! # loadout-core
//!
//! Core types for the Loadout agent-skills system. This crate defines the
//! shared vocabulary used by the rest of the workspace: the conversation
//! message model the chat pipeline hands to transformers, typed identifiers,
//! and the workspace error type.

pub mod error;
pub mod message;
pub mod types;

pub use error::{LoadoutError, Result};
pub use message::{Message, MessageContent, Role};
pub use types::SkillId;
