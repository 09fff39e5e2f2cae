//! # loadout-skills
//!
//! Skills are reusable instruction documents (Markdown with optional YAML
//! frontmatter, SKILL.md style) that an assistant can attach to a
//! conversation. The pipeline decides per outgoing request whether a skill's
//! full instructions are revealed to the model or only its name and
//! description.
//!
//! ## SKILL.md format
//!
//! ```markdown
//! ---
//! name: Code Review Expert
//! description: Helps review code
//! author: someone
//! version: 1.0.0
//! triggerMode: keyword
//! triggerKeywords:
//!   - review
//!   - refactor
//! ---
//!
//! # Code Review Expert
//! You are an expert code reviewer...
//! ```
//!
//! ## How skills reach the model
//!
//! 1. [`parse_skill_md`] turns a raw document into a [`Skill`] record; parsing
//!    is total and every missing or malformed field falls back to a default.
//! 2. [`SkillCatalog`] holds the records; an assistant keeps a set of selected
//!    skill ids.
//! 3. Once per outgoing request, [`SkillsTransformer`] appends a short
//!    name-plus-description summary of every selected skill to the system
//!    message, evaluates each keyword-gated skill against the last few
//!    messages, and injects the full content of the skills that matched just
//!    before the newest message.

pub mod catalog;
pub mod parser;
pub mod skill;
pub mod transformer;
pub mod trigger;

pub use catalog::SkillCatalog;
pub use parser::parse_skill_md;
pub use skill::{Skill, SkillSource, TriggerMode};
pub use transformer::{InputTransformer, SkillsTransformer, TransformerContext, inject_skills};
