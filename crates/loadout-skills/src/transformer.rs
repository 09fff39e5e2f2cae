//! Skills prompt-injection transformer.
//!
//! Runs once per outgoing request. Two injections happen:
//!
//! 1. A meta summary (name + description) of every selected skill is
//!    appended to the system message, so the model always knows which
//!    skills exist.
//! 2. Keyword-gated skills whose keywords match the recent conversation
//!    get their full content injected just before the newest message.
//!
//! Always-mode skills appear in the summary only; their detailed content
//! is never expanded. Never-mode skills stay summary-only as well.

use std::collections::HashSet;

use async_trait::async_trait;
use loadout_core::{Message, MessageContent, Result, Role, SkillId};
use tracing::debug;

use crate::skill::{Skill, TriggerMode};

/// How many trailing messages form the keyword-matching window.
///
/// Fixed for the whole request; a skill's own `scan_depth` is an advisory
/// hint for the surrounding product and is not consulted here.
pub const CONTEXT_SCAN_WINDOW: usize = 3;

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Per-request inputs handed to a transformer by the chat pipeline.
pub struct TransformerContext<'a> {
    /// The full skill catalog, in catalog order.
    pub catalog: &'a [Skill],
    /// The assistant's selected skill ids.
    pub selected: &'a HashSet<SkillId>,
}

/// A transform applied to the outgoing message sequence before it is sent
/// to the model. Implementations must not mutate their inputs.
#[async_trait]
pub trait InputTransformer: Send + Sync {
    async fn transform(
        &self,
        ctx: &TransformerContext<'_>,
        messages: Vec<Message>,
    ) -> Result<Vec<Message>>;
}

/// The skills transformer. Stateless; each invocation is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillsTransformer;

#[async_trait]
impl InputTransformer for SkillsTransformer {
    async fn transform(
        &self,
        ctx: &TransformerContext<'_>,
        messages: Vec<Message>,
    ) -> Result<Vec<Message>> {
        Ok(inject_skills(ctx.selected, ctx.catalog, &messages))
    }
}

/// Rewrite the message sequence with skill summaries and triggered content.
///
/// Returns a new sequence; the inputs are never mutated. Call exactly once
/// per outgoing request on the original sequence — re-running it on its own
/// output would inject a second, redundant block.
pub fn inject_skills(
    selected_ids: &HashSet<SkillId>,
    catalog: &[Skill],
    messages: &[Message],
) -> Vec<Message> {
    let selected: Vec<&Skill> = catalog
        .iter()
        .filter(|skill| skill.enabled && selected_ids.contains(&skill.id))
        .collect();

    if selected.is_empty() {
        return messages.to_vec();
    }

    let meta = build_meta_block(&selected);

    let window_start = messages.len().saturating_sub(CONTEXT_SCAN_WINDOW);
    let context = messages[window_start..]
        .iter()
        .map(|m| m.text_content())
        .collect::<Vec<_>>()
        .join("\n");

    // Only keyword-gated skills ever expand; Always-mode skills are
    // summary-only and Never-mode skills never expand.
    let triggered: Vec<&Skill> = selected
        .iter()
        .copied()
        .filter(|skill| {
            skill.trigger_mode == TriggerMode::Keyword && skill.should_trigger(&context)
        })
        .collect();

    debug!(
        selected = selected.len(),
        triggered = triggered.len(),
        "injecting skill context"
    );

    let mut result: Vec<Message> = messages.to_vec();

    if !meta.trim().is_empty() {
        match result.iter().position(|m| m.role == Role::System) {
            Some(index) => {
                result[index] = append_to_system_text(&result[index], &meta);
            }
            None => {
                result.insert(0, Message::system(meta));
            }
        }
    }

    let detail = build_detail_block(&triggered);
    if !detail.trim().is_empty() {
        let wrapped = format!("[Skill Context Activated]\n{detail}\n[End of Skill Context]");
        // Immediately before the newest message.
        let index = result.len().saturating_sub(1);
        result.insert(index, Message::system(wrapped));
    }

    result
}

/// Copy of a message with the meta block appended after its text, keeping
/// the role and all non-text content blocks unchanged.
fn append_to_system_text(message: &Message, extra: &str) -> Message {
    let text = format!("{}\n\n{}", message.text_content(), extra);
    let mut content = vec![MessageContent::Text { text }];
    content.extend(message.content.iter().filter(|c| !c.is_text()).cloned());
    Message {
        content,
        ..message.clone()
    }
}

/// One bullet per selected skill: name plus a truncated description.
fn build_meta_block(skills: &[&Skill]) -> String {
    let mut block = String::new();
    block.push_str("--- Agent Skills ---\n");
    block.push_str("The following skills are available for this assistant:\n\n");

    for skill in skills {
        block.push_str(&format!("• **{}**", skill.name));
        if !skill.description.trim().is_empty() {
            let preview: String = skill
                .description
                .chars()
                .take(DESCRIPTION_PREVIEW_CHARS)
                .collect();
            block.push_str(": ");
            block.push_str(&preview);
            if skill.description.chars().count() > DESCRIPTION_PREVIEW_CHARS {
                block.push_str("...");
            }
        }
        block.push('\n');
    }

    block.push_str("\nThe detailed skill content will be injected when relevant.\n---");
    block
}

/// Full content of every triggered skill, divider-separated.
fn build_detail_block(skills: &[&Skill]) -> String {
    let mut block = String::new();
    for (index, skill) in skills.iter().enumerate() {
        if index > 0 {
            block.push_str("\n\n---\n\n");
        }
        block.push_str(&format!("### Skill: {}\n", skill.name));
        if !skill.description.trim().is_empty() {
            block.push_str(&format!("*{}*\n\n", skill.description));
        }
        block.push_str(skill.content.trim());
    }
    block.trim().to_string()
}
