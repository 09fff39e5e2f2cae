use chrono::{DateTime, Utc};
use loadout_core::SkillId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A skill record — an importable instruction pack whose content can be
/// injected into a conversation.
///
/// Records are immutable once constructed: edits go through whole-record
/// replacement (copy with changes), never in-place field mutation. Every
/// field has a default, so a partially-specified document or persisted
/// record always yields a usable skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    /// Unique id, generated at creation and never reassigned.
    pub id: SkillId,
    pub name: String,
    /// Short description shown in the per-request skill summary.
    pub description: String,
    /// The full Markdown body (detailed instructions for the model).
    pub content: String,
    pub author: String,
    pub version: String,
    /// Icon path or URI, set by the import collaborator after parsing.
    pub icon: Option<String>,
    pub source: SkillSource,
    /// Origin URL, set only for marketplace installs.
    pub source_url: Option<String>,
    pub enabled: bool,

    /// When the skill's full content is injected.
    pub trigger_mode: TriggerMode,
    /// Keywords consulted in [`TriggerMode::Keyword`] mode only.
    pub trigger_keywords: Vec<String>,
    /// Treat each keyword as a regex pattern instead of a literal substring.
    pub use_regex: bool,
    pub case_sensitive: bool,
    /// Advisory hint: how many trailing messages the author intends to be
    /// scanned for keyword matches. Not enforced by the evaluator, which
    /// receives a pre-built context window.
    pub scan_depth: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Where a skill record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSource {
    Local,
    Marketplace,
}

/// Policy governing whether a skill's full content is ever injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// Summarized on every request; detailed content is never expanded.
    Always,
    /// Expanded when any trigger keyword matches the recent conversation.
    Keyword,
    /// Kept in the summary listing only; detailed content never expands.
    Never,
}

impl Default for TriggerMode {
    fn default() -> Self {
        TriggerMode::Always
    }
}

impl TriggerMode {
    /// Case-insensitive parse that falls back to [`TriggerMode::Always`]
    /// for any unrecognized value.
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "keyword" => TriggerMode::Keyword,
            "never" => TriggerMode::Never,
            _ => TriggerMode::Always,
        }
    }
}

impl Default for Skill {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            content: String::new(),
            author: String::new(),
            version: "1.0.0".into(),
            icon: None,
            source: SkillSource::Local,
            source_url: None,
            enabled: true,
            trigger_mode: TriggerMode::Always,
            trigger_keywords: Vec::new(),
            use_regex: false,
            case_sensitive: false,
            scan_depth: 3,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Skill {
    /// Copy with marketplace provenance, used by the marketplace
    /// collaborator after parsing a downloaded document.
    pub fn with_source_url(self, url: impl Into<String>) -> Self {
        Self {
            source: SkillSource::Marketplace,
            source_url: Some(url.into()),
            ..self
        }
    }

    /// Copy with an icon reference, used by the import collaborator once it
    /// has persisted the icon bytes.
    pub fn with_icon(self, icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let skill = Skill::default();
        assert!(skill.name.is_empty());
        assert_eq!(skill.version, "1.0.0");
        assert_eq!(skill.source, SkillSource::Local);
        assert_eq!(skill.trigger_mode, TriggerMode::Always);
        assert!(skill.enabled);
        assert!(!skill.use_regex);
        assert!(!skill.case_sensitive);
        assert_eq!(skill.scan_depth, 3);
        assert!(skill.trigger_keywords.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(Skill::default().id, Skill::default().id);
    }

    #[test]
    fn trigger_mode_parse_lossy() {
        assert_eq!(TriggerMode::parse_lossy("keyword"), TriggerMode::Keyword);
        assert_eq!(TriggerMode::parse_lossy("KEYWORD"), TriggerMode::Keyword);
        assert_eq!(TriggerMode::parse_lossy("Never"), TriggerMode::Never);
        assert_eq!(TriggerMode::parse_lossy("always"), TriggerMode::Always);
        assert_eq!(TriggerMode::parse_lossy("whenever"), TriggerMode::Always);
        assert_eq!(TriggerMode::parse_lossy(""), TriggerMode::Always);
    }

    #[test]
    fn with_source_url_marks_marketplace() {
        let skill = Skill::default().with_source_url("https://example.com/skill/1");
        assert_eq!(skill.source, SkillSource::Marketplace);
        assert_eq!(skill.source_url.as_deref(), Some("https://example.com/skill/1"));
    }

    #[test]
    fn with_icon_sets_reference() {
        let skill = Skill::default().with_icon("icons/review.png");
        assert_eq!(skill.icon.as_deref(), Some("icons/review.png"));
        assert_eq!(skill.source, SkillSource::Local);
    }

    #[test]
    fn serde_fills_missing_fields_with_defaults() {
        let skill: Skill = serde_json::from_str(r#"{"name": "partial"}"#).unwrap();
        assert_eq!(skill.name, "partial");
        assert_eq!(skill.version, "1.0.0");
        assert_eq!(skill.trigger_mode, TriggerMode::Always);
        assert!(skill.enabled);
    }

    #[test]
    fn serde_roundtrip() {
        let skill = Skill {
            name: "roundtrip".into(),
            trigger_mode: TriggerMode::Keyword,
            trigger_keywords: vec!["a".into(), "b".into()],
            ..Skill::default()
        };
        let json = serde_json::to_string(&skill).unwrap();
        assert!(json.contains("\"triggerMode\":\"keyword\""));
        let restored: Skill = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, skill.id);
        assert_eq!(restored.trigger_keywords, skill.trigger_keywords);
    }
}
