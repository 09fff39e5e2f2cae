use uuid::Uuid;

/// Unique identifier for a skill record.
pub type SkillId = Uuid;
