use thiserror::Error;

use crate::types::SkillId;

/// Unified error type for the Loadout workspace.
#[derive(Error, Debug)]
pub enum LoadoutError {
    // ── Catalog errors ─────────────────────────────────────────
    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("skill not found: {0}")]
    SkillNotFound(SkillId),

    // ── Pipeline errors ────────────────────────────────────────
    #[error("transform error: {0}")]
    Transform(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LoadoutError>;
