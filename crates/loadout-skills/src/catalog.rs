//! In-memory skill catalog.
//!
//! Holds the assistant's skill records in insertion order. Edits are
//! whole-record replacements; persistence lives outside this crate.

use std::collections::HashSet;

use chrono::Utc;
use loadout_core::{LoadoutError, Result, SkillId};
use tracing::{debug, info};

use crate::skill::Skill;

/// Ordered collection of skill records with unique ids.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new record. Ids are unique across the catalog.
    pub fn insert(&mut self, skill: Skill) -> Result<()> {
        if self.skills.iter().any(|s| s.id == skill.id) {
            return Err(LoadoutError::Catalog(format!(
                "duplicate skill id {}",
                skill.id
            )));
        }
        info!(skill = %skill.name, id = %skill.id, "skill added to catalog");
        self.skills.push(skill);
        Ok(())
    }

    pub fn get(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Replace an existing record wholesale, refreshing `updated_at`.
    pub fn replace(&mut self, skill: Skill) -> Result<()> {
        let slot = self
            .skills
            .iter_mut()
            .find(|s| s.id == skill.id)
            .ok_or(LoadoutError::SkillNotFound(skill.id))?;
        *slot = Skill {
            updated_at: Utc::now(),
            ..skill
        };
        Ok(())
    }

    /// Flip the enabled flag via copy-with-changes.
    pub fn set_enabled(&mut self, id: SkillId, enabled: bool) -> Result<()> {
        let current = self
            .get(id)
            .cloned()
            .ok_or(LoadoutError::SkillNotFound(id))?;
        self.replace(Skill { enabled, ..current })
    }

    /// Remove a record, returning it if present. Callers that keep
    /// selected-skill-id sets must purge the id from them afterwards
    /// (see [`SkillCatalog::purge_selection`]).
    pub fn remove(&mut self, id: SkillId) -> Option<Skill> {
        let pos = self.skills.iter().position(|s| s.id == id)?;
        let removed = self.skills.remove(pos);
        debug!(skill = %removed.name, id = %id, "skill removed from catalog");
        Some(removed)
    }

    /// Drop ids that no longer refer to a catalog record from a
    /// selected-skill-id set.
    pub fn purge_selection(&self, selection: &mut HashSet<SkillId>) {
        selection.retain(|id| self.skills.iter().any(|s| s.id == *id));
    }

    /// All records in insertion order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_and_order() {
        let mut catalog = SkillCatalog::new();
        let first = Skill {
            name: "first".into(),
            ..Skill::default()
        };
        let second = Skill {
            name: "second".into(),
            ..Skill::default()
        };
        let first_id = first.id;

        catalog.insert(first).unwrap();
        catalog.insert(second).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(first_id).unwrap().name, "first");
        let names: Vec<_> = catalog.skills().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut catalog = SkillCatalog::new();
        let skill = Skill::default();
        let dup = skill.clone();
        catalog.insert(skill).unwrap();
        assert!(catalog.insert(dup).is_err());
    }

    #[test]
    fn replace_refreshes_updated_at() {
        let mut catalog = SkillCatalog::new();
        let skill = Skill {
            name: "before".into(),
            ..Skill::default()
        };
        let id = skill.id;
        let created_at = skill.created_at;
        catalog.insert(skill).unwrap();

        let edited = Skill {
            name: "after".into(),
            ..catalog.get(id).unwrap().clone()
        };
        catalog.replace(edited).unwrap();

        let stored = catalog.get(id).unwrap();
        assert_eq!(stored.name, "after");
        assert_eq!(stored.created_at, created_at);
        assert!(stored.updated_at >= created_at);
    }

    #[test]
    fn replace_unknown_id_errors() {
        let mut catalog = SkillCatalog::new();
        assert!(matches!(
            catalog.replace(Skill::default()),
            Err(LoadoutError::SkillNotFound(_))
        ));
    }

    #[test]
    fn set_enabled() {
        let mut catalog = SkillCatalog::new();
        let skill = Skill::default();
        let id = skill.id;
        catalog.insert(skill).unwrap();

        catalog.set_enabled(id, false).unwrap();
        assert!(!catalog.get(id).unwrap().enabled);
        catalog.set_enabled(id, true).unwrap();
        assert!(catalog.get(id).unwrap().enabled);
    }

    #[test]
    fn remove_and_purge_selection() {
        let mut catalog = SkillCatalog::new();
        let keep = Skill::default();
        let doomed = Skill::default();
        let keep_id = keep.id;
        let doomed_id = doomed.id;
        catalog.insert(keep).unwrap();
        catalog.insert(doomed).unwrap();

        let mut selection: HashSet<SkillId> = [keep_id, doomed_id].into_iter().collect();

        let removed = catalog.remove(doomed_id).unwrap();
        assert_eq!(removed.id, doomed_id);
        assert!(catalog.remove(doomed_id).is_none());

        catalog.purge_selection(&mut selection);
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&keep_id));
    }
}
