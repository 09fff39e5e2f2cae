//! Trigger evaluation — decides whether a skill's detailed content is
//! relevant to the recent conversation.

use regex::RegexBuilder;

use crate::skill::{Skill, TriggerMode};

impl Skill {
    /// Whether this skill's trigger condition matches the given context
    /// window. Pure and total: an invalid regex keyword is a non-match for
    /// that keyword only, the remaining keywords are still evaluated.
    pub fn should_trigger(&self, context: &str) -> bool {
        match self.trigger_mode {
            TriggerMode::Always => true,
            TriggerMode::Never => false,
            TriggerMode::Keyword => {
                if self.trigger_keywords.is_empty() {
                    return false;
                }
                self.trigger_keywords
                    .iter()
                    .any(|keyword| self.keyword_matches(keyword, context))
            }
        }
    }

    fn keyword_matches(&self, keyword: &str, context: &str) -> bool {
        if self.use_regex {
            match RegexBuilder::new(keyword)
                .case_insensitive(!self.case_sensitive)
                .build()
            {
                Ok(pattern) => pattern.is_match(context),
                Err(_) => false,
            }
        } else if self.case_sensitive {
            context.contains(keyword)
        } else {
            context.to_lowercase().contains(&keyword.to_lowercase())
        }
    }
}
