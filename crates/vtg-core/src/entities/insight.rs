use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::insight_id;

/// A single candidate technique, tool, or procedure mined from source material.
///
/// The description is the only real signal the engine has. No numeric input is
/// trusted; every score is derived from text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightItem {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub source_reference: Option<String>,
}

impl InsightItem {
    /// Build an item with an id derived from the title.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: insight_id(&title),
            title,
            description: description.into(),
            tags: BTreeSet::new(),
            source_reference: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_reference = Some(source.into());
        self
    }

    /// Fill in a derived id when the record arrived without one.
    #[must_use]
    pub fn ensure_id(mut self) -> Self {
        if self.id.trim().is_empty() {
            self.id = insight_id(&self.title);
        }
        self
    }

    /// The only schema rule applied to input: a non-empty title.
    ///
    /// An empty description is accepted here and degraded during analysis.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "insight '{}' has an empty title",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_id_from_title() {
        let item = InsightItem::new("Basic API Setup", "Needs an API key");
        assert_eq!(item.id, insight_id("Basic API Setup"));
    }

    #[test]
    fn ensure_id_keeps_existing_id() {
        let item = InsightItem::new("A", "b").with_id("custom");
        assert_eq!(item.ensure_id().id, "custom");
    }

    #[test]
    fn missing_fields_deserialize_with_defaults() {
        let item: InsightItem = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert!(item.id.is_empty());
        assert!(item.description.is_empty());
        assert!(item.tags.is_empty());
        assert_eq!(item.ensure_id().id, insight_id("Only a title"));
    }

    #[test]
    fn validate_rejects_blank_title_only() {
        assert!(InsightItem::new("  ", "text").validate().is_err());
        assert!(InsightItem::new("Title", "").validate().is_ok());
    }
}
