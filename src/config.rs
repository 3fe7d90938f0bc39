use crate::core::Result;
use crate::record::DEFAULT_TEMP_ID_PREFIX;
use serde::{Deserialize, Serialize};

/// Which mutation a notification message describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

/// Optimistic list store configuration
///
/// Every field has a default, so a JSON config only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Logical store name used in log lines
    pub name: String,

    /// Entity label used in notification text ("Item created successfully")
    pub entity_label: String,

    /// Marker prepended to temporary ids
    pub temp_id_prefix: String,

    /// Reject update/delete on an id that already has an operation in flight
    pub single_flight: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "items".to_string(),
            entity_label: "Item".to_string(),
            temp_id_prefix: DEFAULT_TEMP_ID_PREFIX.to_string(),
            single_flight: true,
        }
    }
}

impl StoreConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Load a config from JSON; absent keys keep their defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Set the entity label
    pub fn entity_label(mut self, label: &str) -> Self {
        self.entity_label = label.to_string();
        self
    }

    /// Set the temporary id prefix
    pub fn temp_id_prefix(mut self, prefix: &str) -> Self {
        self.temp_id_prefix = prefix.to_string();
        self
    }

    /// Enable or disable per-id single-flight
    pub fn single_flight(mut self, enabled: bool) -> Self {
        self.single_flight = enabled;
        self
    }

    pub fn success_message(&self, kind: MutationKind) -> String {
        format!("{} {} successfully", self.entity_label, kind.past_tense())
    }

    pub fn failure_message(&self, kind: MutationKind) -> String {
        format!(
            "Failed to {} {}",
            kind.verb(),
            self.entity_label.to_lowercase()
        )
    }

    pub fn fetch_failure_message(&self) -> String {
        format!("Failed to fetch {}s", self.entity_label.to_lowercase())
    }
}
