use super::ListRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_KEY: &str = "id";
const CREATED_AT_KEY: &str = "created_at";

/// Schemaless row for tables without a dedicated record type.
///
/// Drafts and patches are JSON objects. Patching is a shallow key-by-key merge;
/// an `id` key in a patch is ignored and a `created_at` key must be a string or
/// `null` to take effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl JsonRecord {
    pub fn new(id: impl Into<String>, created_at: Option<&str>, fields: Map<String, Value>) -> Self {
        let mut record = Self {
            id: id.into(),
            created_at: created_at.map(str::to_string),
            fields: Map::new(),
        };
        for (key, value) in fields {
            record.merge_field(key, value);
        }
        record
    }

    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn merge_field(&mut self, key: String, value: Value) {
        match key.as_str() {
            ID_KEY => {}
            CREATED_AT_KEY => match value {
                Value::String(at) => self.created_at = Some(at),
                Value::Null => self.created_at = None,
                _ => {}
            },
            _ => {
                self.fields.insert(key, value);
            }
        }
    }
}

impl ListRecord for JsonRecord {
    type Draft = Map<String, Value>;
    type Patch = Map<String, Value>;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn from_draft(draft: Map<String, Value>, id: String, created_at: String) -> Self {
        let mut record = Self::new(id, None, draft);
        record.created_at = Some(created_at);
        record
    }

    fn apply_patch(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            self.merge_field(key.clone(), value.clone());
        }
    }
}
