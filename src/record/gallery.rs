use super::ListRecord;
use super::validation::{min_chars, url};
use crate::core::ValidationError;
use serde::{Deserialize, Serialize};

const TITLE_MESSAGE: &str = "Title must be at least 2 characters";
const IMAGE_URL_MESSAGE: &str = "Please enter a valid image URL";

/// One picture on the public gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
}

impl GalleryDraft {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            image_url: image_url.into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial gallery update. `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl GalleryPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

impl ListRecord for GalleryImage {
    type Draft = GalleryDraft;
    type Patch = GalleryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn from_draft(draft: GalleryDraft, id: String, created_at: String) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            created_at: Some(created_at),
        }
    }

    fn apply_patch(&mut self, patch: &GalleryPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = image_url.clone();
        }
    }

    fn validate_draft(draft: &GalleryDraft) -> Result<(), ValidationError> {
        min_chars("title", &draft.title, 2, TITLE_MESSAGE)?;
        url("image_url", &draft.image_url, IMAGE_URL_MESSAGE)
    }

    fn validate_patch(patch: &GalleryPatch) -> Result<(), ValidationError> {
        if let Some(title) = &patch.title {
            min_chars("title", title, 2, TITLE_MESSAGE)?;
        }
        if let Some(image_url) = &patch.image_url {
            url("image_url", image_url, IMAGE_URL_MESSAGE)?;
        }
        Ok(())
    }
}
