use super::ListRecord;
use super::validation::{email, min_chars, optional};
use crate::core::ValidationError;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

pub const EARLIEST_GRADUATION_YEAR: i32 = 1950;

const NAME_MESSAGE: &str = "Name must be at least 2 characters";
const COURSE_MESSAGE: &str = "Course must be at least 2 characters";
const PHONE_MESSAGE: &str = "Phone must be at least 10 digits";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniProfile {
    pub id: String,
    pub name: String,
    pub graduation_year: i32,
    pub course: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniDraft {
    pub name: String,
    pub graduation_year: i32,
    pub course: String,
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl AlumniDraft {
    pub fn new(name: impl Into<String>, graduation_year: i32, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graduation_year,
            course: course.into(),
            ..Self::default()
        }
    }

    pub fn position_at(mut self, position: impl Into<String>, company: impl Into<String>) -> Self {
        self.current_position = Some(position.into());
        self.company = Some(company.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Partial alumni update; outer `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniPatch {
    pub name: Option<String>,
    pub graduation_year: Option<i32>,
    pub course: Option<String>,
    pub current_position: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub bio: Option<Option<String>>,
}

impl AlumniPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn graduation_year(mut self, year: i32) -> Self {
        self.graduation_year = Some(year);
        self
    }

    pub fn position_at(mut self, position: impl Into<String>, company: impl Into<String>) -> Self {
        self.current_position = Some(Some(position.into()));
        self.company = Some(Some(company.into()));
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = Some(email);
        self
    }
}

fn graduation_year(year: i32) -> Result<(), ValidationError> {
    if year < EARLIEST_GRADUATION_YEAR {
        return Err(ValidationError::new(
            "graduation_year",
            "Invalid graduation year",
        ));
    }
    if year > Utc::now().year() {
        return Err(ValidationError::new(
            "graduation_year",
            "Graduation year cannot be in the future",
        ));
    }
    Ok(())
}

fn contact(email_value: Option<&str>, phone_value: Option<&str>) -> Result<(), ValidationError> {
    optional(email_value, |value| email("email", value))?;
    optional(phone_value, |value| min_chars("phone", value, 10, PHONE_MESSAGE))
}

fn merge<T: Clone>(slot: &mut T, update: &Option<T>) {
    if let Some(value) = update {
        *slot = value.clone();
    }
}

impl ListRecord for AlumniProfile {
    type Draft = AlumniDraft;
    type Patch = AlumniPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn from_draft(draft: AlumniDraft, id: String, created_at: String) -> Self {
        Self {
            id,
            name: draft.name,
            graduation_year: draft.graduation_year,
            course: draft.course,
            current_position: draft.current_position,
            company: draft.company,
            email: draft.email,
            phone: draft.phone,
            bio: draft.bio,
            created_at: Some(created_at),
        }
    }

    fn apply_patch(&mut self, patch: &AlumniPatch) {
        merge(&mut self.name, &patch.name);
        merge(&mut self.graduation_year, &patch.graduation_year);
        merge(&mut self.course, &patch.course);
        merge(&mut self.current_position, &patch.current_position);
        merge(&mut self.company, &patch.company);
        merge(&mut self.email, &patch.email);
        merge(&mut self.phone, &patch.phone);
        merge(&mut self.bio, &patch.bio);
    }

    fn validate_draft(draft: &AlumniDraft) -> Result<(), ValidationError> {
        min_chars("name", &draft.name, 2, NAME_MESSAGE)?;
        graduation_year(draft.graduation_year)?;
        min_chars("course", &draft.course, 2, COURSE_MESSAGE)?;
        contact(draft.email.as_deref(), draft.phone.as_deref())
    }

    fn validate_patch(patch: &AlumniPatch) -> Result<(), ValidationError> {
        if let Some(name) = &patch.name {
            min_chars("name", name, 2, NAME_MESSAGE)?;
        }
        if let Some(year) = patch.graduation_year {
            graduation_year(year)?;
        }
        if let Some(course) = &patch.course {
            min_chars("course", course, 2, COURSE_MESSAGE)?;
        }
        contact(
            patch.email.as_ref().and_then(|value| value.as_deref()),
            patch.phone.as_ref().and_then(|value| value.as_deref()),
        )
    }
}
