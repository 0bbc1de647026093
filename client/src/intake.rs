//! Project-intake form model and validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The new-project page validates in the browser before submitting, and the
//! server runs the same `validate` on the JSON it receives, so both sides
//! agree on what a well-formed request is.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    #[default]
    Residential,
    Commercial,
    Industrial,
    Renovation,
}

impl ProjectCategory {
    pub const ALL: [Self; 4] = [Self::Residential, Self::Commercial, Self::Industrial, Self::Renovation];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Renovation => "renovation",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
            Self::Renovation => "Renovation",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Raw form values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub client_name: String,
    pub client_email: String,
    pub category: String,
    pub location: String,
    pub budget: String,
    pub start_date: String,
    pub description: String,
}

/// A validated intake request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub title: String,
    pub client_name: String,
    pub client_email: String,
    pub category: ProjectCategory,
    pub location: String,
    pub budget_usd: Option<u64>,
    pub start_date: Option<Date>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Project title is required.")]
    MissingTitle,
    #[error("Project title must be at most 120 characters.")]
    TitleTooLong,
    #[error("Client name is required.")]
    MissingClientName,
    #[error("Enter a valid client email.")]
    InvalidEmail,
    #[error("Choose a project category.")]
    InvalidCategory,
    #[error("Project location is required.")]
    MissingLocation,
    #[error("Budget must be a whole dollar amount above zero.")]
    InvalidBudget,
    #[error("Start date must look like YYYY-MM-DD.")]
    InvalidStartDate,
    #[error("Description must be at most 2000 characters.")]
    DescriptionTooLong,
}

/// Lowercased address if it has exactly one `@` with text on both sides.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let mut parts = normalized.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    if local.is_empty() || domain.is_empty() || normalized.contains(char::is_whitespace) {
        return None;
    }
    Some(normalized)
}

/// Parse `"$1,250,000"`-style budgets into whole dollars. Blank is `None`.
///
/// # Errors
///
/// Returns [`IntakeError::InvalidBudget`] for anything that is not a positive
/// whole number once `$`, `,` and surrounding spaces are removed.
pub fn parse_budget(raw: &str) -> Result<Option<u64>, IntakeError> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    if cleaned.is_empty() {
        return Ok(None);
    }
    match cleaned.parse::<u64>() {
        Ok(0) | Err(_) => Err(IntakeError::InvalidBudget),
        Ok(value) => Ok(Some(value)),
    }
}

/// Parse an ISO calendar date. Blank is `None`.
///
/// # Errors
///
/// Returns [`IntakeError::InvalidStartDate`] when the text is not `YYYY-MM-DD`.
pub fn parse_start_date(raw: &str) -> Result<Option<Date>, IntakeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|_| IntakeError::InvalidStartDate)
}

impl ProjectDraft {
    /// Validate every field, reporting the first problem in form order.
    ///
    /// # Errors
    ///
    /// Returns the [`IntakeError`] for the first invalid field.
    pub fn validate(&self) -> Result<ProjectRequest, IntakeError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(IntakeError::MissingTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(IntakeError::TitleTooLong);
        }
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err(IntakeError::MissingClientName);
        }
        let client_email = normalize_email(&self.client_email).ok_or(IntakeError::InvalidEmail)?;
        let category = ProjectCategory::parse(&self.category).ok_or(IntakeError::InvalidCategory)?;
        let location = self.location.trim();
        if location.is_empty() {
            return Err(IntakeError::MissingLocation);
        }
        let budget_usd = parse_budget(&self.budget)?;
        let start_date = parse_start_date(&self.start_date)?;
        let description = self.description.trim();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(IntakeError::DescriptionTooLong);
        }

        Ok(ProjectRequest {
            title: title.to_owned(),
            client_name: client_name.to_owned(),
            client_email,
            category,
            location: location.to_owned(),
            budget_usd,
            start_date,
            description: (!description.is_empty()).then(|| description.to_owned()),
        })
    }
}

impl ProjectRequest {
    /// Re-run validation on an already-typed request, e.g. one decoded from
    /// JSON on the server.
    ///
    /// # Errors
    ///
    /// Returns the [`IntakeError`] for the first invalid field.
    pub fn revalidate(&self) -> Result<Self, IntakeError> {
        ProjectDraft::from(self).validate()
    }
}

impl From<&ProjectRequest> for ProjectDraft {
    fn from(request: &ProjectRequest) -> Self {
        Self {
            title: request.title.clone(),
            client_name: request.client_name.clone(),
            client_email: request.client_email.clone(),
            category: request.category.as_str().to_owned(),
            location: request.location.clone(),
            budget: request.budget_usd.map(|b| b.to_string()).unwrap_or_default(),
            start_date: request
                .start_date
                .and_then(|d| d.format(format_description!("[year]-[month]-[day]")).ok())
                .unwrap_or_default(),
            description: request.description.clone().unwrap_or_default(),
        }
    }
}
