//! # Signup Form Client
//!
//! Client-side half of the signup flow: transient form state, presence
//! validation, and submission of the JSON payload to the signup endpoint.
//! All failures are normalized into a single displayable message and the
//! submit control is re-enabled on every exit path; success reports a
//! navigation to the confirmation view.

use serde_json::Value;
use thiserror::Error;

use crate::handlers::signup::SignupRequest;

/// Fixed option list offered by the industry selector.
pub const INDUSTRY_OPTIONS: &[&str] = &[
    "Arts",
    "Tourism",
    "Construction",
    "Education",
    "Finance",
    "Healthcare",
    "Hospitality",
    "Manufacturing",
    "Retail",
    "Technology",
    "Transportation",
    "Other",
    "Information Technology",
    "Agency",
];

/// Sentinel selector value that enables the free-text industry override.
pub const INDUSTRY_OTHER: &str = "Other";

/// Text fields addressable by [`SignupForm::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Industry,
    IndustryOther,
    JobTitle,
    Organisation,
    Phone,
    Interest,
}

/// Local validation failures, rendered verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Please specify your industry.")]
    MissingIndustryOverride,
}

/// Transient signup form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub industry: String,
    pub industry_other: String,
    pub job_title: String,
    pub organisation: String,
    pub phone: String,
    pub interest: String,
    pub agree: bool,
}

impl SignupForm {
    /// Update the named field. Moving the industry selector away from the
    /// "Other" sentinel clears the override field as a side effect.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Industry => {
                self.industry = value.to_string();
                if value != INDUSTRY_OTHER {
                    self.industry_other.clear();
                }
            }
            Field::IndustryOther => self.industry_other = value.to_string(),
            Field::JobTitle => self.job_title = value.to_string(),
            Field::Organisation => self.organisation = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::Interest => self.interest = value.to_string(),
        }
    }

    /// Update the consent checkbox.
    pub fn set_agree(&mut self, agree: bool) {
        self.agree = agree;
    }

    /// Presence validation over the required fields.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.job_title.is_empty()
            || self.industry.is_empty()
            || self.organisation.is_empty()
            || self.phone.is_empty()
        {
            return Err(FormError::MissingRequiredFields);
        }
        if self.industry == INDUSTRY_OTHER && self.industry_other.is_empty() {
            return Err(FormError::MissingIndustryOverride);
        }
        Ok(())
    }

    /// Industry value to submit: the free-text override when "Other" is
    /// selected, otherwise the selector value.
    pub fn resolved_industry(&self) -> &str {
        if self.industry == INDUSTRY_OTHER && !self.industry_other.is_empty() {
            &self.industry_other
        } else {
            &self.industry
        }
    }

    /// Build the JSON payload for submission.
    pub fn to_payload(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            industry: self.resolved_industry().to_string(),
            job_title: self.job_title.clone(),
            organisation: self.organisation.clone(),
            phone: self.phone.clone(),
            interest: Some(self.interest.clone()),
            agree: self.agree,
        }
    }
}

/// Form controller owning the form state, the in-progress flag, and the
/// current error message.
pub struct FormController {
    pub form: SignupForm,
    endpoint: String,
    http: reqwest::Client,
    submitting: bool,
    error: Option<String>,
}

impl FormController {
    /// Create a controller submitting to the given signup endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            form: SignupForm::default(),
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
            submitting: false,
            error: None,
        }
    }

    /// Whether a submission is currently in flight (the submit control is
    /// disabled while this is true).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The current user-visible error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form. Returns true when the submission succeeded and the
    /// user should be navigated to the confirmation view. One attempt per
    /// call; no retry logic.
    pub async fn submit(&mut self) -> bool {
        self.error = None;

        if let Err(validation) = self.form.validate() {
            self.error = Some(validation.to_string());
            return false;
        }

        self.submitting = true;
        let result = self.post().await;
        self.submitting = false;

        match result {
            Ok(()) => true,
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    async fn post(&self) -> Result<(), String> {
        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(&self.form.to_payload())
            .send()
            .await
            .map_err(|_| "Network error. Please try again.".to_string())?;

        if response.status() == reqwest::StatusCode::CONFLICT {
            return Err("This email has already signed up.".to_string());
        }

        if !response.status().is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| "Something went wrong. Please try again.".to_string());
            return Err(message);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Industry, "Technology");
        form.set(Field::JobTitle, "Engineer");
        form.set(Field::Organisation, "Acme");
        form.set(Field::Phone, "+1-555-0100");
        form.set_agree(true);
        form
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_missing_required_field() {
        let mut form = filled_form();
        form.set(Field::Phone, "");
        assert_eq!(form.validate(), Err(FormError::MissingRequiredFields));
    }

    #[test]
    fn test_validate_rejects_other_without_override() {
        let mut form = filled_form();
        form.set(Field::Industry, INDUSTRY_OTHER);
        assert_eq!(form.validate(), Err(FormError::MissingIndustryOverride));

        form.set(Field::IndustryOther, "Non-profit");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_leaving_other_clears_override() {
        let mut form = filled_form();
        form.set(Field::Industry, INDUSTRY_OTHER);
        form.set(Field::IndustryOther, "Non-profit");

        form.set(Field::Industry, "Finance");
        assert_eq!(form.industry_other, "");
        assert_eq!(form.resolved_industry(), "Finance");
    }

    #[test]
    fn test_payload_resolves_other_override() {
        let mut form = filled_form();
        form.set(Field::Industry, INDUSTRY_OTHER);
        form.set(Field::IndustryOther, "Non-profit");

        let payload = form.to_payload();
        assert_eq!(payload.industry, "Non-profit");
        assert_eq!(payload.email, "ada@example.com");
    }

    #[test]
    fn test_payload_uses_selector_value_otherwise() {
        let payload = filled_form().to_payload();
        assert_eq!(payload.industry, "Technology");
        assert!(payload.agree);
    }

    #[tokio::test]
    async fn test_submit_blocks_locally_on_validation_failure() {
        // Unroutable endpoint: a network attempt would surface as a network
        // error message rather than the validation message.
        let mut controller = FormController::new("http://127.0.0.1:1/api/signup");
        controller.form = filled_form();
        controller.form.set(Field::Industry, INDUSTRY_OTHER);

        let navigated = controller.submit().await;

        assert!(!navigated);
        assert_eq!(controller.error(), Some("Please specify your industry."));
        assert!(!controller.is_submitting());
    }
}
