//! Contact form validation and the EmailJS request body.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

pub const SEND_SUCCESS_MESSAGE: &str = "✅ Message sent successfully!";
pub const SEND_FAILURE_MESSAGE: &str = "❌ Failed to send message. Please try again later.";

/// Validation failures; `Display` is the text shown to the visitor.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("❌ Incorrect email address")]
    InvalidEmail,
    #[error("❌ Please fill in all fields")]
    MissingFields,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Raw form input, trimmed on construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }

    /// Email shape is checked before the required fields.
    pub fn validate(self) -> Result<ValidContact, ContactError> {
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.name.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        Ok(ValidContact(self))
    }
}

/// A form that passed [`ContactForm::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidContact(ContactForm);

impl ValidContact {
    pub fn form(&self) -> &ContactForm {
        &self.0
    }

    /// Template parameters stamped with the submission `time`.
    pub fn into_params(self, time: String) -> TemplateParams {
        let ContactForm {
            name,
            email,
            message,
        } = self.0;
        TemplateParams {
            name,
            email,
            message,
            time,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
    pub time: String,
}

/// EmailJS account settings. These are the public client-side identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailConfig {
    pub endpoint: String,
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_owned(),
            public_key: "QAn2yE_DKgruVa590".to_owned(),
            service_id: "service_rmxhyyi".to_owned(),
            template_id: "template_cw3f92c".to_owned(),
        }
    }
}

/// JSON body of an EmailJS `email/send` call.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams,
}

impl MailConfig {
    pub fn request(&self, template_params: TemplateParams) -> SendRequest<'_> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params,
        }
    }
}
