use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{portfolio::PersonalInfo, util::is_valid_email};

/// Fixed delay before demo mode reports success.
pub const DEMO_DELAY_MS: u64 = 2000;

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn min_len(&self) -> usize {
        match self {
            Self::Name => 2,
            Self::Email => 0,
            Self::Subject => 5,
            Self::Message => 10,
        }
    }

    fn required_msg(&self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Email => "Email is required",
            Self::Subject => "Subject is required",
            Self::Message => "Message is required",
        }
    }

    fn invalid_msg(&self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters",
            Self::Email => "Please enter a valid email address",
            Self::Subject => "Subject must be at least 5 characters",
            Self::Message => "Message must be at least 10 characters",
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(field.required_msg());
    }
    let ok = match field {
        // the pattern is checked against the raw value
        Field::Email => is_valid_email(value),
        _ => trimmed.chars().count() >= field.min_len(),
    };
    if ok {
        None
    } else {
        Some(field.invalid_msg())
    }
}

pub fn validate(form: &ContactForm) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|f| validate_field(f, form.get(f)).map(|e| (f, e)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delivery {
    /// Relayed by the email provider.
    Sent,
    /// Demo mode: no provider configured, nothing was sent.
    Simulated,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("could not reach email provider: {0}")]
    Transport(String),
    #[error("email provider responded with status {0}")]
    Status(u16),
    #[error("server error: {0}")]
    Server(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success(Delivery),
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    Busy,
    Invalid,
}

/// Field values, inline errors and submission status of the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    form: ContactForm,
    errors: FieldErrors,
    status: SubmitStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        self.form.set(field, value);
        self.errors.remove(&field);
        if matches!(self.status, SubmitStatus::Success(_) | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Validates and moves to `Submitting`, handing out the form to send.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::Busy);
        }
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            self.status = SubmitStatus::Idle;
            return Err(SubmitRejected::Invalid);
        }
        self.status = SubmitStatus::Submitting;
        Ok(self.form.clone())
    }

    /// Success clears the form; any error keeps the values for a retry.
    pub fn finish(&mut self, res: Result<Delivery, ContactError>) {
        if !self.is_submitting() {
            return;
        }
        match res {
            Ok(delivery) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Success(delivery);
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    /// Nothing typed, no errors and no message showing.
    pub fn is_pristine(&self) -> bool {
        self.form.is_empty() && self.errors.is_empty() && self.status == SubmitStatus::Idle
    }

    pub fn clear(&mut self) {
        if self.is_submitting() {
            return;
        }
        *self = Self::default();
    }

    /// Form-level message for the current status, if any.
    pub fn acknowledgment(&self) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
            SubmitStatus::Success(Delivery::Sent) => {
                Some("✨ Message sent successfully! I'll get back to you soon.")
            }
            SubmitStatus::Success(Delivery::Simulated) => Some(
                "✨ Message received! (Demo mode - email delivery is not configured, so nothing was sent)",
            ),
            SubmitStatus::Error => {
                Some("❌ Failed to send message. Please try again or contact me directly.")
            }
        }
    }
}

/// Credentials for the hosted email provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            service_id: get(ENV_SERVICE_ID),
            template_id: get(ENV_TEMPLATE_ID),
            public_key: get(ENV_PUBLIC_KEY),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn is_configured(&self) -> bool {
        !self.public_key.is_empty()
            && self.service_id.starts_with("service_")
            && self.template_id.starts_with("template_")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub to_email: String,
    pub reply_to: String,
}

impl TemplateParams {
    pub fn new(form: &ContactForm, recipient: &PersonalInfo) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            to_name: recipient.name.to_string(),
            to_email: recipient.email.to_string(),
            reply_to: form.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PERSONAL_INFO;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "0123456789".to_string(),
        }
    }

    #[test]
    fn test_name_length() {
        assert_eq!(validate_field(Field::Name, ""), Some("Name is required"));
        assert_eq!(validate_field(Field::Name, "   "), Some("Name is required"));
        assert_eq!(
            validate_field(Field::Name, " A "),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(validate_field(Field::Name, "Al"), None);
        assert_eq!(validate_field(Field::Name, "  Al  "), None);
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_field(Field::Email, "a@b.com"), None);
        assert_eq!(
            validate_field(Field::Email, "abc"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_field(Field::Email, "a@b"),
            Some("Please enter a valid email address")
        );
        assert_eq!(validate_field(Field::Email, " "), Some("Email is required"));
    }

    #[test]
    fn test_subject_and_message_lengths() {
        assert_eq!(
            validate_field(Field::Subject, "Hell"),
            Some("Subject must be at least 5 characters")
        );
        assert_eq!(
            validate_field(Field::Subject, "  Hi   "),
            Some("Subject must be at least 5 characters")
        );
        assert_eq!(validate_field(Field::Subject, "Hello"), None);
        assert_eq!(
            validate_field(Field::Message, "012345678"),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(validate_field(Field::Message, "0123456789"), None);
    }

    #[test]
    fn test_validate_collects_every_field() {
        assert!(validate(&valid_form()).is_empty());
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Subject], "Subject is required");
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut state = ContactFormState::new();
        state.edit(Field::Name, "A");
        assert_eq!(state.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(
            state.error(Field::Name),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(state.errors().len(), 4);

        // editing a field clears only that field's error
        state.edit(Field::Name, "Al");
        assert_eq!(state.error(Field::Name), None);
        assert_eq!(state.errors().len(), 3);
    }

    #[test]
    fn test_demo_submit_clears_fields() {
        let mut state = ContactFormState::new();
        for field in Field::ALL {
            state.edit(field, valid_form().get(field));
        }
        let form = state.begin_submit().unwrap();
        assert_eq!(form, valid_form());
        assert!(state.is_submitting());

        // controls are disabled while submitting
        state.edit(Field::Name, "ignored");
        assert_eq!(state.value(Field::Name), "Ada");
        assert_eq!(state.begin_submit(), Err(SubmitRejected::Busy));

        state.finish(Ok(Delivery::Simulated));
        assert_eq!(state.status(), SubmitStatus::Success(Delivery::Simulated));
        assert!(state.form().is_empty());
        assert!(state.acknowledgment().unwrap().contains("Demo mode"));
    }

    #[test]
    fn test_failed_submit_keeps_values() {
        let mut state = ContactFormState::new();
        for field in Field::ALL {
            state.edit(field, valid_form().get(field));
        }
        state.begin_submit().unwrap();
        state.finish(Err(ContactError::Status(400)));
        assert_eq!(state.status(), SubmitStatus::Error);
        assert_eq!(state.form(), &valid_form());
        assert!(state.acknowledgment().is_some());

        // any edit returns to idle
        state.edit(Field::Message, "0123456789 and more");
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(state.acknowledgment(), None);
    }

    #[test]
    fn test_rejected_by_server_keeps_values() {
        let mut state = ContactFormState::new();
        for field in Field::ALL {
            state.edit(field, valid_form().get(field));
        }
        state.begin_submit().unwrap();
        let errors = FieldErrors::from([(Field::Email, "Please enter a valid email address")]);
        state.finish(Err(ContactError::Invalid(errors)));
        assert_eq!(state.status(), SubmitStatus::Error);
        assert_eq!(state.form(), &valid_form());
        assert!(state.errors().is_empty());
        assert!(state.acknowledgment().unwrap().starts_with("❌"));
    }

    #[test]
    fn test_pristine_until_touched() {
        let mut state = ContactFormState::new();
        assert!(state.is_pristine());
        state.edit(Field::Subject, "Hi");
        assert!(!state.is_pristine());
        state.edit(Field::Subject, "");
        assert!(state.is_pristine());

        let _ = state.begin_submit();
        assert!(!state.errors().is_empty());
        assert!(!state.is_pristine());
        state.clear();
        assert!(state.is_pristine());
    }

    #[test]
    fn test_finish_without_submit_is_ignored() {
        let mut state = ContactFormState::new();
        state.edit(Field::Name, "Ada");
        state.finish(Ok(Delivery::Sent));
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(state.value(Field::Name), "Ada");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = ContactFormState::new();
        state.edit(Field::Email, "nope");
        let _ = state.begin_submit();
        state.clear();
        assert_eq!(state, ContactFormState::new());
    }

    #[test]
    fn test_email_config_prefixes() {
        let config = |s: &str, t: &str, k: &str| EmailConfig {
            service_id: s.to_string(),
            template_id: t.to_string(),
            public_key: k.to_string(),
        };
        assert!(config("service_abc", "template_xyz", "pk").is_configured());
        assert!(!config("", "", "").is_configured());
        assert!(!config("svc_abc", "template_xyz", "pk").is_configured());
        assert!(!config("service_abc", "tpl_xyz", "pk").is_configured());
        assert!(!config("service_abc", "template_xyz", "").is_configured());
    }

    #[test]
    fn test_email_config_from_lookup() {
        let config = EmailConfig::from_lookup(|k| match k {
            ENV_SERVICE_ID => Some(" service_1 ".to_string()),
            ENV_TEMPLATE_ID => Some("template_1".to_string()),
            _ => None,
        });
        assert_eq!(config.service_id, "service_1");
        assert_eq!(config.public_key, "");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_template_params() {
        let params = TemplateParams::new(&valid_form(), &PERSONAL_INFO);
        assert_eq!(params.from_name, "Ada");
        assert_eq!(params.reply_to, "ada@example.com");
        assert_eq!(params.to_name, PERSONAL_INFO.name);
        assert_eq!(params.to_email, PERSONAL_INFO.email);

        let json = serde_json::to_value(&params).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["from_email", "from_name", "message", "reply_to", "subject", "to_email", "to_name"]
        );
    }
}
