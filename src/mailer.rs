use std::time::Duration;

use http::StatusCode;
use serde::Serialize;

use crate::{
    contact::{
        validate, ContactError, ContactForm, Delivery, EmailConfig, TemplateParams, DEMO_DELAY_MS,
    },
    portfolio::PersonalInfo,
};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    endpoint: String,
    config: EmailConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
            config,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// One request, no retry. Only a 200 counts as delivered.
    pub async fn send(&self, params: &TemplateParams) -> Result<Delivery, ContactError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };
        let res = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "email provider unreachable");
                ContactError::Transport(e.to_string())
            })?;

        let status = res.status();
        if status == StatusCode::OK {
            tracing::info!(subject = %params.subject, "contact message sent");
            return Ok(Delivery::Sent);
        }
        let text = res.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %text, "email provider rejected message");
        Err(ContactError::Status(status.as_u16()))
    }
}

/// How contact messages leave the site.
#[derive(Debug, Clone)]
pub enum Mailer {
    /// No credentials: wait, then report success without sending anything.
    Demo { delay: Duration },
    EmailJs(EmailJsClient),
}

impl Mailer {
    pub fn from_config(config: EmailConfig) -> Self {
        if config.is_configured() {
            Self::EmailJs(EmailJsClient::new(config))
        } else {
            Self::Demo {
                delay: Duration::from_millis(DEMO_DELAY_MS),
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Demo { .. })
    }

    pub async fn deliver(
        &self,
        form: &ContactForm,
        recipient: &PersonalInfo,
    ) -> Result<Delivery, ContactError> {
        let errors = validate(form);
        if !errors.is_empty() {
            return Err(ContactError::Invalid(errors));
        }
        match self {
            Self::Demo { delay } => {
                tokio::time::sleep(*delay).await;
                tracing::info!("demo mode: contact message accepted but not sent");
                Ok(Delivery::Simulated)
            }
            Self::EmailJs(client) => {
                client
                    .send(&TemplateParams::new(form, recipient))
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;
    use crate::{
        contact::{ContactFormState, Field, SubmitStatus},
        portfolio::PERSONAL_INFO,
    };

    fn form() -> ContactForm {
        ContactForm {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "Would love to talk about your RAG work.".to_string(),
        }
    }

    fn config() -> EmailConfig {
        EmailConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "pk_test".to_string(),
        }
    }

    #[test]
    fn test_mailer_variant_follows_config() {
        assert!(Mailer::from_config(EmailConfig::default()).is_demo());
        assert!(!Mailer::from_config(config()).is_demo());
    }

    #[tokio::test]
    async fn test_demo_mode_simulates_success() {
        let mailer = Mailer::Demo {
            delay: Duration::from_millis(5),
        };
        let res = mailer.deliver(&form(), &PERSONAL_INFO).await;
        assert_eq!(res, Ok(Delivery::Simulated));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unconfigured_submit_succeeds_and_clears() {
        let mailer = Mailer::from_config(EmailConfig::default());
        let mut state = ContactFormState::new();
        for field in Field::ALL {
            state.edit(field, form().get(field));
        }
        let snapshot = state.begin_submit().unwrap();

        let started = tokio::time::Instant::now();
        let res = mailer.deliver(&snapshot, &PERSONAL_INFO).await;
        assert!(started.elapsed() >= Duration::from_millis(DEMO_DELAY_MS));

        state.finish(res);
        assert_eq!(state.status(), SubmitStatus::Success(Delivery::Simulated));
        for field in Field::ALL {
            assert_eq!(state.value(field), "");
        }
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mailer = Mailer::Demo {
            delay: Duration::from_millis(5),
        };
        let mut bad = form();
        bad.email = "grace".to_string();
        match mailer.deliver(&bad, &PERSONAL_INFO).await {
            Err(ContactError::Invalid(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected invalid form, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_emailjs_request_and_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1.0/email/send")
                    .json_body_partial(
                        r#"{
                            "service_id": "service_test",
                            "template_id": "template_test",
                            "user_id": "pk_test",
                            "template_params": {
                                "from_name": "Grace",
                                "reply_to": "grace@example.com",
                                "to_name": "Balvendra Singh"
                            }
                        }"#,
                    );
                then.status(200).body("OK");
            })
            .await;

        let client = EmailJsClient::new(config()).with_endpoint(server.url("/api/v1.0/email/send"));
        let res = Mailer::EmailJs(client).deliver(&form(), &PERSONAL_INFO).await;
        assert_eq!(res, Ok(Delivery::Sent));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_emailjs_non_200_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1.0/email/send");
                then.status(400).body("The Public Key is invalid");
            })
            .await;

        let client = EmailJsClient::new(config()).with_endpoint(server.url("/api/v1.0/email/send"));
        let res = client
            .send(&TemplateParams::new(&form(), &PERSONAL_INFO))
            .await;
        assert_eq!(res, Err(ContactError::Status(400)));
    }

    #[tokio::test]
    async fn test_emailjs_unreachable_is_error() {
        // nothing listens on the discard port
        let client = EmailJsClient::new(config()).with_endpoint("http://127.0.0.1:9/send");
        let res = client
            .send(&TemplateParams::new(&form(), &PERSONAL_INFO))
            .await;
        assert!(matches!(res, Err(ContactError::Transport(_))));
    }
}
