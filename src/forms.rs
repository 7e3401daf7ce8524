use std::time::Duration;

use reqwest::Client;
use reqwest::multipart::Form;
use tracing::debug;

use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An admission enquiry. Name, email, and the chosen course are required;
/// the phone number and message are not.
#[derive(Debug, Clone)]
pub struct AdmissionSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub message: String,
}

impl AdmissionSubmission {
    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("course", &self.course)?;
        Ok(())
    }
}

/// A contact-page message. Everything but the phone number is required.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(())
}

/// Client for the third-party relay that forwards form submissions.
///
/// The relay does not expose its response, so submissions are
/// fire-and-forget: any HTTP response counts as delivered and only a
/// transport failure surfaces. The two logical forms share one endpoint and
/// are told apart by a hidden `formName` field.
pub struct FormRelay {
    client: Client,
    relay_url: String,
}

impl FormRelay {
    pub fn new(relay_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            relay_url: relay_url.into(),
        })
    }

    pub async fn submit_admission(&self, submission: &AdmissionSubmission) -> Result<()> {
        submission.validate()?;
        let form = Form::new()
            .text("formName", "Admission")
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("phone", submission.phone.clone())
            .text("course", submission.course.clone())
            .text("message", submission.message.clone());
        self.send(form).await
    }

    pub async fn submit_contact(&self, submission: &ContactSubmission) -> Result<()> {
        submission.validate()?;
        let form = Form::new()
            .text("formName", "Contact")
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("phone", submission.phone.clone())
            .text("subject", submission.subject.clone())
            .text("message", submission.message.clone());
        self.send(form).await
    }

    async fn send(&self, form: Form) -> Result<()> {
        let resp = self
            .client
            .post(&self.relay_url)
            .multipart(form)
            .send()
            .await?;
        debug!("form relayed ({})", resp.status());
        Ok(())
    }
}
