//! Outreach mail: AI templates, recipients and the multipart send.

use serde::{Deserialize, Serialize};
use store::LeadRecord;

use crate::client::Backend;
use crate::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SenderDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
}

/// A generated outreach email, split into the parts the backend writes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MailTemplate {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub closing: String,
    #[serde(default)]
    pub sender_details: SenderDetails,
}

impl MailTemplate {
    /// The message body the form is filled with: greeting, body and call to action as
    /// paragraphs, then the closing and the signature lines.
    pub fn compose_message(&self) -> String {
        let s = &self.sender_details;
        format!(
            "{}\n\n{}\n\n{}\n\n{}\n{}\n{}\n{}\n{}",
            self.greeting, self.body, self.cta, self.closing, s.name, s.title, s.company, s.website
        )
    }
}

/// A file attached to an outgoing mail.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutgoingMail {
    /// The authenticated address the mail is sent from.
    pub mailer: String,
    pub to: Vec<String>,
    pub subject: String,
    pub message: String,
    pub attachments: Vec<Attachment>,
}

impl OutgoingMail {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.mailer.is_empty() || self.subject.is_empty() || self.message.is_empty() {
            return Err(ApiError::validation("Please fill in all fields"));
        }
        Ok(())
    }
}

/// Every non-blank email address of the given leads, in order.
pub fn recipient_emails(leads: &[&LeadRecord]) -> Vec<String> {
    leads
        .iter()
        .flat_map(|lead| lead.emails.iter().flatten())
        .map(|contact| contact.email.trim())
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}

/// The mailers the sender form may use. Opening the form needs a selection and at
/// least one connected account.
pub async fn available_mailers<B: Backend>(
    backend: &B,
    selected: usize,
) -> Result<Vec<String>, ApiError> {
    if selected == 0 {
        return Err(ApiError::validation("Select lead to enable MailSender"));
    }
    let mailers = backend.authenticated_mailers().await?;
    if mailers.is_empty() {
        return Err(ApiError::validation("Connect your account to Enable MailSender"));
    }
    Ok(mailers)
}

pub async fn generate_template<B: Backend>(backend: &B, prompt: &str) -> Result<MailTemplate, ApiError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(ApiError::validation(
            "Please enter a description for the email template you want to generate.",
        ));
    }
    backend.generate_mail_template(prompt).await
}

pub async fn send_mail<B: Backend>(backend: &B, mail: &OutgoingMail) -> Result<(), ApiError> {
    mail.validate()?;
    backend.send_mail(mail).await?;
    tracing::info!("Sent mail from {} to {} recipients", mail.mailer, mail.to.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{lead, MockBackend};
    use store::EmailContact;

    fn contact(email: &str) -> EmailContact {
        EmailContact {
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_compose_message_layout() {
        let template: MailTemplate = serde_json::from_str(
            r#"{"subject":"Hello","greeting":"Hi Ana,","body":"We help.","cta":"Call?","closing":"Best,",
                "sender_details":{"name":"Bo","title":"CEO","company":"Acme","website":"acme.io"}}"#,
        )
        .unwrap();
        assert_eq!(
            template.compose_message(),
            "Hi Ana,\n\nWe help.\n\nCall?\n\nBest,\nBo\nCEO\nAcme\nacme.io"
        );
    }

    #[test]
    fn test_recipients_skip_blank() {
        let mut a = lead("Acme", 80.0);
        a.emails = Some(vec![contact("cfo@acme.io"), contact(" ")]);
        let b = lead("Globex", 50.0);
        let mut c = lead("Initech", 40.0);
        c.emails = Some(vec![contact("ceo@initech.io")]);

        assert_eq!(
            recipient_emails(&[&a, &b, &c]),
            vec!["cfo@acme.io".to_string(), "ceo@initech.io".to_string()]
        );
    }

    #[tokio::test]
    async fn test_send_requires_fields() {
        let backend = MockBackend::new();
        let mail = OutgoingMail {
            mailer: "me@x.io".into(),
            subject: "Hi".into(),
            ..Default::default()
        };
        let err = send_mail(&backend, &mail).await.unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_mailers_need_selection_and_account() {
        let backend = MockBackend::new();
        assert!(available_mailers(&backend, 0).await.unwrap_err().is_validation());
        assert!(backend.calls().is_empty());

        let err = available_mailers(&backend, 2).await.unwrap_err();
        assert_eq!(err.to_string(), "Connect your account to Enable MailSender");

        backend.set_mailers(vec!["me@x.io".into()]);
        assert_eq!(available_mailers(&backend, 2).await.unwrap(), vec!["me@x.io".to_string()]);
    }

    #[tokio::test]
    async fn test_template_then_send() {
        let backend = MockBackend::new();
        assert!(generate_template(&backend, " ").await.unwrap_err().is_validation());

        backend.set_template(MailTemplate {
            subject: "Quick idea".into(),
            greeting: "Hi,".into(),
            ..Default::default()
        });
        let template = generate_template(&backend, "intro for CFOs").await.unwrap();

        let mail = OutgoingMail {
            mailer: "me@x.io".into(),
            to: vec!["cfo@acme.io".into()],
            subject: template.subject.clone(),
            message: template.compose_message(),
            attachments: Vec::new(),
        };
        send_mail(&backend, &mail).await.unwrap();

        let sent = backend.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Quick idea");
        assert!(sent[0].message.starts_with("Hi,\n\n"));
    }
}
