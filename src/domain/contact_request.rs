use crate::domain::{ContactEmail, ContactFields, ContactMessage, ContactName};

/// Tells the contact endpoint which site a message came from.
pub const SUBMISSION_SOURCE: &str = "portfolio";

/// The JSON body posted to the contact endpoint.
#[derive(Debug, serde::Serialize)]
pub struct ContactRequest {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: String,
    pub phone: String,
    pub message: ContactMessage,
    pub source: &'static str,
}

impl TryFrom<ContactFields> for ContactRequest {
    type Error = String;

    fn try_from(fields: ContactFields) -> Result<Self, Self::Error> {
        let name = ContactName::parse(fields.name)?;
        let email = ContactEmail::parse(fields.email)?;
        let message = ContactMessage::parse(fields.message)?;
        Ok(Self {
            name,
            email,
            subject: fields.subject,
            phone: fields.phone,
            message,
            source: SUBMISSION_SOURCE,
        })
    }
}
