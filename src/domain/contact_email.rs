use validator::validate_email;

#[derive(Debug, serde::Serialize)]
pub struct ContactEmail(String);

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ContactEmail {
    /// Returns an instance of `ContactEmail` if the input is a syntactically
    /// valid email address, surrounding whitespace ignored.
    pub fn parse(email: String) -> Result<Self, String> {
        let email = email.trim();
        if email.is_empty() {
            return Err("Please provide an email address.".to_string());
        }
        if validate_email(email) {
            Ok(Self(email.to_string()))
        } else {
            Err(format!("{} is not a valid email address.", email))
        }
    }
}
