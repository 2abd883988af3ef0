#[derive(Debug, serde::Serialize)]
pub struct ContactMessage(String);

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ContactMessage {
    pub fn parse(message: String) -> Result<Self, String> {
        if message.trim().is_empty() {
            Err("Please write a message.".to_string())
        } else {
            Ok(Self(message))
        }
    }
}
