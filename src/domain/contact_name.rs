#[derive(Debug, serde::Serialize)]
pub struct ContactName(String);

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ContactName {
    /// Returns an instance of `ContactName` if the input has at least one
    /// non-whitespace character.
    pub fn parse(name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            Err("Please provide your name.".to_string())
        } else {
            Ok(Self(name))
        }
    }
}
