use super::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        match name.chars().count() {
            x if x < 1 => {
                Err(ValidationError::new("Name is required".to_string()))
            }
            x if x > 255 => Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name)),
        }
    }
}

impl AsRef<String> for UserName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_user_names() {
    let valid_names = ["Ada".to_string(), "a".repeat(255)];
    for valid_name in valid_names.iter() {
        let parsed = UserName::parse(valid_name.to_owned())
            .expect("Failed to parse valid user name");

        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_empty_user_names() {
    let result = UserName::parse("".to_string());
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().as_ref(), "Name is required");
}

#[test]
fn test_long_user_names() {
    let result = UserName::parse("a".repeat(256));
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max name length is 255 characters"
    );
}
