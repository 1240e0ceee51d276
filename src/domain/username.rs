#[derive(Debug, Clone)]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = InvalidUsernameError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(InvalidUsernameError::UsernameIsEmpty);
        }
        // The column is VARCHAR(50), which counts characters.
        let is_too_long = value.chars().count() > 50;
        if is_too_long {
            return Err(InvalidUsernameError::UsernameIsTooLong);
        }
        let forbidden_characters =
            ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let has_forbidden_chars =
            value.chars().any(|g| forbidden_characters.contains(&g));
        if has_forbidden_chars {
            Err(InvalidUsernameError::ForbiddenCharacters)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidUsernameError {
    #[error("Username is too long.")]
    UsernameIsTooLong,
    #[error("Username is empty.")]
    UsernameIsEmpty,
    #[error("Username has forbidden characters.")]
    ForbiddenCharacters,
}
