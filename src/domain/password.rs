use secrecy::Secret;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = InvalidPasswordError;
    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        use secrecy::ExposeSecret;
        let length = value.expose_secret().graphemes(true).count();
        if length < 8 {
            Err(InvalidPasswordError::PasswordTooShort)
        } else if length > 128 {
            Err(InvalidPasswordError::PasswordTooLong)
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<String> for Password {
    type Error = InvalidPasswordError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(Secret::new(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidPasswordError {
    #[error("Password is too short.")]
    PasswordTooShort,
    #[error("Password is too long.")]
    PasswordTooLong,
}
