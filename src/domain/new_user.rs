use crate::routes::RegistrationData;

use super::{
    password::{InvalidPasswordError, Password},
    role::Role,
    user_email::UserEmail,
    username::{InvalidUsernameError, Username},
    InvalidVariant,
};

#[derive(Debug)]
pub struct NewUser {
    pub username: Username,
    pub email: UserEmail,
    pub password: Password,
    pub role: Role,
}

impl TryFrom<RegistrationData> for NewUser {
    type Error = InvalidUser;

    fn try_from(data: RegistrationData) -> Result<Self, Self::Error> {
        let username = Username::try_from(data.username)?;
        let email =
            UserEmail::try_from(data.email).map_err(InvalidUser::InvalidEmail)?;
        let password = Password::try_from(data.password)?;
        let role = Role::try_from(data.role)?;
        Ok(NewUser {
            username,
            email,
            password,
            role,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidUser {
    #[error("{0}")]
    InvalidEmail(String),
    #[error(transparent)]
    InvalidUsername(#[from] InvalidUsernameError),
    #[error(transparent)]
    InvalidPassword(#[from] InvalidPasswordError),
    #[error(transparent)]
    InvalidRole(#[from] InvalidVariant),
}
