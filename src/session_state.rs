use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use tower_sessions::Session;

use crate::domain::Role;
use crate::models::UserRecord;

/// Identity attached to a session after a successful login.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<UserRecord> for SessionUser {
    fn from(user: UserRecord) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

pub struct TypedSession(Session);

impl TypedSession {
    const USER_KEY: &'static str = "user";

    pub async fn cycle_id(&self) -> Result<(), tower_sessions::session::Error> {
        self.0.cycle_id().await
    }

    pub async fn insert_user(
        &self,
        user: &SessionUser,
    ) -> Result<(), tower_sessions::session::Error> {
        self.0.insert(Self::USER_KEY, user).await
    }

    pub async fn get_user(
        &self,
    ) -> Result<Option<SessionUser>, tower_sessions::session::Error> {
        self.0.get(Self::USER_KEY).await
    }

    /// Drops every value and removes the record from the store.
    pub async fn logout(&self) -> Result<(), tower_sessions::session::Error> {
        self.0.flush().await
    }
}

impl From<Session> for TypedSession {
    fn from(session: Session) -> Self {
        Self(session)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TypedSession
where
    S: Sync + Send,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        req: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(req, state).await?;
        Ok(Self(session))
    }
}
