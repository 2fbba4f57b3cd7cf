use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the upstream access token provided at login.
pub const SESSION_TOKEN_KEY: &str = "reposearch:auth:token";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_TOKEN_KEY, SessionToken(token.to_string()))
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .get::<SessionToken>(SESSION_TOKEN_KEY)
            .await?
            .map(|SessionToken(token)| token);

        Ok(token)
    }

    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .remove::<SessionToken>(SESSION_TOKEN_KEY)
            .await?
            .map(|SessionToken(token)| token);

        Ok(token)
    }
}
