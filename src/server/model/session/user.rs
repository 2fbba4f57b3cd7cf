use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USERNAME_KEY: &str = "reposearch:user:username";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUsername(pub String);

impl SessionUsername {
    /// Insert username into session
    pub async fn insert(session: &Session, username: &str) -> Result<(), Error> {
        session
            .insert(SESSION_USERNAME_KEY, SessionUsername(username.to_string()))
            .await?;

        Ok(())
    }

    /// Get username from session, `None` when nobody is logged in
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let username = session
            .get::<SessionUsername>(SESSION_USERNAME_KEY)
            .await?
            .map(|SessionUsername(username)| username);

        Ok(username)
    }

    /// Remove username from session, returning it if it was present
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        let username = session
            .remove::<SessionUsername>(SESSION_USERNAME_KEY)
            .await?
            .map(|SessionUsername(username)| username);

        Ok(username)
    }
}
