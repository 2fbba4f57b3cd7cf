//! In-process session store with expired-record deletion.
//!
//! Holds session records in a shared map for the lifetime of the process. Records past their
//! expiry are hidden from `load` immediately and dropped from memory by
//! [`ExpiredDeletion::delete_expired`], which the server runs periodically (see
//! [`crate::server::startup::spawn_session_cleanup`]).

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tower_sessions::{
    session::{Id, Record},
    session_store, ExpiredDeletion, SessionStore,
};

#[derive(Clone, Debug, Default)]
pub struct SessionMemoryStore(Arc<Mutex<HashMap<Id, Record>>>);

impl SessionMemoryStore {
    /// Number of records held, expired ones included until they are deleted
    pub async fn len(&self) -> usize {
        self.0.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.0.lock().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for SessionMemoryStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let mut records = self.0.lock().await;
        while records.contains_key(&record.id) {
            record.id = Id::default();
        }
        records.insert(record.id, record.clone());

        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.0.lock().await.insert(record.id, record.clone());

        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc();
        let record = self
            .0
            .lock()
            .await
            .get(session_id)
            .filter(|record| is_active(record, now))
            .cloned();

        Ok(record)
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.0.lock().await.remove(session_id);

        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for SessionMemoryStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let now = OffsetDateTime::now_utc();
        self.0.lock().await.retain(|_, record| is_active(record, now));

        Ok(())
    }
}

fn is_active(record: &Record, now: OffsetDateTime) -> bool {
    record.expiry_date > now
}
