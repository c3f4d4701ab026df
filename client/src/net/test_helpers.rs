//! In-memory stand-in for the hosted backend, shared by unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::backend::{AuthBackend, BackendError, LogoStore};
use super::types::{LogoColorSet, NewUserLogo, UserLogoRecord};
use crate::state::auth::SessionHandle;

pub(crate) fn ts(offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + offset_secs, 0).unwrap()
}

pub(crate) fn record_at(offset_secs: i64) -> UserLogoRecord {
    UserLogoRecord {
        id: format!("logo-{offset_secs}"),
        x_username: format!("user{offset_secs}"),
        logo_colors: LogoColorSet::default(),
        created_at: ts(offset_secs),
        updated_at: ts(offset_secs),
    }
}

pub(crate) fn session(token: &str) -> SessionHandle {
    SessionHandle::from_raw(serde_json::json!({ "access_token": token, "user": { "id": "anon-1" } }))
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub fail_create: Cell<bool>,
    pub fail_tag: Cell<bool>,
    pub fail_end: Cell<bool>,
    pub fail_list: Cell<bool>,
    pub fail_insert: Cell<bool>,
    /// Skip the backend's own ordering/limit, returning rows as stored.
    pub ignore_query: Cell<bool>,
    pub calls: RefCell<Vec<String>>,
    pub records: RefCell<Vec<UserLogoRecord>>,
}

impl FakeBackend {
    pub fn with_records(records: Vec<UserLogoRecord>) -> Self {
        Self { records: RefCell::new(records), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn refused(status: u16) -> BackendError {
        BackendError::Status { status, message: "refused".to_owned() }
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn create_anonymous_session(&self) -> Result<SessionHandle, BackendError> {
        self.record("create".to_owned());
        if self.fail_create.get() {
            return Err(Self::refused(422));
        }
        Ok(session("tok-1"))
    }

    async fn tag_session(&self, _session: &SessionHandle, username: &str) -> Result<(), BackendError> {
        self.record(format!("tag:{username}"));
        if self.fail_tag.get() {
            return Err(Self::refused(500));
        }
        Ok(())
    }

    async fn end_session(&self, _session: &SessionHandle) -> Result<(), BackendError> {
        self.record("end".to_owned());
        if self.fail_end.get() {
            return Err(BackendError::Transport("offline".to_owned()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl LogoStore for FakeBackend {
    async fn list_recent(&self, limit: usize) -> Result<Vec<UserLogoRecord>, BackendError> {
        self.record(format!("list:{limit}"));
        if self.fail_list.get() {
            return Err(Self::refused(503));
        }
        let mut rows = self.records.borrow().clone();
        if !self.ignore_query.get() {
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn insert(&self, session: Option<&SessionHandle>, logo: &NewUserLogo) -> Result<UserLogoRecord, BackendError> {
        self.record(format!("insert:{}:{}", logo.x_username, session.is_some()));
        if self.fail_insert.get() {
            return Err(Self::refused(401));
        }
        let offset = i64::try_from(self.records.borrow().len()).unwrap() + 1000;
        let row = UserLogoRecord {
            id: format!("logo-{offset}"),
            x_username: logo.x_username.clone(),
            logo_colors: logo.logo_colors.clone(),
            created_at: ts(offset),
            updated_at: ts(offset),
        };
        self.records.borrow_mut().push(row.clone());
        Ok(row)
    }
}
