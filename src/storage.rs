//! Session-scoped key-value storage.
//!
//! The state holders only ever persist two values: the identifier of the
//! logged-in user and the balance of their main account. The store is an
//! injected trait object so tests and alternative frontends can supply their
//! own backing; writes are atomic per key, nothing more is guaranteed.

use std::sync::Mutex;

pub trait SessionStore: Send + Sync {
    fn user_identifier(&self) -> Option<String>;
    fn set_user_identifier(&self, identifier: &str);
    fn main_account_balance(&self) -> Option<f64>;
    fn set_main_account_balance(&self, balance: f64);
}

/// Process-memory store, the default for the demo and for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Session>,
}

#[derive(Default)]
struct Session {
    user_identifier: Option<String>,
    main_account_balance: Option<f64>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn user_identifier(&self) -> Option<String> {
        self.inner.lock().unwrap().user_identifier.clone()
    }

    fn set_user_identifier(&self, identifier: &str) {
        self.inner.lock().unwrap().user_identifier = Some(identifier.to_string());
    }

    fn main_account_balance(&self) -> Option<f64> {
        self.inner.lock().unwrap().main_account_balance
    }

    fn set_main_account_balance(&self, balance: f64) {
        self.inner.lock().unwrap().main_account_balance = Some(balance);
    }
}
