//! Repositories normalizing each HTTP exchange into a single domain result.
//!
//! The contract is the same for all three features: one call in, exactly one
//! result out, never an error. The (body, status code) pair from the client
//! is classified into four cases; the two absent-status cases produce the
//! sentinel codes 1 and 0, which the state holders later map to messages.

use std::sync::Arc;

use crate::client::{AccountClient, LoginClient, TransferClient};
use crate::models::{
    AccountSet, Credentials, LoginResult, TransferRequest, TransferResult,
};
use crate::status::{NO_RESPONSE, NO_STATUS};

pub struct LoginRepository {
    client: Arc<dyn LoginClient>,
}

impl LoginRepository {
    pub fn new(client: Arc<dyn LoginClient>) -> Self {
        LoginRepository { client }
    }

    pub async fn fetch_login(&self, identifier: &str, password: &str) -> LoginResult {
        let credentials = Credentials {
            id: identifier.to_string(),
            password: password.to_string(),
        };

        let reply = self.client.post_credentials(credentials).await;

        match (reply.body, reply.status_code) {
            (Some(body), Some(code)) => body.to_domain(code),
            (None, Some(code)) => LoginResult {
                granted: false,
                status_code: code,
            },
            (Some(body), None) => body.to_domain(NO_STATUS),
            (None, None) => LoginResult {
                granted: false,
                status_code: NO_RESPONSE,
            },
        }
    }
}

pub struct AccountRepository {
    client: Arc<dyn AccountClient>,
}

impl AccountRepository {
    pub fn new(client: Arc<dyn AccountClient>) -> Self {
        AccountRepository { client }
    }

    pub async fn fetch_accounts(&self, user_id: &str) -> AccountSet {
        let reply = self.client.get_user_accounts(user_id).await;

        match (reply.body, reply.status_code) {
            (Some(body), Some(code)) => AccountSet::from_response(&body, code),
            (None, Some(code)) => AccountSet::empty(code),
            (Some(body), None) => AccountSet::from_response(&body, NO_STATUS),
            (None, None) => AccountSet::empty(NO_RESPONSE),
        }
    }
}

pub struct TransferRepository {
    client: Arc<dyn TransferClient>,
}

impl TransferRepository {
    pub fn new(client: Arc<dyn TransferClient>) -> Self {
        TransferRepository { client }
    }

    pub async fn fetch_transfer(
        &self,
        sender: &str,
        recipient: &str,
        amount: f64,
    ) -> TransferResult {
        let request = TransferRequest {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            amount,
        };

        let reply = self.client.post_transfer(request).await;

        match (reply.body, reply.status_code) {
            (Some(body), Some(code)) => body.to_domain(code),
            (None, Some(code)) => TransferResult {
                executed: false,
                status_code: code,
            },
            (Some(body), None) => body.to_domain(NO_STATUS),
            (None, None) => TransferResult {
                executed: false,
                status_code: NO_RESPONSE,
            },
        }
    }
}
