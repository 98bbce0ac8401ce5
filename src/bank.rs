//! In-memory user directory backing the mock API.
//!
//! Two hard-coded users, plaintext credentials, balances mutated in place.
//! This is a development fixture, not a ledger: there is no persistence and
//! no concurrency control beyond the mutex the server wraps it in.

use thiserror::Error;

use crate::models::{AccountResponse, Credentials, TransferRequest, User};

/// Request-level transfer failures. Business refusals (missing main account,
/// insufficient balance) are not errors; they come back as `Ok(false)`.
#[derive(Debug, Error, PartialEq)]
pub enum TransferError {
    #[error("The sender cannot be found")]
    SenderNotFound,
    #[error("The recipient cannot be found")]
    RecipientNotFound,
    #[error("The amount to send cannot be negative")]
    NegativeAmount,
}

pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// The fixture data every fresh server starts with.
    pub fn seeded() -> Self {
        UserDirectory {
            users: vec![
                User {
                    id: "1234".to_string(),
                    firstname: "Pierre".to_string(),
                    lastname: "Brisette".to_string(),
                    password: "p@sswOrd".to_string(),
                    accounts: vec![
                        AccountResponse {
                            id: "1".to_string(),
                            main: true,
                            balance: 2354.23,
                        },
                        AccountResponse {
                            id: "2".to_string(),
                            main: false,
                            balance: 235.22,
                        },
                    ],
                },
                User {
                    id: "5678".to_string(),
                    firstname: "Gustave".to_string(),
                    lastname: "Charbonneau".to_string(),
                    password: "T0pSecr3t".to_string(),
                    accounts: vec![
                        AccountResponse {
                            id: "3".to_string(),
                            main: false,
                            balance: 24.53,
                        },
                        AccountResponse {
                            id: "4".to_string(),
                            main: true,
                            balance: 10032.21,
                        },
                    ],
                },
            ],
        }
    }

    fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    // (user index, account index) of the user's main account.
    fn main_account(&self, user_id: &str) -> Option<(usize, usize)> {
        let user_index = self.users.iter().position(|user| user.id == user_id)?;
        let account_index = self.users[user_index]
            .accounts
            .iter()
            .position(|account| account.main)?;
        Some((user_index, account_index))
    }

    /// Plaintext credential match; unknown users are simply not granted.
    pub fn login(&self, credentials: &Credentials) -> bool {
        self.user(&credentials.id)
            .map(|user| user.password == credentials.password)
            .unwrap_or(false)
    }

    /// The user's accounts in declaration order, empty for an unknown id.
    pub fn accounts(&self, user_id: &str) -> Vec<AccountResponse> {
        self.user(user_id)
            .map(|user| user.accounts.clone())
            .unwrap_or_default()
    }

    /// Moves `amount` between the two users' main accounts. Returns
    /// `Ok(false)` when either main account is missing or the sender's
    /// balance would go negative.
    pub fn transfer(&mut self, request: &TransferRequest) -> Result<bool, TransferError> {
        if self.user(&request.sender).is_none() {
            return Err(TransferError::SenderNotFound);
        }
        if self.user(&request.recipient).is_none() {
            return Err(TransferError::RecipientNotFound);
        }
        if request.amount < 0.0 {
            return Err(TransferError::NegativeAmount);
        }

        let sender_main = self.main_account(&request.sender);
        let recipient_main = self.main_account(&request.recipient);

        let (Some((sender_user, sender_account)), Some((recipient_user, recipient_account))) =
            (sender_main, recipient_main)
        else {
            return Ok(false);
        };

        if self.users[sender_user].accounts[sender_account].balance - request.amount < 0.0 {
            return Ok(false);
        }

        self.users[sender_user].accounts[sender_account].balance -= request.amount;
        self.users[recipient_user].accounts[recipient_account].balance += request.amount;

        Ok(true)
    }
}
