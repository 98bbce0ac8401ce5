use serde::{Deserialize, Serialize};

// Wire types shared by the mock API and the client. Field names follow the
// JSON contract: POST /login, GET /accounts/{id}, POST /transfer.

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Credentials {
    pub id: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub granted: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AccountResponse {
    pub id: String,
    pub main: bool,
    pub balance: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransferRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransferResponse {
    pub result: bool,
}

/// A user known to the mock API, credentials in plaintext. The mock server is
/// a development fixture; nothing here survives a restart.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub accounts: Vec<AccountResponse>,
}

// Domain results. One of these is produced per attempt by the repositories;
// `status_code` carries either a genuine HTTP status or one of the local
// sentinels defined in `status`.

#[derive(Clone, Debug, PartialEq)]
pub struct LoginResult {
    pub granted: bool,
    pub status_code: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub id: String,
    pub is_main: bool,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccountSet {
    pub status_code: u16,
    pub accounts: Vec<Account>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransferResult {
    pub executed: bool,
    pub status_code: u16,
}

impl LoginResponse {
    pub fn to_domain(&self, status_code: u16) -> LoginResult {
        LoginResult {
            granted: self.granted,
            status_code,
        }
    }
}

impl AccountResponse {
    pub fn to_domain(&self) -> Account {
        Account {
            id: self.id.clone(),
            is_main: self.main,
            balance: self.balance,
        }
    }
}

impl AccountSet {
    /// Builds the domain set from the raw account list, preserving order.
    pub fn from_response(body: &[AccountResponse], status_code: u16) -> Self {
        AccountSet {
            status_code,
            accounts: body.iter().map(AccountResponse::to_domain).collect(),
        }
    }

    pub fn empty(status_code: u16) -> Self {
        AccountSet {
            status_code,
            accounts: Vec::new(),
        }
    }
}

impl TransferResponse {
    pub fn to_domain(&self, status_code: u16) -> TransferResult {
        TransferResult {
            executed: self.result,
            status_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_list_parses_and_preserves_order() {
        let body = r#"[
            {"id": "1", "main": true, "balance": 2354.23},
            {"id": "2", "main": false, "balance": 235.22}
        ]"#;

        let parsed: Vec<AccountResponse> = serde_json::from_str(body).unwrap();
        let set = AccountSet::from_response(&parsed, 200);

        assert_eq!(set.accounts.len(), 2);
        assert_eq!(set.accounts[0].id, "1");
        assert!(set.accounts[0].is_main);
        assert_eq!(set.accounts[1].id, "2");
        assert_eq!(set.status_code, 200);
    }

    #[test]
    fn login_response_maps_to_domain_with_given_code() {
        let response: LoginResponse = serde_json::from_str(r#"{"granted": true}"#).unwrap();
        let result = response.to_domain(200);
        assert_eq!(
            result,
            LoginResult {
                granted: true,
                status_code: 200
            }
        );
    }

    #[test]
    fn transfer_request_serializes_with_wire_names() {
        let request = TransferRequest {
            sender: "1234".to_string(),
            recipient: "5678".to_string(),
            amount: 10.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sender"], "1234");
        assert_eq!(json["recipient"], "5678");
        assert_eq!(json["amount"], 10.0);
    }
}
