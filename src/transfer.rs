//! Transfer screen state holder and its client-side pre-checks.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::repository::TransferRepository;
use crate::status::status_message;
use crate::storage::SessionStore;

/// States of one transfer attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum TransferState {
    Initial,
    Loading,
    Success,
    Error(String),
}

pub struct TransferViewModel {
    repository: TransferRepository,
    sender: String,
    main_account_balance: f64,
    recipient: String,
    amount: Option<f64>,
    transfer_enabled: bool,
    state: TransferState,
    navigation: UnboundedSender<()>,
    navigation_events: Option<UnboundedReceiver<()>>,
}

impl TransferViewModel {
    /// The sender identifier and the cached main balance come from the
    /// session store, written by the login and account screens.
    pub fn new(repository: TransferRepository, store: Arc<dyn SessionStore>) -> Self {
        let sender = store.user_identifier().unwrap_or_default();
        let main_account_balance = store.main_account_balance().unwrap_or(0.0);
        debug!("transfer sender loaded: {sender}, cached balance: {main_account_balance}");

        let (navigation, navigation_events) = mpsc::unbounded_channel();
        TransferViewModel {
            repository,
            sender,
            main_account_balance,
            recipient: String::new(),
            amount: None,
            transfer_enabled: false,
            state: TransferState::Initial,
            navigation,
            navigation_events: Some(navigation_events),
        }
    }

    pub fn state(&self) -> &TransferState {
        &self.state
    }

    pub fn is_transfer_enabled(&self) -> bool {
        self.transfer_enabled
    }

    /// Hands the navigation event stream to the view. An event is emitted
    /// once per successful transfer.
    pub fn take_navigation_events(&mut self) -> Option<UnboundedReceiver<()>> {
        self.navigation_events.take()
    }

    pub fn on_recipient_changed(&mut self, value: &str) {
        self.recipient = value.to_string();
        self.update_transfer_enabled();
    }

    pub fn on_amount_changed(&mut self, value: f64) {
        self.amount = Some(value);
        self.update_transfer_enabled();
    }

    // The amount only has to be set, not non-zero; a zero amount is caught by
    // the pre-checks on submit instead. Kept as shipped.
    fn update_transfer_enabled(&mut self) {
        self.transfer_enabled = !self.recipient.trim().is_empty() && self.amount.is_some();
    }

    /// Runs the pre-checks and, if they pass, submits the transfer. Success
    /// navigates back to the account screen; balances are not touched
    /// locally, the server is authoritative.
    pub async fn on_make_transfer_clicked(&mut self) {
        self.state = TransferState::Loading;

        let amount = self.amount.unwrap_or(0.0);
        if let Err(message) = check_before_transfer(
            &self.sender,
            self.main_account_balance,
            &self.recipient,
            amount,
        ) {
            self.state = TransferState::Error(message);
            return;
        }

        let result = self
            .repository
            .fetch_transfer(&self.sender, &self.recipient, amount)
            .await;

        if result.executed {
            self.state = TransferState::Success;
            let _ = self.navigation.send(());
        } else {
            self.state = transfer_error_state(result.status_code);
        }
    }
}

/// Client-side guard run before the request is dispatched. The checks are
/// ordered and short-circuit on the first violation; the server performs the
/// authoritative validation regardless.
fn check_before_transfer(
    sender: &str,
    main_account_balance: f64,
    recipient: &str,
    amount: f64,
) -> Result<(), String> {
    if sender.is_empty() {
        return Err(
            "The sender of this transfer has not been found, please try again.".to_string(),
        );
    }
    if main_account_balance == 0.0 {
        return Err(
            "The main account for this transfer has not been found or balance is null, please try again."
                .to_string(),
        );
    }
    if recipient.is_empty() {
        return Err(
            "The recipient for this transfer has not been found, please try again.".to_string(),
        );
    }
    if amount == 0.0 {
        return Err(
            "The amount of this transfer has not been found or is null, please try again."
                .to_string(),
        );
    }
    if amount > main_account_balance {
        return Err(
            "The main account balance is too low for this transfer, please try again.".to_string(),
        );
    }
    if sender == recipient {
        return Err(
            "The recipient must be different than the sender, please try again.".to_string(),
        );
    }

    Ok(())
}

fn transfer_error_state(status_code: u16) -> TransferState {
    match status_code {
        3 => TransferState::Error("HTTP status code 3: error in transfer request".to_string()),
        // A 200 with a failed flag still counts as delivered. Kept as shipped.
        200 => TransferState::Success,
        code => TransferState::Error(status_message(Some(code))),
    }
}
