//! Account screen state holder.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::models::Account;
use crate::repository::AccountRepository;
use crate::status::status_message;
use crate::storage::SessionStore;

/// States of the account screen. There is no `Initial`: the screen fetches as
/// soon as it is shown, so it starts out `Loading`.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountState {
    Loading,
    Success(f64),
    Error(String),
}

pub struct AccountViewModel {
    repository: AccountRepository,
    store: Arc<dyn SessionStore>,
    user_identifier: Option<String>,
    state: AccountState,
    navigation: UnboundedSender<()>,
    navigation_events: Option<UnboundedReceiver<()>>,
}

impl AccountViewModel {
    pub fn new(repository: AccountRepository, store: Arc<dyn SessionStore>) -> Self {
        let (navigation, navigation_events) = mpsc::unbounded_channel();
        AccountViewModel {
            repository,
            store,
            user_identifier: None,
            state: AccountState::Loading,
            navigation,
            navigation_events: Some(navigation_events),
        }
    }

    pub fn state(&self) -> &AccountState {
        &self.state
    }

    /// Hands the navigation event stream to the view. An event is emitted
    /// when the user asks for the transfer screen.
    pub fn take_navigation_events(&mut self) -> Option<UnboundedReceiver<()>> {
        self.navigation_events.take()
    }

    /// First load: resolves the logged-in identifier from the session store,
    /// then fetches the accounts.
    pub async fn load(&mut self) {
        self.state = AccountState::Loading;
        self.user_identifier = self.store.user_identifier();

        match self.user_identifier.clone() {
            Some(identifier) => self.load_account_data(&identifier).await,
            None => self.state = AccountState::Error("User identifier not found.".to_string()),
        }
    }

    pub async fn on_reload_clicked(&mut self) {
        self.state = AccountState::Loading;

        // Without an identifier there is nothing to fetch; report that
        // instead of sitting in Loading forever.
        match self.user_identifier.clone() {
            Some(identifier) => self.load_account_data(&identifier).await,
            None => self.state = AccountState::Error("User identifier not found.".to_string()),
        }
    }

    /// Forwarded by the view when the transfer button is pressed.
    pub fn on_transfer_clicked(&mut self) {
        let _ = self.navigation.send(());
    }

    async fn load_account_data(&mut self, user_identifier: &str) {
        let account_set = self.repository.fetch_accounts(user_identifier).await;
        let main_balance = main_account_balance(&account_set.accounts);
        self.apply(account_set.status_code, main_balance);
    }

    fn apply(&mut self, status_code: u16, main_balance: Option<f64>) {
        self.state = match status_code {
            // 200 only counts as a success when a main account is present;
            // its balance is cached for the transfer pre-checks.
            200 => match main_balance {
                Some(balance) => {
                    self.store.set_main_account_balance(balance);
                    AccountState::Success(balance)
                }
                None => AccountState::Error("Main account not found.".to_string()),
            },
            code => AccountState::Error(status_message(Some(code))),
        };
    }
}

fn main_account_balance(accounts: &[Account]) -> Option<f64> {
    accounts
        .iter()
        .find(|account| account.is_main)
        .map(|account| account.balance)
}
