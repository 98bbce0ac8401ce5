//! Login screen state holder.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::repository::LoginRepository;
use crate::status::status_message;
use crate::storage::SessionStore;

/// States of one login attempt. `Success` and `Error` are terminal until the
/// user submits again.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginState {
    Initial,
    Loading,
    Success,
    Error(String),
}

pub struct LoginViewModel {
    repository: LoginRepository,
    store: Arc<dyn SessionStore>,
    identifier: String,
    password: String,
    login_enabled: bool,
    state: LoginState,
    navigation: UnboundedSender<()>,
    navigation_events: Option<UnboundedReceiver<()>>,
}

impl LoginViewModel {
    pub fn new(repository: LoginRepository, store: Arc<dyn SessionStore>) -> Self {
        let (navigation, navigation_events) = mpsc::unbounded_channel();
        LoginViewModel {
            repository,
            store,
            identifier: String::new(),
            password: String::new(),
            login_enabled: false,
            state: LoginState::Initial,
            navigation,
            navigation_events: Some(navigation_events),
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn is_login_enabled(&self) -> bool {
        self.login_enabled
    }

    /// Hands the navigation event stream to the view. An event is emitted
    /// once per successful login.
    pub fn take_navigation_events(&mut self) -> Option<UnboundedReceiver<()>> {
        self.navigation_events.take()
    }

    pub fn on_identifier_changed(&mut self, value: &str) {
        self.identifier = value.to_string();
        self.update_login_enabled();
    }

    pub fn on_password_changed(&mut self, value: &str) {
        self.password = value.to_string();
        self.update_login_enabled();
    }

    // The submit button follows both fields: enabled only while neither is
    // blank.
    fn update_login_enabled(&mut self) {
        self.login_enabled =
            !self.identifier.trim().is_empty() && !self.password.trim().is_empty();
    }

    /// Submits the credentials and drives the state machine to a terminal
    /// state. A granted login persists the identifier for the account and
    /// transfer screens.
    pub async fn on_login_clicked(&mut self) {
        self.state = LoginState::Loading;

        let result = self
            .repository
            .fetch_login(&self.identifier, &self.password)
            .await;

        if result.granted {
            self.store.set_user_identifier(&self.identifier);
            debug!("user identifier saved: {}", self.identifier);
            self.state = LoginState::Success;
            let _ = self.navigation.send(());
        } else {
            self.state = LoginState::Error(login_error_message(result.status_code));
        }
    }
}

// A 200 with granted=false means the server understood the request and
// rejected the credentials; every other code goes through the shared ladder.
fn login_error_message(status_code: u16) -> String {
    if status_code == 200 {
        "HTTP status code 200: incorrect identifiers".to_string()
    } else {
        status_message(Some(status_code))
    }
}
