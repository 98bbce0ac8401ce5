//! Drives the three screens against a real mock server over HTTP.

use std::sync::Arc;

use tokio::sync::Mutex;

use aura::account::{AccountState, AccountViewModel};
use aura::bank::UserDirectory;
use aura::client::ApiClient;
use aura::handlers::router;
use aura::login::{LoginState, LoginViewModel};
use aura::repository::{AccountRepository, LoginRepository, TransferRepository};
use aura::storage::{MemorySessionStore, SessionStore};
use aura::transfer::{TransferState, TransferViewModel};

async fn start_server() -> String {
    let directory = Arc::new(Mutex::new(UserDirectory::seeded()));
    let app = router(directory);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}")
}

#[tokio::test]
async fn login_account_and_transfer_flow() {
    let base_url = start_server().await;
    let client = Arc::new(ApiClient::new(base_url));
    let store: Arc<MemorySessionStore> = Arc::new(MemorySessionStore::new());

    // Login screen.
    let mut login = LoginViewModel::new(LoginRepository::new(client.clone()), store.clone());
    login.on_identifier_changed("1234");
    login.on_password_changed("p@sswOrd");
    assert!(login.is_login_enabled());
    login.on_login_clicked().await;
    assert_eq!(*login.state(), LoginState::Success);
    assert_eq!(store.user_identifier(), Some("1234".to_string()));

    // Account screen caches the main balance.
    let mut account = AccountViewModel::new(AccountRepository::new(client.clone()), store.clone());
    account.load().await;
    assert_eq!(*account.state(), AccountState::Success(2354.23));
    assert_eq!(store.main_account_balance(), Some(2354.23));

    // Transfer screen sends money to the other seeded user.
    let mut transfer =
        TransferViewModel::new(TransferRepository::new(client.clone()), store.clone());
    transfer.on_recipient_changed("5678");
    transfer.on_amount_changed(100.0);
    assert!(transfer.is_transfer_enabled());
    transfer.on_make_transfer_clicked().await;
    assert_eq!(*transfer.state(), TransferState::Success);

    // A reload sees the server-side balance move.
    account.on_reload_clicked().await;
    match account.state() {
        AccountState::Success(balance) => assert!((balance - 2254.23).abs() < 1e-9),
        other => panic!("expected success after reload, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_password_is_rejected_with_the_login_message() {
    let base_url = start_server().await;
    let client = Arc::new(ApiClient::new(base_url));
    let store = Arc::new(MemorySessionStore::new());

    let mut login = LoginViewModel::new(LoginRepository::new(client), store.clone());
    login.on_identifier_changed("1234");
    login.on_password_changed("wrong");
    login.on_login_clicked().await;

    assert_eq!(
        *login.state(),
        LoginState::Error("HTTP status code 200: incorrect identifiers".to_string())
    );
    assert_eq!(store.user_identifier(), None);
}

#[tokio::test]
async fn unknown_recipient_surfaces_as_a_server_error() {
    let base_url = start_server().await;
    let client = Arc::new(ApiClient::new(base_url));
    let store: Arc<MemorySessionStore> = Arc::new(MemorySessionStore::new());
    store.set_user_identifier("1234");
    store.set_main_account_balance(2354.23);

    let mut transfer = TransferViewModel::new(TransferRepository::new(client), store);
    transfer.on_recipient_changed("0000");
    transfer.on_amount_changed(10.0);
    transfer.on_make_transfer_clicked().await;

    // The mock API answers 500 with a plain-text message, which the
    // repository normalizes into a body-less reply with the real code.
    assert_eq!(
        *transfer.state(),
        TransferState::Error("HTTP status code 500: Server Error".to_string())
    );
}

#[tokio::test]
async fn unreachable_server_maps_to_no_response() {
    // Nothing listens here.
    let client = Arc::new(ApiClient::new("http://127.0.0.1:9"));
    let store = Arc::new(MemorySessionStore::new());

    let mut login = LoginViewModel::new(LoginRepository::new(client), store);
    login.on_identifier_changed("1234");
    login.on_password_changed("p@sswOrd");
    login.on_login_clicked().await;

    assert_eq!(
        *login.state(),
        LoginState::Error("HTTP status code 0: no response from API".to_string())
    );
}

#[tokio::test]
async fn unknown_user_fetch_ends_in_main_account_not_found() {
    let base_url = start_server().await;
    let client = Arc::new(ApiClient::new(base_url));
    let store: Arc<MemorySessionStore> = Arc::new(MemorySessionStore::new());
    store.set_user_identifier("0000");

    let mut account = AccountViewModel::new(AccountRepository::new(client), store);
    account.load().await;

    // The server answers 200 with an empty list; no main account, no success.
    assert_eq!(
        *account.state(),
        AccountState::Error("Main account not found.".to_string())
    );
}
