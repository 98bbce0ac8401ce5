//! Demonstration mobile banking client (login, account balance, money
//! transfer) together with the in-memory mock API it talks to during local
//! development. The client side is the repository / state-holder layer only;
//! rendering is left to whatever frontend drives the view-models.

pub mod account;
pub mod bank;
pub mod client;
pub mod handlers;
pub mod login;
pub mod models;
pub mod repository;
pub mod status;
pub mod storage;
pub mod transfer;
