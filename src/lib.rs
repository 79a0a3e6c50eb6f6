/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Sendflare Client
//!
//! Client for the Sendflare transactional email and contact API.
//!
//! Four operations are available, each one a single HTTP round trip:
//!
//! | Operation | Verb | Path |
//! |---|---|---|
//! | [`EmailService::send_email`](application::interfaces::email::EmailService::send_email) | POST | `/v1/send` |
//! | [`ContactService::get_contact_list`](application::interfaces::contact::ContactService::get_contact_list) | GET | `/v1/contact` |
//! | [`ContactService::save_contact`](application::interfaces::contact::ContactService::save_contact) | POST | `/v1/contact` |
//! | [`ContactService::delete_contact`](application::interfaces::contact::ContactService::delete_contact) | DELETE | `/v1/contact` |
//!
//! Every request carries `Authorization: Bearer <token>` and
//! `Content-Type: application/json` and runs under a 10 second timeout.
//! Nothing is retried. The response envelope is returned as is: a
//! `success: false` envelope is data for the caller, not an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sendflare_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new("this-is-my-token")?;
//!
//! let req = SendEmailRequest::new("test@example.com", "to@example.com", "test", "test email");
//! let resp = client.send_email(&req).await?;
//! if !resp.success {
//!     eprintln!("service refused: {}", resp.message);
//! }
//!
//! let page = client
//!     .get_contact_list(&ListContactRequest::new("my-app").with_page_size(50))
//!     .await?;
//! for contact in &page {
//!     println!("{}", contact.email_address);
//! }
//! # Ok(())
//! # }
//! ```

/// Application layer: client, configuration and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Request, response and transport models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
