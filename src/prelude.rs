/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Sendflare Client Prelude
//!
//! Brings the client, the service traits and every request/response model
//! into scope.
//!
//! ```rust
//! use sendflare_client::prelude::*;
//!
//! let config = Config::new("this-is-my-token");
//! let client = Client::from_config(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Sendflare API client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Public client
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::contact::ContactService;
pub use crate::application::interfaces::email::EmailService;

/// Low level HTTP client
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    DeleteContactRequest, ListContactRequest, PaginationRequest, SaveContactRequest,
    SendEmailRequest,
};

/// Response models
pub use crate::model::responses::{
    CommonResponse, ContactItem, DeleteContactResponse, ListContactResponse, PaginationResponse,
    SaveContactResponse, SendEmailResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};
