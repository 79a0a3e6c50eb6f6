/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Model for sending a single email
///
/// No field is validated locally; the service enforces its own rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct SendEmailRequest {
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Email body
    pub body: String,
}

impl SendEmailRequest {
    /// Creates a new send email request
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Pagination parameters shared by paged requests
///
/// Flattened into the parent, so `page` and `pageSize` travel at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Page number to request
    pub page: u32,
    /// Number of items per page
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl PaginationRequest {
    /// Creates pagination parameters for the given page and size
    #[must_use]
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// Parameters for listing the contacts of an application
///
/// Sent as the query string `appId=..&page=..&pageSize=..`.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct ListContactRequest {
    /// Application identifier
    #[serde(rename = "appId")]
    pub app_id: String,
    /// Page to fetch
    #[serde(flatten)]
    pub pagination: PaginationRequest,
}

impl ListContactRequest {
    /// Create new parameters with just the application id, first page and default size
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            pagination: PaginationRequest::default(),
        }
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.page = page;
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    /// Returns the same request pointed at the following page
    ///
    /// The client never walks pages by itself; this only builds the next request.
    #[must_use]
    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        next.pagination.page = next.pagination.page.saturating_add(1);
        next
    }
}

/// Model for creating or updating a contact
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct SaveContactRequest {
    /// Application identifier
    #[serde(rename = "appId")]
    pub app_id: String,
    /// Email address identifying the contact
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    /// Free-form attributes merged into the contact by the service
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,
}

impl SaveContactRequest {
    /// Creates a save request without attributes
    pub fn new(app_id: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            email_address: email_address.into(),
            data: HashMap::new(),
        }
    }

    /// Adds or replaces one attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole attribute map
    pub fn with_data(mut self, data: HashMap<String, String>) -> Self {
        self.data = data;
        self
    }
}

/// Parameters for deleting a contact, sent as the query string
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct DeleteContactRequest {
    /// Application identifier
    #[serde(rename = "appId")]
    pub app_id: String,
    /// Email address identifying the contact
    #[serde(rename = "emailAddress")]
    pub email_address: String,
}

impl DeleteContactRequest {
    /// Creates a delete request
    pub fn new(app_id: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            email_address: email_address.into(),
        }
    }
}
