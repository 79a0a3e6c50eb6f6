/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Common envelope returned by the send, save and delete endpoints
///
/// `success`, `code` and `message` are reported by the service and are never
/// interpreted by the client.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonResponse {
    /// Identifier assigned to the request by the service
    #[serde(rename = "requestId")]
    pub request_id: String,
    /// Business result code
    pub code: i64,
    /// Whether the service considers the call successful
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Unix timestamp in seconds
    #[serde(rename = "ts")]
    pub timestamp: i64,
    /// Operation-specific payload, `Null` when absent
    pub data: Value,
}

impl CommonResponse {
    /// Returns the envelope timestamp as a UTC date time
    #[must_use]
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Response of the send email endpoint
pub type SendEmailResponse = CommonResponse;
/// Response of the save contact endpoint
pub type SaveContactResponse = CommonResponse;
/// Response of the delete contact endpoint
pub type DeleteContactResponse = CommonResponse;

/// Pagination metadata returned next to paged data
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationResponse {
    /// Page returned
    pub page: u32,
    /// Page size used by the service
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    /// Total number of items across all pages
    #[serde(rename = "totalCount")]
    pub total_count: i64,
}

/// One contact as described by the service
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactItem {
    /// Subscription status
    pub status: String,
    /// Email address
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    /// Preferred language
    pub language: String,
    /// First name
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Phone number
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    /// Birthday as sent by the service
    pub birthday: String,
    /// Company
    pub company: String,
    /// VIP tier
    #[serde(rename = "vipLevel")]
    pub vip_level: i64,
    /// Amount as sent by the service
    pub amount: String,
}

/// Response of the contact list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListContactResponse {
    /// Pagination metadata, flattened at the top level
    #[serde(flatten)]
    pub pagination: PaginationResponse,
    /// Contacts of the requested page, in service order
    #[serde(rename = "data", default)]
    pub list: Vec<ContactItem>,
}

impl ListContactResponse {
    /// Returns the number of contacts in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the page contains no contacts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns a reference to the contacts of this page
    #[must_use]
    pub fn contacts(&self) -> &Vec<ContactItem> {
        &self.list
    }

    /// Returns an iterator over the contacts of this page
    pub fn iter(&self) -> std::slice::Iter<'_, ContactItem> {
        self.list.iter()
    }

    /// Returns true when pages after this one hold more contacts
    #[must_use]
    pub fn has_more(&self) -> bool {
        let seen = i64::from(self.pagination.page) * i64::from(self.pagination.page_size);
        self.pagination.page_size > 0 && seen < self.pagination.total_count
    }
}

impl<'a> IntoIterator for &'a ListContactResponse {
    type Item = &'a ContactItem;
    type IntoIter = std::slice::Iter<'a, ContactItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
