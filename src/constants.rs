/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Base origin of the Sendflare REST API
pub const BASE_URL: &str = "https://api.sendflare.io";
/// Path of the send email endpoint
pub const SEND_EMAIL_PATH: &str = "/v1/send";
/// Path shared by the contact list, save and delete endpoints
pub const CONTACT_PATH: &str = "/v1/contact";
/// Wall-clock timeout in seconds applied to every request, connection included
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
/// User agent string used in HTTP requests to identify this client to the Sendflare API
pub const USER_AGENT: &str = concat!("sendflare-client/", env!("CARGO_PKG_VERSION"));
/// Media type sent in the `Content-Type` header of every request
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Default page requested when listing contacts
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size requested when listing contacts
pub const DEFAULT_PAGE_SIZE: u32 = 10;
