/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::contact::ContactService;
use crate::application::interfaces::email::EmailService;
use crate::constants::{CONTACT_PATH, SEND_EMAIL_PATH};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    DeleteContactRequest, ListContactRequest, SaveContactRequest, SendEmailRequest,
};
use crate::model::responses::{
    DeleteContactResponse, ListContactResponse, SaveContactResponse, SendEmailResponse,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Sendflare API
///
/// Cheap to clone; clones share the same token and connection pool. Every
/// operation is one request/response round trip.
///
/// # Example
/// ```ignore
/// use sendflare_client::prelude::*;
///
/// let client = Client::new("my-token")?;
/// let req = SendEmailRequest::new("a@x.com", "b@x.com", "hi", "hello");
/// let resp = client.send_email(&req).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the given bearer token against the Sendflare API
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(token: impl Into<String>) -> Result<Self, AppError> {
        Self::from_config(Config::new(token))
    }

    /// Creates a client from an explicit configuration
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Returns the configuration used by this client
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Gets the underlying HTTP client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl EmailService for Client {
    async fn send_email(&self, req: &SendEmailRequest) -> Result<SendEmailResponse, AppError> {
        info!("Sending email to {}", req.to);
        let result: SendEmailResponse = self.http_client.post(SEND_EMAIL_PATH, req).await?;
        debug!(
            "Email sent: request {} success {}",
            result.request_id, result.success
        );
        Ok(result)
    }
}

#[async_trait]
impl ContactService for Client {
    async fn get_contact_list(
        &self,
        req: &ListContactRequest,
    ) -> Result<ListContactResponse, AppError> {
        info!(
            "Getting contacts of {} (page {}, size {})",
            req.app_id, req.pagination.page, req.pagination.page_size
        );
        let result: ListContactResponse = self.http_client.get(CONTACT_PATH, req).await?;
        debug!(
            "Contacts obtained: {} of {}",
            result.len(),
            result.pagination.total_count
        );
        Ok(result)
    }

    async fn save_contact(
        &self,
        req: &SaveContactRequest,
    ) -> Result<SaveContactResponse, AppError> {
        info!("Saving contact {} in {}", req.email_address, req.app_id);
        let result: SaveContactResponse = self.http_client.post(CONTACT_PATH, req).await?;
        debug!("Contact saved: request {}", result.request_id);
        Ok(result)
    }

    async fn delete_contact(
        &self,
        req: &DeleteContactRequest,
    ) -> Result<DeleteContactResponse, AppError> {
        info!("Deleting contact {} from {}", req.email_address, req.app_id);
        let result: DeleteContactResponse = self.http_client.delete(CONTACT_PATH, req).await?;
        debug!("Contact deleted: request {}", result.request_id);
        Ok(result)
    }
}
