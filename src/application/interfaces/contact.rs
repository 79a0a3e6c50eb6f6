use crate::error::AppError;
use crate::model::requests::{DeleteContactRequest, ListContactRequest, SaveContactRequest};
use crate::model::responses::{DeleteContactResponse, ListContactResponse, SaveContactResponse};
use async_trait::async_trait;

/// Interface for the contact service
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Gets one page of the contacts of an application
    ///
    /// Only the requested page is fetched; use
    /// [`ListContactRequest::next_page`] to ask for the following one.
    async fn get_contact_list(
        &self,
        req: &ListContactRequest,
    ) -> Result<ListContactResponse, AppError>;

    /// Creates a contact or updates its attributes
    async fn save_contact(&self, req: &SaveContactRequest)
    -> Result<SaveContactResponse, AppError>;

    /// Deletes a contact
    ///
    /// Sends the same request every time; deleting twice is left to the service.
    async fn delete_contact(
        &self,
        req: &DeleteContactRequest,
    ) -> Result<DeleteContactResponse, AppError>;
}
