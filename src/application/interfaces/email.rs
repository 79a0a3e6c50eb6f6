use crate::error::AppError;
use crate::model::requests::SendEmailRequest;
use crate::model::responses::SendEmailResponse;
use async_trait::async_trait;

/// Interface for the email service
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Sends one email
    ///
    /// # Arguments
    /// * `req` - Sender, recipient, subject and body
    ///
    /// # Returns
    /// * The response envelope exactly as returned by the service. A
    ///   `success: false` envelope is still `Ok`.
    async fn send_email(&self, req: &SendEmailRequest) -> Result<SendEmailResponse, AppError>;
}
