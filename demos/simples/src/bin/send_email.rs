use sendflare_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::from_env();
    let client = Client::from_config(config)?;

    let from = std::env::var("SENDFLARE_FROM").unwrap_or_else(|_| "test@example.com".to_string());
    let to = std::env::var("SENDFLARE_TO").unwrap_or_else(|_| "to@example.com".to_string());

    let req = SendEmailRequest::new(from, to, "test", "test email");
    info!("Request: {}", req);

    let resp = client.send_email(&req).await?;
    if resp.success {
        info!("✓ Email accepted: {}", resp.request_id);
    } else {
        warn!("Email refused ({}): {}", resp.code, resp.message);
    }

    Ok(())
}
