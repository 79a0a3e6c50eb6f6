use sendflare_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_config(Config::from_env())?;
    let app_id = std::env::var("SENDFLARE_APP_ID").unwrap_or_else(|_| "test".to_string());
    let email = "test@example.com";

    let saved = client
        .save_contact(
            &SaveContactRequest::new(&app_id, email)
                .with_attribute("firstName", "John")
                .with_attribute("lastName", "Doe"),
        )
        .await?;
    info!("Save contact: {}", saved);

    let mut req = ListContactRequest::new(&app_id).with_page_size(10);
    loop {
        let page = client.get_contact_list(&req).await?;
        for contact in &page {
            info!(
                "{} {} <{}> [{}]",
                contact.first_name, contact.last_name, contact.email_address, contact.status
            );
        }
        if !page.has_more() {
            break;
        }
        req = req.next_page();
    }

    let deleted = client
        .delete_contact(&DeleteContactRequest::new(&app_id, email))
        .await?;
    info!(
        "Delete contact: success={} data={}",
        deleted.success,
        serde_json::to_string(&deleted.data)?
    );

    Ok(())
}
