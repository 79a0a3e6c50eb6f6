use assert_json_diff::assert_json_eq;
use sendflare_client::model::http::query_pairs;
use sendflare_client::model::requests::{
    DeleteContactRequest, ListContactRequest, PaginationRequest, SaveContactRequest,
    SendEmailRequest,
};
use serde_json::json;
use std::collections::HashMap;

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn send_email_request_has_exactly_four_keys() {
    let req = SendEmailRequest::new("a@x.com", "b@x.com", "hi", "hello");

    assert_json_eq!(
        json_value(&req),
        json!({"from": "a@x.com", "to": "b@x.com", "subject": "hi", "body": "hello"})
    );
}

#[test]
fn pagination_defaults_to_first_page() {
    let pagination = PaginationRequest::default();
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.page_size, 10);
}

#[test]
fn list_contact_request_flattens_pagination() {
    let req = ListContactRequest::new("app1").with_page(1).with_page_size(10);

    assert_eq!(req.app_id, "app1");
    assert_eq!(req.pagination, PaginationRequest::new(1, 10));
    assert_json_eq!(
        json_value(&req),
        json!({"appId": "app1", "page": 1, "pageSize": 10})
    );
}

#[test]
fn list_contact_request_query_pairs() {
    let req = ListContactRequest::new("app1").with_page(3).with_page_size(25);
    let pairs = query_pairs(&req).unwrap();

    assert_eq!(
        pairs,
        vec![
            ("appId".to_string(), "app1".to_string()),
            ("page".to_string(), "3".to_string()),
            ("pageSize".to_string(), "25".to_string()),
        ]
    );
}

#[test]
fn list_contact_request_next_page() {
    let req = ListContactRequest::new("app1").with_page(2).with_page_size(50);
    let next = req.next_page();

    assert_eq!(next.pagination.page, 3);
    assert_eq!(next.pagination.page_size, 50);
    assert_eq!(next.app_id, "app1");
    // source request untouched
    assert_eq!(req.pagination.page, 2);
}

#[test]
fn list_contact_request_next_page_saturates() {
    let req = ListContactRequest::new("app1").with_page(u32::MAX);
    assert_eq!(req.next_page().pagination.page, u32::MAX);
}

#[test]
fn list_contact_request_deserializes_flat_json() {
    let req: ListContactRequest =
        serde_json::from_str(r#"{"appId":"app9","page":4,"pageSize":20}"#).unwrap();
    assert_eq!(req, ListContactRequest::new("app9").with_page(4).with_page_size(20));
}

#[test]
fn save_contact_request_with_attributes() {
    let req = SaveContactRequest::new("test", "test@example.com")
        .with_attribute("firstName", "John")
        .with_attribute("lastName", "Doe");

    assert_json_eq!(
        json_value(&req),
        json!({
            "appId": "test",
            "emailAddress": "test@example.com",
            "data": {"firstName": "John", "lastName": "Doe"}
        })
    );
}

#[test]
fn save_contact_request_omits_empty_data() {
    let req = SaveContactRequest::new("test", "test@example.com");
    let json = json_value(&req);

    assert!(json.get("data").is_none());
    assert_json_eq!(json, json!({"appId": "test", "emailAddress": "test@example.com"}));
}

#[test]
fn save_contact_request_with_data_replaces_map() {
    let mut data = HashMap::new();
    data.insert("company".to_string(), "Acme".to_string());

    let req = SaveContactRequest::new("test", "test@example.com")
        .with_attribute("firstName", "John")
        .with_data(data.clone());

    assert_eq!(req.data, data);
}

#[test]
fn delete_contact_request_query_pairs() {
    let req = DeleteContactRequest::new("test", "test@example.com");
    let pairs = query_pairs(&req).unwrap();

    assert_eq!(
        pairs,
        vec![
            ("appId".to_string(), "test".to_string()),
            ("emailAddress".to_string(), "test@example.com".to_string()),
        ]
    );
}

#[test]
fn request_display_shows_fields() {
    let req = DeleteContactRequest::new("test", "test@example.com");
    let display = format!("{}", req);
    assert!(display.contains("test@example.com"));
}
