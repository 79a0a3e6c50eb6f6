use crate::common::{AUTH_HEADER, create_test_client, envelope_body};
use mockito::{Matcher, Server};
use sendflare_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn get_contact_list_sends_query_and_decodes_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/contact")
        .match_query(Matcher::Exact("appId=app1&page=1&pageSize=10".to_string()))
        .match_header("authorization", AUTH_HEADER)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"page":1,"pageSize":10,"totalCount":1,"data":[{"emailAddress":"c@x.com","status":"active","language":"en","firstName":"Carl","lastName":"Cox","phoneNumber":"","birthday":"","company":"","vipLevel":1,"amount":"0"}]}"#,
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let req = ListContactRequest::new("app1").with_page(1).with_page_size(10);
    let resp = client
        .get_contact_list(&req)
        .await
        .expect("list should succeed");

    assert_eq!(resp.len(), 1);
    assert_eq!(resp.list[0].email_address, "c@x.com");
    assert_eq!(resp.list[0].status, "active");
    assert_eq!(resp.list[0].vip_level, 1);
    assert_eq!(resp.pagination.page, 1);
    assert_eq!(resp.pagination.page_size, 10);
    assert_eq!(resp.pagination.total_count, 1);
    assert!(!resp.has_more());
    mock.assert_async().await;
}

#[tokio::test]
async fn get_contact_list_next_page_is_caller_driven() {
    let mut server = Server::new_async().await;
    let page_two = server
        .mock("GET", "/v1/contact")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("appId".into(), "app1".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("pageSize".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"page":2,"pageSize":1,"totalCount":2,"data":[{"emailAddress":"b@x.com"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let first = ListContactRequest::new("app1").with_page_size(1);
    let resp = client.get_contact_list(&first.next_page()).await.unwrap();

    assert_eq!(resp.list[0].email_address, "b@x.com");
    assert!(!resp.has_more());
    page_two.assert_async().await;
}

#[tokio::test]
async fn get_contact_list_not_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/contact")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client
        .get_contact_list(&ListContactRequest::new("missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_contact_list_wrong_shape_is_deserialization_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/contact")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"page":1,"pageSize":10,"totalCount":1,"data":"oops"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client
        .get_contact_list(&ListContactRequest::new("app1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Deserialization(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn save_contact_posts_attributes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/contact")
        .match_header("authorization", AUTH_HEADER)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "appId": "test",
            "emailAddress": "test@example.com",
            "data": {"firstName": "John", "lastName": "Doe"}
        })))
        .with_status(200)
        .with_body(envelope_body("s1", true, "saved"))
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let req = SaveContactRequest::new("test", "test@example.com")
        .with_attribute("firstName", "John")
        .with_attribute("lastName", "Doe");
    let resp = client.save_contact(&req).await.expect("save should succeed");

    assert_eq!(resp.request_id, "s1");
    assert!(resp.success);
    assert_eq!(resp.message, "saved");
    mock.assert_async().await;
}

#[tokio::test]
async fn save_contact_without_attributes_omits_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/contact")
        .match_body(Matcher::Json(json!({
            "appId": "test",
            "emailAddress": "test@example.com"
        })))
        .with_status(200)
        .with_body(envelope_body("s2", true, "saved"))
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let req = SaveContactRequest::new("test", "test@example.com");
    client.save_contact(&req).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_contact_sends_query_with_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/contact")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("appId".into(), "test".into()),
            Matcher::UrlEncoded("emailAddress".into(), "test@example.com".into()),
        ]))
        .match_header("authorization", AUTH_HEADER)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(envelope_body("d1", true, "deleted"))
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let req = DeleteContactRequest::new("test", "test@example.com");
    let resp = client.delete_contact(&req).await.expect("delete should succeed");

    assert_eq!(resp.request_id, "d1");
    assert!(resp.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_contact_twice_sends_same_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/contact")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("appId".into(), "test".into()),
            Matcher::UrlEncoded("emailAddress".into(), "test@example.com".into()),
        ]))
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body(envelope_body("d2", true, "deleted"))
        .expect(2)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let req = DeleteContactRequest::new("test", "test@example.com");
    let first = client.delete_contact(&req).await.unwrap();
    let second = client.delete_contact(&req).await.unwrap();

    assert_eq!(first, second);
    mock.assert_async().await;
}
