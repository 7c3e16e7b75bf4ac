use std::time::Duration;

use wiremock::matchers::{
    header,
    method,
    path,
};
use wiremock::{
    Mock,
    ResponseTemplate,
};

use crate::helpers::*;

#[actix_rt::test]
async fn created_admin_receives_the_welcome_email() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/send"))
        .and(header("Authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let response = test_app
        .post_document_event(&document_event(
            ADMIN_CREATED,
            "admins/u1",
            &[("email", "a@example.com"), ("name", "Alice")],
        ))
        .await;
    assert_eq!(200, response.status().as_u16());

    let sent = test_app.sent_emails().await;
    let message = &sent[0]["Messages"][0];
    assert_eq!(message["To"][0]["Email"], "a@example.com");
    assert_eq!(message["From"]["Name"], "BaskuBN");
    assert_eq!(message["Subject"], "Welcome to BaskuBN");
    assert_eq!(
        message["TextPart"],
        "Hi Alice, you have registered as a new admin user for BaskuBN. We're glad to have you \
         onboard."
    );
    assert_eq!(message["CustomID"], "u1");
}

#[actix_rt::test]
async fn relay_failure_is_not_surfaced_and_not_retried() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let response = test_app
        .post_document_event(&document_event(
            ADMIN_CREATED,
            "admins/u1",
            &[("email", "a@example.com"), ("name", "Alice")],
        ))
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[actix_rt::test]
async fn empty_email_is_submitted_and_rejection_is_swallowed() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let response = test_app
        .post_document_event(&document_event(
            ADMIN_CREATED,
            "admins/u2",
            &[("email", ""), ("name", "Bob")],
        ))
        .await;
    assert_eq!(200, response.status().as_u16());

    let sent = test_app.sent_emails().await;
    assert_eq!(sent[0]["Messages"][0]["To"][0]["Email"], "");
}

#[actix_rt::test]
async fn missing_fields_still_produce_one_attempt() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let response = test_app
        .post_document_event(&document_event(ADMIN_CREATED, "admins/u3", &[]))
        .await;
    assert_eq!(200, response.status().as_u16());

    let sent = test_app.sent_emails().await;
    assert!(sent[0]["Messages"][0]["TextPart"]
        .as_str()
        .unwrap()
        .starts_with("Hi , you have registered"));
}

#[actix_rt::test]
async fn relay_timeout_is_swallowed() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(4)))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let response = test_app
        .post_document_event(&document_event(
            ADMIN_CREATED,
            "admins/u1",
            &[("email", "a@example.com"), ("name", "Alice")],
        ))
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[actix_rt::test]
async fn events_outside_the_trigger_are_ignored() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.email_server)
        .await;

    let ignored_events = vec![
        (
            document_event(
                ADMIN_UPDATED,
                "admins/u1",
                &[("email", "a@example.com"), ("name", "Alice")],
            ),
            "update of an admin",
        ),
        (
            document_event(
                ADMIN_CREATED,
                "users/u1",
                &[("email", "a@example.com"), ("name", "Alice")],
            ),
            "creation in another collection",
        ),
        (
            document_event(
                ADMIN_CREATED,
                "admins/u1/sessions/s1",
                &[("email", "a@example.com"), ("name", "Alice")],
            ),
            "creation in a sub-collection",
        ),
    ];
    for (event, description) in ignored_events {
        let response = test_app.post_document_event(&event).await;
        assert_eq!(
            204,
            response.status().as_u16(),
            "The {} was not ignored",
            description
        );
    }
}

#[actix_rt::test]
async fn malformed_events_are_rejected() {
    let test_app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.email_server)
        .await;

    let invalid_bodies = vec![
        (serde_json::json!({}), "empty body"),
        (
            serde_json::json!({ "data": { "value": {} } }),
            "missing context",
        ),
        (
            serde_json::json!({
                "context": { "eventId": "e-1", "eventType": ADMIN_CREATED },
                "data": { "value": { "fields": {} } }
            }),
            "document without name",
        ),
    ];
    for (body, description) in invalid_bodies {
        let response = test_app.post_document_event(&body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The event with {} was not rejected",
            description
        );
    }
}
