use wiremock::{
    Mock, ResponseTemplate,
    matchers::{header_exists, method, path},
};

use crate::helpers::{DOCUMENTS_PATH, spawn_app};

#[tokio::test]
async fn subscribe_returns_200_for_valid_form_data() {
    let app = spawn_app().await;
    let body = "email=user%40example.com";

    Mock::given(path(DOCUMENTS_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app.post_subscription(body.into()).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_persists_one_tagged_record() {
    let app = spawn_app().await;
    let body = "email=user%40example.com";

    Mock::given(path(DOCUMENTS_PATH))
        .and(method("POST"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.store_server)
        .await;

    app.post_subscription(body.into()).await;

    let received = &app.store_server.received_requests().await.unwrap()[0];
    let document: serde_json::Value = serde_json::from_slice(&received.body).unwrap();
    let fields = &document["fields"];

    assert_eq!(fields["email"]["stringValue"], "user@example.com");
    assert_eq!(fields["type"]["stringValue"], "newsletter_subscription");
    assert!(fields["timestamp"]["timestampValue"].is_string());
}

#[tokio::test]
async fn subscribe_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    let test_cases = vec![("", "missing the email"), ("name=le%20guin", "only a name")];

    for (data, err_message) in test_cases {
        let response = app.post_subscription(data.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            err_message
        );
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_when_email_is_present_but_invalid() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.store_server)
        .await;

    let test_cases = vec![
        ("email=", "empty email"),
        ("email=%20%20", "whitespace-only email"),
        ("email=definitely-not-an-email", "invalid email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_subscription(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        )
    }
}

#[tokio::test]
async fn subscribe_returns_500_when_the_store_write_fails() {
    let app = spawn_app().await;

    Mock::given(path(DOCUMENTS_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app
        .post_subscription("email=user%40example.com".into())
        .await;

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_returns_500_when_the_store_is_too_slow() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app
        .post_subscription("email=user%40example.com".into())
        .await;

    assert_eq!(500, response.status().as_u16());
}
