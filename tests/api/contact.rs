use crate::helpers::{spawn_app, spawn_app_with_unreachable_contact_api, valid_contact_body};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn the_contact_page_renders_an_empty_form() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_contact_page().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<form id="contactForm" action="/contact" method="post">"#));
    assert!(!html_page.contains(r#"class="notice"#));
}

#[tokio::test]
async fn a_valid_message_is_forwarded_to_the_contact_api() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/api/contact"))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "abc123"})),
        )
        .expect(1)
        .mount(&app.contact_api)
        .await;

    // Act
    let response = app.post_contact(&valid_contact_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("Reference ID: abc123"));
    assert!(html_page.contains(r#"name="name" value="""#));

    let requests = app.contact_requests().await;
    assert_eq!(
        requests[0],
        serde_json::json!({
            "name": "Ursula Le Guin",
            "email": "ursula_le_guin@gmail.com",
            "subject": "Hello",
            "phone": "",
            "message": "Loved the portfolio!",
            "source": "portfolio",
        })
    );
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "xyz"})),
        )
        .expect(1)
        .mount(&app.contact_api)
        .await;
    let body = serde_json::json!({
        "name": "le guin",
        "email": "ursula_le_guin@gmail.com",
        "message": "Hi",
    });

    // Act
    let response = app.post_contact(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let requests = app.contact_requests().await;
    assert_eq!(requests[0]["subject"], "");
    assert_eq!(requests[0]["phone"], "");
}

#[tokio::test]
async fn contact_returns_a_400_when_required_fields_are_missing_or_invalid() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.contact_api)
        .await;

    let test_cases = vec![
        (
            serde_json::json!({"email": "ursula_le_guin@gmail.com", "message": "Hi"}),
            "missing the name",
        ),
        (
            serde_json::json!({"name": "le guin", "email": "", "message": "Hi"}),
            "empty email",
        ),
        (
            serde_json::json!({
                "name": "le guin",
                "email": "definitely-not-an-email",
                "message": "Hi",
            }),
            "invalid email",
        ),
        (
            serde_json::json!({
                "name": "le guin",
                "email": "ursula_le_guin@gmail.com",
                "message": "  ",
            }),
            "blank message",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_contact(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The page did not fail with 400 Bad Request when the payload had {}",
            error_message
        );
    }
}

#[tokio::test]
async fn a_rejection_shows_the_api_detail_and_keeps_the_input() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"detail": "Invalid email"})),
        )
        .expect(1)
        .mount(&app.contact_api)
        .await;

    // Act
    let response = app.post_contact(&valid_contact_body()).await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<p class="notice error">Invalid email</p>"#));
    assert!(html_page.contains(r#"value="Ursula Le Guin""#));
}

#[tokio::test]
async fn a_contact_api_timeout_is_reported_to_the_user() {
    // Arrange
    let app = spawn_app().await;

    // Slower than the configured client timeout
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "late"}))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .expect(1)
        .mount(&app.contact_api)
        .await;

    // Act
    let response = app.post_contact(&valid_contact_body()).await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"class="notice error""#));
    assert!(!html_page.contains("Reference ID"));
}

#[tokio::test]
async fn an_unreachable_contact_api_is_reported_to_the_user() {
    // Arrange
    let app = spawn_app_with_unreachable_contact_api().await;

    // Act
    let response = app.post_contact(&valid_contact_body()).await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<p class="notice error">error sending request"#));
    assert!(html_page.contains(r#"value="Ursula Le Guin""#));
    assert!(!html_page.contains("Reference ID"));
}
