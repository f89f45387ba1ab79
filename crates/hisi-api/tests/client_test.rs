#![allow(clippy::unwrap_used)]
// Integration tests for `StoreClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hisi_api::types::{
    ContactForm, ProductPayload, ReviewSubmission, ReviewUpdate, SectionValueUpdate,
};
use hisi_api::{AuthToken, Error, StoreClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(token: Option<&str>) -> (MockServer, StoreClient) {
    let server = MockServer::start().await;
    let client = StoreClient::with_client(
        reqwest::Client::new(),
        &server.uri(),
        token.map(|t| AuthToken::from(t.to_string())),
    )
    .unwrap();
    (server, client)
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ── Storefront ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_products_with_items_and_pagination() {
    let (server, client) = setup(None).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .and(query_param("featured", "true"))
        .and(query_param("per_page", "8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "items": [
                    {"id": 1, "name": "Adaptive Bomber Jacket", "price": 89000, "original_price": 120000},
                    {"id": 2, "name": "Inclusive Wrap Dress", "price": 65000}
                ],
                "pagination": {"page": 1, "per_page": 8, "total": 2, "total_pages": 1}
            }
        })))
        .mount(&server)
        .await;

    let page = client
        .list_products(&params(&[("featured", "true"), ("per_page", "8")]))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 2);
    assert_eq!(page.per_page, 8);
    assert_eq!(page.items[0].original_price, Some(120_000.0));
}

#[tokio::test]
async fn test_anonymous_requests_carry_no_authorization() {
    let (server, client) = setup(None).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/press"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"media_coverage": [{"title": "Fashion for all", "publication": "Vogue"}]}
        })))
        .mount(&server)
        .await;

    let press = client.get_press().await.unwrap();
    assert_eq!(press.media_coverage.len(), 1);
    assert_eq!(press.media_coverage[0].outlet.as_deref(), Some("Vogue"));

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_not_found_surfaces_backend_message() {
    let (server, client) = setup(None).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/products/slug/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Product not found"
        })))
        .mount(&server)
        .await;

    let err = client.get_product_by_slug("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(
        matches!(&err, Error::Api { message, .. } if message == "Product not found"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_error_field_is_used_when_message_absent() {
    let (server, client) = setup(None).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/newsletter/subscribe"))
        .and(body_json(json!({"email": "dup@example.com"})))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Already subscribed"
        })))
        .mount(&server)
        .await;

    let err = client
        .subscribe_newsletter("dup@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 409, ref message, .. } if message == "Already subscribed"));
}

#[tokio::test]
async fn test_contact_form_is_posted() {
    let (server, client) = setup(None).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/contact"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Sizing",
            "message": "Do you ship to Lagos?"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .submit_contact(&ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            subject: "Sizing".into(),
            message: "Do you ship to Lagos?".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_section_content_map() {
    let (server, client) = setup(None).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/section-content/home"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"hero": {"slides": []}, "intro": {"title": "Hello"}}
        })))
        .mount(&server)
        .await;

    let sections = client.get_section_content("home").await.unwrap();
    assert!(sections.contains_key("hero"));
    assert_eq!(sections["intro"]["title"], "Hello");
}

// ── Admin ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_orders_carry_bearer_and_sibling_total() {
    let (server, client) = setup(Some("secret-token")).await;

    let orders: Vec<_> = (1..=12)
        .map(|i| json!({"id": i, "order_number": format!("HS-{i:04}"), "total": 42000, "status": "pending"}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v1/orders"))
        .and(header("authorization", "Bearer secret-token"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"orders": orders, "total": 47}
        })))
        .mount(&server)
        .await;

    let page = client
        .list_orders(&params(&[("page", "1"), ("per_page", "20")]))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 12);
    assert_eq!(page.total, 47);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 20);
}

#[tokio::test]
async fn test_admin_call_without_token_never_hits_network() {
    let (server, client) = setup(None).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.list_customers(&[]).await;
    assert!(matches!(result, Err(Error::MissingToken)));
}

#[tokio::test]
async fn test_rejected_token_maps_to_unauthorized() {
    let (server, client) = setup(Some("stale")).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/settings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Token has expired"
        })))
        .mount(&server)
        .await;

    let err = client.get_admin_settings().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(matches!(err, Error::Unauthorized { ref message } if message == "Token has expired"));
}

#[tokio::test]
async fn test_order_status_patch() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/admin/orders/17/status"))
        .and(body_json(json!({"status": "shipped"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    client.update_order_status("17", "shipped").await.unwrap();
}

#[tokio::test]
async fn test_media_upload_is_multipart_file_field() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/admin/media/upload"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": "m-1", "original_filename": "look.jpg", "url": "/uploads/look.jpg", "file_size": 4}
        })))
        .mount(&server)
        .await;

    let media = client
        .upload_media("look.jpg", b"\xff\xd8\xff\xe0".to_vec())
        .await
        .unwrap();
    assert_eq!(media.filename, "look.jpg");
    assert_eq!(media.size, Some(4));

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"look.jpg\""));
}

#[tokio::test]
async fn test_customers_keyed_list() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/customers"))
        .and(query_param("search", "ada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "customers": [{"id": 3, "first_name": "Ada", "last_name": "Obi", "email": "ada@example.com"}],
                "pagination": {"page": 1, "limit": 10, "total": 1, "pages": 1}
            }
        })))
        .mount(&server)
        .await;

    let page = client
        .list_customers(&params(&[("search", "ada")]))
        .await
        .unwrap();
    assert_eq!(page.items[0].email, "ada@example.com");
    assert_eq!(page.per_page, 10);
}

#[tokio::test]
async fn test_analytics_export_returns_raw_bytes() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/analytics/export"))
        .and(query_param("period", "30d"))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("date,revenue\n2024-06-01,1000\n"))
        .mount(&server)
        .await;

    let bytes = client.export_analytics("30d", "csv").await.unwrap();
    assert!(String::from_utf8(bytes).unwrap().starts_with("date,revenue"));
}

#[tokio::test]
async fn test_malformed_body_reports_deserialization() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/dashboard/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client.get_dashboard("7d").await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { ref body, .. } if body.contains("gateway")));
}

// ── Reviews ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_review_stats_for_one_product() {
    let (server, client) = setup(None).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/reviews/stats"))
        .and(query_param("product_id", "p-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "total_reviews": 3,
                "average_rating": 4.7,
                "rating_distribution": {"1": 0, "2": 0, "3": 0, "4": 1, "5": 2}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stats = client.get_review_stats(Some("p-7")).await.unwrap();
    assert_eq!(stats.total_reviews, 3);
    assert_eq!(stats.rating_distribution.get("5"), Some(&2));
}

#[tokio::test]
async fn test_review_submission_needs_token() {
    let (_server, client) = setup(None).await;
    let review = ReviewSubmission {
        rating: 5,
        title: None,
        content: "Lovely".into(),
        product_id: None,
    };
    assert!(matches!(
        client.submit_review(&review).await,
        Err(Error::MissingToken)
    ));
}

#[tokio::test]
async fn test_review_moderation_sends_only_changed_flag() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/admin/reviews/r-1"))
        .and(body_json(json!({"is_approved": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "r-1", "rating": 4, "content": "Great fit", "is_approved": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = ReviewUpdate {
        is_approved: Some(true),
        ..ReviewUpdate::default()
    };
    let review = client.update_review("r-1", &update).await.unwrap();
    assert!(review.is_approved);
}

// ── Editors ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_product_create_reads_unwrapped_response() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/products"))
        .and(body_json(json!({
            "name": "Seated Comfort Trousers", "slug": "seated-comfort-trousers",
            "sku": "HS-ST-02", "price": 45000.0, "stock_quantity": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Product created successfully",
            "product": {"id": 31, "name": "Seated Comfort Trousers", "slug": "seated-comfort-trousers", "price": 45000}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = ProductPayload {
        name: Some("Seated Comfort Trousers".into()),
        slug: Some("seated-comfort-trousers".into()),
        sku: Some("HS-ST-02".into()),
        price: Some(45_000.0),
        stock_quantity: Some(0),
        ..ProductPayload::default()
    };
    let product = client.create_product(&payload).await.unwrap();
    assert_eq!(product.id.to_string(), "31");
}

#[tokio::test]
async fn test_duplicate_slug_is_conflict() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/products"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "Slug already exists"})))
        .mount(&server)
        .await;

    let err = client
        .create_product(&ProductPayload::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 409, ref message, .. } if message == "Slug already exists"));
}

#[tokio::test]
async fn test_section_bulk_update_counts() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/admin/section-content/bulk"))
        .and(body_json(json!({"items": [{"id": "s-1", "content_value": "Our Mission"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "message": "Updated 1 items", "data": {"updated_count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client
        .bulk_update_sections(&[SectionValueUpdate {
            id: "s-1".into(),
            content_value: json!("Our Mission"),
        }])
        .await
        .unwrap();
    assert_eq!(updated, 1);
}

#[tokio::test]
async fn test_section_items_for_page() {
    let (server, client) = setup(Some("t")).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/section-content"))
        .and(query_param("page_name", "home"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "grouped": {"home": {"hero": []}},
                "items": [
                    {"id": "s-1", "page_name": "home", "section_name": "hero",
                     "content_key": "title", "content_value": "2 THUKU 0 COLLECTION",
                     "content_type": "text", "label": "Hero Title", "display_order": 0}
                ]
            }
        })))
        .mount(&server)
        .await;

    let items = client.list_section_items("home").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].content_key, "title");
}
