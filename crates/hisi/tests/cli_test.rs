//! Integration tests for the `hisi` CLI binary.
//!
//! Argument parsing, help output and completions run without a backend;
//! the rest point the binary at a wiremock server through `--api-url`.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `hisi` binary with env isolation.
///
/// Clears all `HISI_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn hisi_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("hisi");
    cmd.env("HOME", "/tmp/hisi-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/hisi-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("HISI_PROFILE")
        .env_remove("HISI_API_URL")
        .env_remove("HISI_TOKEN")
        .env_remove("HISI_OUTPUT")
        .env_remove("HISI_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn orders_body(count: usize, total: u64) -> serde_json::Value {
    let orders: Vec<_> = (1..=count)
        .map(|i| {
            json!({
                "id": i,
                "order_number": format!("HS-{i:04}"),
                "customer_name": "Ada Obi",
                "customer_email": "ada@example.com",
                "total": 89000,
                "status": "pending"
            })
        })
        .collect();
    json!({"success": true, "data": {"orders": orders, "total": total}})
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = hisi_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    hisi_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("products")
            .and(predicate::str::contains("orders"))
            .and(predicate::str::contains("settings"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_version_flag() {
    hisi_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hisi"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    hisi_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    hisi_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = hisi_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = hisi_cmd()
        .args(["--output", "invalid", "products", "featured"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_invalid_order_status() {
    hisi_cmd()
        .args(["orders", "status", "1", "lost"])
        .assert()
        .code(2);
}

#[test]
fn test_admin_command_without_token() {
    hisi_cmd()
        .args(["--api-url", "http://127.0.0.1:9", "orders", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("set-token"));
}

#[test]
fn test_newsletter_rejects_bad_email() {
    hisi_cmd()
        .args(["--api-url", "http://127.0.0.1:9", "newsletter", "subscribe", "ada"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a valid email"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    hisi_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default profile: default"));
}

#[test]
fn test_config_path() {
    hisi_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_unknown_profile() {
    hisi_cmd()
        .args(["--profile", "staging", "products", "featured"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("staging"));
}

// ── Storefront against a mock backend ───────────────────────────────

#[test]
fn test_featured_falls_back_when_unreachable() {
    hisi_cmd()
        .args([
            "--api-url",
            "http://127.0.0.1:9",
            "--timeout",
            "2",
            "-o",
            "plain",
            "products",
            "featured",
        ])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 5))
        .stderr(predicate::str::contains("showing built-in products"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_featured_empty_store_uses_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .and(query_param("featured", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"items": [], "pagination": {"total": 0}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = hisi_cmd()
        .args(["--api-url", &server.uri(), "-o", "json", "products", "featured"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let products: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(products.len(), 5);
}

// ── Admin against a mock backend ────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_orders_list_prints_page_footer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orders"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "20"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders_body(12, 47)))
        .expect(1)
        .mount(&server)
        .await;

    hisi_cmd()
        .args([
            "--api-url",
            &server.uri(),
            "--token",
            "admin-token",
            "orders",
            "list",
            "--status",
            "pending",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("HS-0012")
                .and(predicate::str::contains("Page 1 of 3 (47 total)")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_order_status_refetches_order() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/admin/orders/4/status"))
        .and(body_json(json!({"status": "shipped"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orders/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 4, "order_number": "HS-0004", "status": "shipped", "total": 45000}
        })))
        .expect(1)
        .mount(&server)
        .await;

    hisi_cmd()
        .args([
            "--api-url",
            &server.uri(),
            "--token",
            "admin-token",
            "-o",
            "plain",
            "orders",
            "status",
            "4",
            "shipped",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("shipped"))
        .stderr(predicate::str::contains("Status update succeeded"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_order_status_failure_shows_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/admin/orders/9/status"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Order already delivered"})),
        )
        .mount(&server)
        .await;

    hisi_cmd()
        .args([
            "--api-url",
            &server.uri(),
            "--token",
            "admin-token",
            "orders",
            "status",
            "9",
            "cancelled",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Order already delivered"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_media_delete_requires_yes_without_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    hisi_cmd()
        .args([
            "--api-url",
            &server.uri(),
            "--token",
            "admin-token",
            "media",
            "delete",
            "12",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

// ── Editors ─────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_content_edit_updates_and_adds_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/section-content"))
        .and(query_param("page_name", "home"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {"id": "s-1", "page_name": "home", "section_name": "hero",
                 "content_key": "title", "content_value": "2 THUKU 0 COLLECTION",
                 "content_type": "text"}
            ]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/admin/section-content/bulk"))
        .and(body_json(json!({"items": [{"id": "s-1", "content_value": "New Season"}]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"updated_count": 1}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/admin/section-content"))
        .and(body_json(json!({
            "page_name": "home", "section_name": "hero", "content_key": "subtitle",
            "content_value": "Adaptive wear", "content_type": "text"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": "s-2", "page_name": "home", "section_name": "hero",
                     "content_key": "subtitle", "content_value": "Adaptive wear"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    hisi_cmd()
        .args([
            "--api-url",
            &server.uri(),
            "--token",
            "admin-token",
            "content",
            "edit",
            "home",
            "hero.title=New Season",
            "hero.subtitle=Adaptive wear",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 updated, 1 added"));
}

#[test]
fn test_content_edit_rejects_edit_without_section() {
    hisi_cmd()
        .args([
            "--api-url",
            "http://127.0.0.1:9",
            "--token",
            "admin-token",
            "content",
            "edit",
            "home",
            "title=New Season",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("section.key=value"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_update_sends_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/products/31"))
        .and(body_json(json!({"price": 52000.0, "badge": "Sale"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Product updated successfully",
            "product": {"id": 31, "name": "Seated Comfort Trousers", "price": 52000, "badge": "Sale"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    hisi_cmd()
        .args([
            "--api-url",
            &server.uri(),
            "--token",
            "admin-token",
            "-o",
            "plain",
            "products",
            "update",
            "31",
            "--price",
            "52000",
            "--badge",
            "Sale",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("31"))
        .stderr(predicate::str::contains("Product 31 updated"));
}

#[test]
fn test_products_create_needs_sku() {
    hisi_cmd()
        .args([
            "--api-url",
            "http://127.0.0.1:9",
            "--token",
            "admin-token",
            "products",
            "create",
            "--name",
            "Seated Comfort Trousers",
            "--price",
            "45000",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("SKU is required"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blog_create_saves_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/admin/blog"))
        .and(body_json(json!({
            "title": "Dressing for Comfort",
            "slug": "dressing-for-comfort",
            "is_published": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 8, "slug": "dressing-for-comfort", "title": "Dressing for Comfort"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    hisi_cmd()
        .args([
            "--api-url",
            &server.uri(),
            "--token",
            "admin-token",
            "blog",
            "create",
            "--title",
            "Dressing for Comfort",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("saved as draft"));
}

// ── Reviews ─────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_reviews_stats_shows_average() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/reviews/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "total_reviews": 3,
                "average_rating": 4.7,
                "rating_distribution": {"4": 1, "5": 2}
            }
        })))
        .mount(&server)
        .await;

    hisi_cmd()
        .args(["--api-url", &server.uri(), "reviews", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.7 / 5").and(predicate::str::contains("5★")));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reviews_moderate_approves() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/admin/reviews/r-1"))
        .and(body_json(json!({"is_approved": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "r-1", "rating": 5, "content": "Great fit", "is_approved": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    hisi_cmd()
        .args([
            "--api-url",
            &server.uri(),
            "--token",
            "admin-token",
            "reviews",
            "moderate",
            "r-1",
            "approve",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Review r-1 approved"));
}

#[test]
fn test_reviews_submit_rejects_six_stars() {
    hisi_cmd()
        .args([
            "--api-url",
            "http://127.0.0.1:9",
            "--token",
            "t",
            "reviews",
            "submit",
            "--rating",
            "6",
            "-m",
            "Lovely",
        ])
        .assert()
        .code(2);
}
