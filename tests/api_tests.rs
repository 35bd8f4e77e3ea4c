//! Integration tests for the page routes and the JSON API.

mod common;

use axum::http::StatusCode;
use common::{offline_server, server, server_with, test_config, ScriptedClient};
use khouse::utils::toml_config::FeatureConfig;
use khouse::AiBridge;
use khouse_content::{room_card, RATES, ROOM_CARDS};
use rstest::rstest;
use serde_json::{json, Value};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("location is ascii")
        .to_string()
}

// ============= Pages & Language =============

#[tokio::test]
async fn test_index_defaults_to_english() {
    let server = offline_server();
    let response = server.get("/").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(page.contains("Luxury Apartment Condo Style"));
    assert!(page.contains("href=\"/static/site.css\""));
}

#[rstest]
#[case("th", "th", "ltr")]
#[case("en", "en", "ltr")]
#[case("jp", "ja", "ltr")]
#[case("cn", "zh", "ltr")]
#[case("ar", "ar", "rtl")]
#[case("fr", "en", "ltr")]
#[tokio::test]
async fn test_lang_query_sets_language_and_direction(
    #[case] code: &str,
    #[case] html_lang: &str,
    #[case] dir: &str,
) {
    let server = offline_server();
    let response = server.get("/").add_query_param("lang", code).await;

    response.assert_status_ok();
    let expected = format!(r#"<html lang="{}" dir="{}">"#, html_lang, dir);
    assert!(response.text().contains(&expected));
}

#[tokio::test]
async fn test_language_choice_sticks_to_the_session() {
    let server = offline_server();

    let response = server.post("/language").form(&[("lang", "jp")]).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let page = server.get("/").await.text();
    assert!(page.contains(r#"lang="ja""#));
    assert!(page.contains("ホーム"));

    server.get("/").add_query_param("lang", "ar").await.assert_status_ok();
    let page = server.get("/").await.text();
    assert!(page.contains(r#"dir="rtl""#));
}

#[tokio::test]
async fn test_unknown_language_form_falls_back_to_english() {
    let server = offline_server();
    server.post("/language").form(&[("lang", "ar")]).await;
    server.post("/language").form(&[("lang", "xx")]).await;

    let page = server.get("/").await.text();
    assert!(page.contains(r#"<html lang="en" dir="ltr">"#));
}

#[tokio::test]
async fn test_promotion_dismissal_lasts_for_the_session() {
    let server = offline_server();
    assert!(server.get("/").await.text().contains("promo-toast"));

    let response = server
        .post("/promotion/dismiss")
        .add_query_param("to", "rooms")
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/#rooms");

    assert!(!server.get("/").await.text().contains("promo-toast"));
}

// ============= Gallery =============

#[tokio::test]
async fn test_gallery_wraps_in_both_directions() {
    let server = offline_server();
    let card = room_card(0).unwrap();
    let len = card.images.len();

    let page = server.get("/rooms/0/gallery").await.text();
    assert!(page.contains("gallery-overlay"));
    assert!(page.contains("Gallery Image 1\""));

    let response = server.post("/rooms/0/gallery/prev").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/rooms/0/gallery");

    let page = server.get("/rooms/0/gallery").await.text();
    assert!(page.contains(card.images[len - 1]));
    assert!(page.contains(&format!("Gallery Image {}\"", len)));

    server.post("/rooms/0/gallery/next").await;
    let page = server.get("/rooms/0/gallery").await.text();
    assert!(page.contains("Gallery Image 1\""));
}

#[tokio::test]
async fn test_gallery_for_another_room_starts_at_first_image() {
    let server = offline_server();
    server.get("/rooms/0/gallery").await;
    server.post("/rooms/0/gallery/next").await;

    let other = room_card(2).unwrap();
    let page = server.get("/rooms/2/gallery").await.text();
    assert!(page.contains(&format!(r#"src="{}""#, other.images[0])));
}

#[tokio::test]
async fn test_gallery_close_and_unknown_room() {
    let server = offline_server();
    server.get("/rooms/1/gallery").await;

    let response = server.post("/rooms/gallery/close").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/#rooms");
    assert!(!server.get("/").await.text().contains("gallery-overlay"));

    let missing = ROOM_CARDS.len() as u32 + 10;
    server
        .get(&format!("/rooms/{}/gallery", missing))
        .await
        .assert_status_not_found();
}

// ============= Room Matcher =============

#[tokio::test]
async fn test_matcher_form_shows_answer_verbatim() {
    let server = server(ScriptedClient::answering("Studio B fits a 7,000 baht budget."));

    server.get("/matcher").await.assert_status_ok();
    let response = server
        .post("/matcher")
        .form(&[("query", "quiet room, 7000 baht")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let page = server.get("/").await.text();
    assert!(page.contains("AI Recommendation:"));
    assert!(page.contains("Studio B fits a 7,000 baht budget."));
    assert!(page.contains("quiet room, 7000 baht"));
}

#[tokio::test]
async fn test_matcher_offline_shows_failure_message() {
    let server = offline_server();
    server.post("/matcher").form(&[("query", "anything")]).await;

    let page = server.get("/").await.text();
    assert!(page.contains("Error connecting to AI."));
}

#[rstest]
#[case(ScriptedClient::answering("Take the Suite Corner."), "answer", "Take the Suite Corner.")]
#[case(ScriptedClient::empty(), "placeholder", "Please try again.")]
#[case(ScriptedClient::failing(), "failure", "Error connecting to AI.")]
#[tokio::test]
async fn test_matcher_api_outcomes(
    #[case] client: ScriptedClient,
    #[case] outcome: &str,
    #[case] result: &str,
) {
    let server = server(client);
    let response = server
        .post("/api/matcher")
        .json(&json!({ "query": "two people, long stay" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["outcome"], outcome);
    assert_eq!(body["result"], result);
}

#[tokio::test]
async fn test_blank_question_is_rejected_without_a_call() {
    let client = ScriptedClient::answering("unused");
    let server = server(client.clone());

    server
        .post("/api/matcher")
        .json(&json!({ "query": "   " }))
        .await
        .assert_status_bad_request();
    server
        .post("/api/chat")
        .json(&json!({ "message": "" }))
        .await
        .assert_status_bad_request();

    server.post("/matcher").form(&[("query", "")]).await;
    assert_eq!(client.calls(), 0);
}

// ============= Chatbot =============

#[tokio::test]
async fn test_chat_api_keeps_session_log() {
    let server = server(ScriptedClient::answering("Yes, we have indoor parking."));

    server
        .post("/api/chat")
        .json(&json!({ "message": "Is there parking?" }))
        .await
        .assert_status_ok();
    let response = server
        .post("/api/chat")
        .json(&json!({ "message": "And wifi?" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["reply"], "Yes, we have indoor parking.");
    assert_eq!(body["outcome"], "answer");

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["text"], "Is there parking?");
    assert_eq!(messages[3]["role"], "assistant");
}

#[tokio::test]
async fn test_chat_widget_renders_log() {
    let server = server(ScriptedClient::answering("Studios start at 5,500 baht."));

    server.get("/chat").await.assert_status_ok();
    let response = server.post("/chat").form(&[("message", "Cheapest room?")]).await;
    response.assert_status(StatusCode::SEE_OTHER);

    let page = server.get("/").await.text();
    assert!(page.contains("chat-panel"));
    assert!(page.contains("Cheapest room?"));
    assert!(page.contains("Studios start at 5,500 baht."));

    server.post("/chat/close").await;
    assert!(!server.get("/").await.text().contains("chat-panel"));
}

#[tokio::test]
async fn test_second_question_while_pending_is_refused() {
    let client = ScriptedClient::answering("ok").with_delay(Duration::from_millis(300));
    let server = server(client.clone());

    // Establish the session and visitor id first
    server
        .post("/api/chat")
        .json(&json!({ "message": "hello" }))
        .await
        .assert_status_ok();

    let first = server
        .post("/api/chat")
        .json(&json!({ "message": "first" }))
        .into_future();
    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        server
            .post("/api/chat")
            .json(&json!({ "message": "second" }))
            .await
    };
    let (first, second) = tokio::join!(first, second);

    first.assert_status_ok();
    second.assert_status(StatusCode::CONFLICT);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_overlapping_chat_and_matcher_keep_both_updates() {
    let client = ScriptedClient::answering("Room 2 fits you.").with_delay(Duration::from_millis(300));
    let server = server(client.clone());

    server
        .post("/api/chat")
        .json(&json!({ "message": "hello" }))
        .await
        .assert_status_ok();

    let matcher = server
        .post("/matcher")
        .form(&[("query", "quiet room near BTS")])
        .into_future();
    let chat = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        server
            .post("/api/chat")
            .json(&json!({ "message": "second" }))
            .await
    };
    let (matcher, chat) = tokio::join!(matcher, chat);
    matcher.assert_status(StatusCode::SEE_OTHER);
    chat.assert_status_ok();

    let body: Value = server
        .post("/api/chat")
        .json(&json!({ "message": "third" }))
        .await
        .json();
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(6));

    let page = server.get("/").await.text();
    assert!(page.contains("quiet room near BTS"));
    assert!(page.contains("matcher-result"));
    assert_eq!(client.calls(), 4);
}

// ============= Reservation =============

#[tokio::test]
async fn test_overlapping_chat_and_reservation_keep_both_updates() {
    let mut config = test_config(FeatureConfig::default());
    config.site.reservation_delay_ms = 300;
    let client = ScriptedClient::answering("Indoor parking is free.");
    let server = server_with(config, AiBridge::new(Arc::new(client), "scripted"));

    server.get("/reservation").await.assert_status_ok();

    let reservation = server
        .post("/reservation")
        .form(&[
            ("name", "Ann"),
            ("email", "ann@example.com"),
            ("phone", "081"),
            ("room_type", "2"),
            ("move_in", "2026-11-01"),
        ])
        .into_future();
    let chat = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        server
            .post("/api/chat")
            .json(&json!({ "message": "Is there parking?" }))
            .await
    };
    let (reservation, chat) = tokio::join!(reservation, chat);
    reservation.assert_status(StatusCode::SEE_OTHER);
    chat.assert_status_ok();

    let body: Value = server
        .post("/api/chat")
        .json(&json!({ "message": "And a gym?" }))
        .await
        .json();
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["messages"][0]["text"], "Is there parking?");

    assert!(server.get("/").await.text().contains("Thank you!"));
}

#[tokio::test]
async fn test_reservation_api_rejects_unknown_room_type() {
    let server = offline_server();
    let response = server
        .post("/api/reservation")
        .json(&json!({
            "name": "Ann",
            "email": "ann@example.com",
            "phone": "0812345678",
            "room_type": "zzz",
            "move_in": "2026-11-01"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["fields"], json!(["room_type"]));
}

#[tokio::test]
async fn test_reservation_api_reports_missing_fields() {
    let server = offline_server();
    let response = server
        .post("/api/reservation")
        .json(&json!({ "name": "Ann", "phone": "0812345678" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["fields"], json!(["email", "room_type", "move_in"]));
}

#[tokio::test]
async fn test_reservation_api_succeeds() {
    let server = offline_server();
    let response = server
        .post("/api/reservation")
        .json(&json!({
            "name": "Ann",
            "email": "ann@example.com",
            "phone": "0812345678",
            "room_type": "1",
            "move_in": "2026-11-01",
            "contract": "0"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "received");
    assert!(body["ticket"].as_str().is_some());
}

#[tokio::test]
async fn test_reservation_form_flow() {
    let server = offline_server();

    let page = server.get("/reservation").await.text();
    assert!(page.contains(r#"action="/reservation""#));

    let response = server
        .post("/reservation")
        .form(&[("name", "Ann"), ("email", ""), ("phone", "081")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    let page = server.get("/").await.text();
    assert!(page.contains("Please fill in this field."));
    assert!(page.contains(r#"value="Ann""#));

    server
        .post("/reservation")
        .form(&[
            ("name", "Ann"),
            ("email", "ann@example.com"),
            ("phone", "081"),
            ("room_type", "0"),
            ("move_in", "2026-11-01"),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let page = server.get("/").await.text();
    assert!(page.contains("Thank you!"));

    // Reopening starts over
    let page = server.get("/reservation").await.text();
    assert!(!page.contains("Thank you!"));
    assert!(!page.contains(r#"value="Ann""#));
}

// ============= Feature Flags =============

#[tokio::test]
async fn test_disabled_features_answer_not_found() {
    let features = FeatureConfig {
        room_matcher: false,
        chatbot: false,
        reservation: false,
    };
    let server = server_with(test_config(features), AiBridge::offline());

    server.get("/matcher").await.assert_status_not_found();
    server.post("/chat").form(&[("message", "hi")]).await.assert_status_not_found();
    server.get("/reservation").await.assert_status_not_found();
    server
        .post("/api/matcher")
        .json(&json!({ "query": "hi" }))
        .await
        .assert_status_not_found();

    let page = server.get("/").await.text();
    assert!(!page.contains(r#"href="/chat""#));
    assert!(!page.contains(r#"href="/reservation""#));
    assert!(!page.contains(r#"href="/matcher""#));
}

// ============= JSON Catalog =============

#[tokio::test]
async fn test_health_reports_provider_and_features() {
    let bridge = AiBridge::new(Arc::new(ScriptedClient::empty()), "scripted");
    let server = server_with(test_config(FeatureConfig::default()), bridge);

    let body: Value = server.get("/api/health").await.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ai"], "scripted");
    assert_eq!(body["features"]["chatbot"], true);
}

#[tokio::test]
async fn test_languages_and_content() {
    let server = offline_server();

    let languages: Value = server.get("/api/languages").await.json();
    let languages = languages.as_array().unwrap();
    assert_eq!(languages.len(), 5);
    let arabic = languages.iter().find(|l| l["code"] == "ar").unwrap();
    assert_eq!(arabic["direction"], "rtl");

    let body: Value = server.get("/api/content/ar").await.json();
    assert_eq!(body["direction"], "rtl");
    assert_eq!(body["fallback"], false);

    let body: Value = server.get("/api/content/fr").await.json();
    assert_eq!(body["language"], "en");
    assert_eq!(body["fallback"], true);
    assert_eq!(body["direction"], "ltr");
    assert_eq!(body["content"]["nav"]["home"], "Home");
}

#[tokio::test]
async fn test_rooms_and_rates() {
    let server = offline_server();

    let body: Value = server.get("/api/rooms").add_query_param("lang", "cn").await.json();
    assert_eq!(body["language"], "cn");
    let rooms = body["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), ROOM_CARDS.len());
    assert_eq!(rooms[0]["title"], "单间公寓 A (大阳台)");

    let rates: Value = server.get("/api/rates").await.json();
    let rates = rates.as_array().unwrap();
    assert_eq!(rates.len(), RATES.len());
    assert!(rates.iter().any(|r| r["three_months"].is_null()));
}

#[tokio::test]
async fn test_openapi_and_static_assets() {
    let server = offline_server();

    let doc: Value = server.get("/api-docs/openapi.json").await.json();
    assert!(doc["paths"]["/api/chat"].is_object());

    let css = server.get("/static/site.css").await;
    css.assert_status_ok();
    assert_eq!(css.header("content-type").to_str().unwrap(), "text/css");

    server.get("/static/nope.png").await.assert_status_not_found();
}
