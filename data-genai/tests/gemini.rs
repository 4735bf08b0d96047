mod common;

use common::serve_once;
use data_error::HubError;
use data_genai::prompts;
use data_genai::{AiGateway, GeminiClient, GeminiConfig, ImageSize};
use serde_json::{json, Value};

fn client(base: &str, premium: Option<&str>) -> GeminiClient {
    GeminiClient::new(GeminiConfig {
        api_key: Some("test-key".to_owned()),
        premium_api_key: premium.map(str::to_owned),
        base_url: base.to_owned(),
        thinking_budget: 1024,
    })
    .unwrap()
}

fn text_reply(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}

#[tokio::test]
async fn ask_short_uses_fast_model_and_system_instruction() {
    let (base, request) =
        serve_once("200 OK", text_reply("Merge a PR without review.")).await;

    let answer = client(&base, None).ask_short("what is yolo?").await.unwrap();
    assert_eq!(answer, "Merge a PR without review.");

    let request = request.await.unwrap();
    assert!(request.head.starts_with(&format!(
        "POST /v1beta/models/{}:generateContent HTTP/1.1",
        prompts::FAST_MODEL
    )));
    assert!(request
        .head
        .to_lowercase()
        .contains("x-goog-api-key: test-key"));

    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "what is yolo?");
    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        prompts::FAST_SYSTEM
    );
}

#[tokio::test]
async fn empty_answer_gets_fallback_text() {
    let (base, _request) =
        serve_once("200 OK", json!({ "candidates": [] }).to_string()).await;
    let answer = client(&base, None).ask_short("anything").await.unwrap();
    assert_eq!(answer, prompts::NO_RESPONSE);
}

#[tokio::test]
async fn search_returns_text_and_sources() {
    let reply = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "There are nine achievements." }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://docs.github.com/achievements", "title": "GitHub Docs" } },
                    { "web": { "title": "dangling" } }
                ]
            }
        }]
    });
    let (base, request) = serve_once("200 OK", reply.to_string()).await;

    let answer = client(&base, None)
        .search_grounded("new badges")
        .await
        .unwrap();
    assert_eq!(answer.text, "There are nine achievements.");
    assert_eq!(answer.sources.len(), 1);
    assert_eq!(answer.sources[0].title, "GitHub Docs");

    let body: Value =
        serde_json::from_str(&request.await.unwrap().body).unwrap();
    assert_eq!(body["tools"], json!([{ "google_search": {} }]));
    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        prompts::search("new badges")
    );
}

#[tokio::test]
async fn search_without_text_reports_no_info() {
    let (base, _request) = serve_once("200 OK", "{}".to_owned()).await;
    let answer = client(&base, None).search_grounded("x").await.unwrap();
    assert_eq!(answer.text, prompts::NO_INFO);
    assert!(answer.sources.is_empty());
}

#[tokio::test]
async fn strategy_sends_thinking_budget() {
    let (base, request) =
        serve_once("200 OK", text_reply("Open 1024 PRs.")).await;

    let answer = client(&base, None)
        .explain_strategy("Pull Shark")
        .await
        .unwrap();
    assert_eq!(answer, "Open 1024 PRs.");

    let request = request.await.unwrap();
    assert!(request.head.contains(prompts::THINKING_MODEL));
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
        1024
    );
}

#[tokio::test]
async fn image_uses_premium_key_and_size() {
    let reply = json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here you go" },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw0K" } }
                ]
            }
        }]
    });
    let (base, request) = serve_once("200 OK", reply.to_string()).await;

    let image = client(&base, Some("premium-key"))
        .generate_image("a rocket", ImageSize::FourK)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBORw0K");

    let request = request.await.unwrap();
    assert!(request
        .head
        .to_lowercase()
        .contains("x-goog-api-key: premium-key"));
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        body["generationConfig"]["imageConfig"],
        json!({ "imageSize": "4K", "aspectRatio": "1:1" })
    );
    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        prompts::badge_design("a rocket")
    );
}

#[tokio::test]
async fn image_reply_without_image_is_none() {
    let (base, _request) =
        serve_once("200 OK", text_reply("I cannot draw that.")).await;
    let image = client(&base, Some("premium-key"))
        .generate_image("a rocket", ImageSize::OneK)
        .await
        .unwrap();
    assert!(image.is_none());
}

#[tokio::test]
async fn profile_description_is_raw_text() {
    let (base, request) =
        serve_once("200 OK", text_reply("Pull Shark, YOLO")).await;
    let text = client(&base, None)
        .describe_profile_achievements("octocat")
        .await
        .unwrap();
    assert_eq!(text, "Pull Shark, YOLO");

    let body: Value =
        serde_json::from_str(&request.await.unwrap().body).unwrap();
    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        prompts::profile_achievements("octocat")
    );
}

#[tokio::test]
async fn error_status_is_a_gateway_failure() {
    let (base, _request) = serve_once(
        "429 Too Many Requests",
        json!({ "error": { "message": "quota" } }).to_string(),
    )
    .await;
    let err = client(&base, None).ask_short("x").await.unwrap_err();
    match err {
        HubError::Gateway { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("quota"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}
