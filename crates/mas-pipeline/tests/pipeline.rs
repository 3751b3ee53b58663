//! End-to-end pipeline tests: one wiremock server plays both the target
//! site and the chat-completion endpoint.

use mas_core::{ApiKey, Strategy, MAX_PROMPT_CHARS};
use mas_llm::LlmSettings;
use mas_pipeline::{Pipeline, PipelineError};
use mas_scraper::SiteClient;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SITE_HTML: &str = "<html><head><title>Cann</title></head>\
    <body><h1>Cann Social Tonics</h1><p>Hemp-infused drinks for good times.</p></body></html>";

fn pipeline(server: &MockServer) -> Pipeline {
    let site = SiteClient::new(5, "mas-test/0.1").expect("site client");
    let llm = LlmSettings {
        base_url: format!("{}/v1", server.uri()),
        model: "gpt-4".to_string(),
        timeout_secs: 5,
    };
    Pipeline::new(site, llm)
}

fn key() -> ApiKey {
    ApiKey::new("sk-test").expect("valid key")
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
}

async fn mount_site(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/brand"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn run_strategy_returns_completion_verbatim() {
    let server = MockServer::start().await;
    mount_site(&server, SITE_HTML.to_string()).await;

    let mocked = "**Ad Group 1**\n- hemp seltzer\n\n  Budget: 60/40  ";
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("You are a Google Ads expert."))
        .and(body_string_contains("Cann Social Tonics Hemp-infused drinks for good times."))
        .respond_with(completion(mocked))
        .expect(1)
        .mount(&server)
        .await;

    let report = pipeline(&server)
        .run_strategy(key(), &format!("{}/brand", server.uri()), Strategy::GoogleAds)
        .await
        .expect("strategy run should succeed");

    assert_eq!(report.strategy, Strategy::GoogleAds);
    assert_eq!(report.title, "Google Ads Plan");
    assert_eq!(report.content, mocked);
}

#[tokio::test]
async fn each_strategy_uses_its_own_template() {
    let server = MockServer::start().await;
    mount_site(&server, SITE_HTML.to_string()).await;

    let markers = [
        (Strategy::GoogleAds, "You are a Google Ads expert."),
        (Strategy::CreativeContent, "You are a creative content strategist."),
        (Strategy::ContentMarketing, "You are a content marketing manager."),
        (
            Strategy::CompetitorIntelligence,
            "You are a competitor intelligence analyst.",
        ),
    ];
    for (strategy, marker) in markers {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains(marker))
            .respond_with(completion(strategy.slug()))
            .mount(&server)
            .await;
    }

    let pipeline = pipeline(&server);
    let url = format!("{}/brand", server.uri());
    for strategy in Strategy::ALL {
        let report = pipeline
            .run_strategy(key(), &url, strategy)
            .await
            .expect("strategy run should succeed");
        assert_eq!(report.content, strategy.slug());
    }
}

#[tokio::test]
async fn prompt_content_is_capped_for_large_pages() {
    let server = MockServer::start().await;
    let big_page = format!("<p>{}</p>", "§".repeat(MAX_PROMPT_CHARS * 2));
    mount_site(&server, big_page).await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion("ok"))
        .expect(1)
        .mount(&server)
        .await;

    pipeline(&server)
        .run_strategy(key(), &format!("{}/brand", server.uri()), Strategy::ContentMarketing)
        .await
        .expect("strategy run should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    let llm_request = requests
        .iter()
        .find(|r| r.url.path() == "/v1/chat/completions")
        .expect("completion request sent");
    let body: serde_json::Value = serde_json::from_slice(&llm_request.body).expect("json body");
    let user = body["messages"][1]["content"].as_str().expect("user message");
    assert_eq!(user.matches('§').count(), MAX_PROMPT_CHARS);
}

#[tokio::test]
async fn fetch_failure_skips_the_llm() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brand"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(completion("should not be used"))
        .expect(0)
        .mount(&server)
        .await;

    let err = pipeline(&server)
        .run_strategy(key(), &format!("{}/brand", server.uri()), Strategy::GoogleAds)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Fetch(_)), "got: {err:?}");
    assert!(err.user_message().starts_with("Failed to retrieve site content"));
}

#[tokio::test]
async fn run_analysis_builds_report_from_one_summary_call() {
    let server = MockServer::start().await;
    mount_site(&server, SITE_HTML.to_string()).await;

    let summary = "Brand: Cann. Industry: beverages. Tone: playful.";
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("You are a digital marketing analyst."))
        .respond_with(completion(summary))
        .expect(1)
        .mount(&server)
        .await;

    let report = pipeline(&server)
        .run_analysis(key(), &format!("{}/brand", server.uri()))
        .await
        .expect("analysis should succeed");

    assert_eq!(report.summary, summary);
    assert!((report.average_score - 7.5).abs() < f64::EPSILON);
    assert!(report.go);
    assert_eq!(report.agents.len(), 5);
    assert_eq!(report.work_plan.len(), 5);
    assert!(report
        .work_plan
        .sections()
        .iter()
        .all(|section| section.plan.len() == 2));
}

#[tokio::test]
async fn summary_failure_short_circuits_analysis() {
    let server = MockServer::start().await;
    mount_site(&server, SITE_HTML.to_string()).await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = pipeline(&server)
        .run_analysis(key(), &format!("{}/brand", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Completion(_)), "got: {err:?}");
    assert_eq!(err.code(), "completion_failed");
    assert!(err.user_message().contains("Incorrect API key provided"));
}
