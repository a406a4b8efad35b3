//! Façade contract tests: resource paths, query strings, body shapes, and
//! typed payload decoding.

use atrium::domain::models::companion::InsightKind;
use atrium::domain::models::crm::NewContact;
use atrium::domain::models::projects::{ProjectStatus, ProjectUpdate};
use atrium::domain::models::user::Timeframe;
use atrium::{ApiConfig, CacheConfig, Client, Config, LoggingConfig, RetryConfig};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn envelope_body(data: Value) -> Value {
    json!({
        "data": data,
        "status": "success",
        "timestamp": "2025-06-01T12:00:00.000Z"
    })
}

fn test_client(server: &MockServer) -> Client {
    Client::new(Config {
        api: ApiConfig {
            base_url: server.uri(),
            auth_token: None,
            timeout_ms: 5_000,
        },
        retry: RetryConfig {
            max_retries: 0,
            initial_backoff_ms: 10,
            max_backoff_ms: 20,
        },
        cache: CacheConfig::default(),
        logging: LoggingConfig::default(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_send_message_posts_message_body() {
    let server = MockServer::start().await;

    let data = json!({
        "response": "Done. Three meetings moved.",
        "conversationId": "conv-7",
        "tokensUsed": 99
    });
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(json!({
            "message": "Clear my afternoon",
            "conversationId": "conv-7"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body(data)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client
        .chat()
        .send_message("Clear my afternoon", Some("conv-7"))
        .await;

    assert!(envelope.is_success());
    let reply = envelope.into_data().unwrap();
    assert_eq!(reply.conversation_id, "conv-7");
    assert_eq!(reply.tokens_used, 99);
}

#[tokio::test]
async fn test_conversations_passes_limit_query() {
    let server = MockServer::start().await;

    let data = json!({
        "conversations": [{
            "id": "conv-1",
            "title": "Q3 planning",
            "lastMessage": "Sounds good",
            "updatedAt": "2025-05-20T09:00:00Z",
            "messageCount": 12
        }]
    });
    Mock::given(method("GET"))
        .and(path("/chat/conversations"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body(data)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client.chat().conversations(Some(5)).await;

    assert!(envelope.is_success());
    assert_eq!(envelope.into_data().unwrap().conversations.len(), 1);
}

#[tokio::test]
async fn test_conversations_defaults_to_twenty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/conversations"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope_body(json!({ "conversations": [] }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client.chat().conversations(None).await;

    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_delete_conversation_hits_resource_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/chat/conversations/conv-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client.chat().delete_conversation("conv-9").await;

    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_crm_actions_multiplex_on_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghl-webhook"))
        .and(body_partial_json(json!({ "action": "force_sync" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client.crm().force_sync().await;

    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_create_contact_nests_payload_under_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ghl-webhook"))
        .and(body_partial_json(json!({
            "action": "create_contact",
            "data": {
                "firstName": "Ada",
                "lastName": "Park",
                "email": "ada@example.com"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let contact = NewContact {
        first_name: "Ada".to_string(),
        last_name: "Park".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        tags: None,
    };

    let client = test_client(&server);
    let envelope = client.crm().create_contact(&contact).await;

    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_update_project_patches_resource() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/projects/proj-3"))
        .and(body_partial_json(json!({ "status": "completed", "progress": 100.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProjectUpdate {
        status: Some(ProjectStatus::Completed),
        progress: Some(100.0),
        ..Default::default()
    };

    let client = test_client(&server);
    let envelope = client.projects().update_project("proj-3", &update).await;

    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_project_tasks_decode_board_columns() {
    let server = MockServer::start().await;

    let data = json!({
        "tasks": [{
            "id": "t-1",
            "title": "Wire the CRM panel",
            "description": "Hook stats into the dashboard",
            "status": "in_progress",
            "priority": "high",
            "createdAt": "2025-05-01T08:00:00Z"
        }]
    });
    Mock::given(method("GET"))
        .and(path("/projects/proj-3/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body(data)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client.projects().project_tasks("proj-3").await;

    assert!(envelope.is_success());
    let tasks = envelope.into_data().unwrap().tasks;
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].assignee.is_none());
}

#[tokio::test]
async fn test_insights_passes_kind_as_type_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companion/insights"))
        .and(query_param("type", "business"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope_body(json!({ "insights": [] }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client.companion().insights(InsightKind::Business).await;

    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_analytics_passes_timeframe_query() {
    let server = MockServer::start().await;

    let data = json!({
        "analytics": {
            "chatSessions": 14,
            "tokensUsed": 90000,
            "projectsCreated": 2,
            "tasksCompleted": 31,
            "productivityScore": 0.8,
            "trends": []
        }
    });
    Mock::given(method("GET"))
        .and(path("/user/analytics"))
        .and(query_param("timeframe", "30d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_body(data)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client.user().analytics(Timeframe::Month).await;

    assert!(envelope.is_success());
    assert_eq!(envelope.into_data().unwrap().analytics.tasks_completed, 31);
}

#[tokio::test]
async fn test_server_side_error_envelope_passes_through() {
    let server = MockServer::start().await;

    // HTTP 200 carrying an error envelope: the façade hands it through
    // untouched rather than synthesizing its own.
    let body = json!({
        "data": null,
        "status": "error",
        "message": "CRM upstream is resyncing",
        "timestamp": "2025-06-01T12:00:00.000Z"
    });
    Mock::given(method("GET"))
        .and(path("/companion/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client.companion().status().await;

    assert!(envelope.is_error());
    assert_eq!(
        envelope.message.as_deref(),
        Some("CRM upstream is resyncing")
    );
}
