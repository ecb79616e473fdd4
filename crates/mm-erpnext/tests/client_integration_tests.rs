//! Integration tests for the ERPNext client using wiremock mock server

use mm_config::Config;
use mm_erpnext::{ErpNextClient, ErpNextError, SUBMIT_FALLBACK_NOTIFICATION};

use mm_core::Lead;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

fn config_for(server: &MockServer) -> Config {
    Config {
        api_url: server.uri(),
        api_key: Some("test-key".to_string()),
        api_secret: Some("test-secret".to_string()),
    }
}

fn config_without_credentials(server: &MockServer) -> Config {
    Config {
        api_url: server.uri(),
        api_key: None,
        api_secret: None,
    }
}

fn lead() -> Lead {
    Lead::new("Max Muster", "max@example.com", "Eine Anfrage zur Sommergala.").unwrap()
}

#[tokio::test]
async fn test_fetch_projects_maps_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/resource/Project"))
        .and(query_param(
            "fields",
            r#"["name","project_name","expected_end_date","status","image","notes"]"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "name": "PROJ-0001",
                    "project_name": "Sommergala",
                    "expected_end_date": "2026-03-05",
                    "status": "Open",
                    "image": "/files/gala.jpg",
                    "notes": "Die große Gala."
                },
                {}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_for(&mock_server));
    let projects = client.fetch_projects().await.unwrap();

    assert_eq!(projects.len(), 2);

    assert_eq!(projects[0].id, "PROJ-0001");
    assert_eq!(projects[0].title, "Sommergala");
    assert_eq!(projects[0].category, "Open");
    assert_eq!(projects[0].date, "05. März 2026");
    assert_eq!(
        projects[0].image_url,
        format!("{}/files/gala.jpg", mock_server.uri())
    );

    assert_eq!(projects[1].id, "1");
    assert_eq!(projects[1].title, "Unbenanntes Projekt");
    assert_eq!(projects[1].category, "Event");
    assert_eq!(projects[1].date, "Demnächst");
    assert_eq!(
        projects[1].image_url,
        "https://picsum.photos/1600/900?random=101"
    );
}

#[tokio::test]
async fn test_fetch_projects_sends_token_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/resource/Project"))
        .and(header("Authorization", "token test-key:test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_for(&mock_server));
    let projects = client.fetch_projects().await.unwrap();

    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_fetch_projects_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/resource/Project"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_for(&mock_server));
    let result = client.fetch_projects().await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_fetch_projects_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/resource/Project"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_for(&mock_server));
    let result = client.fetch_projects().await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("JSON parse error"));
}

#[tokio::test]
async fn test_fetch_projects_without_credentials_serves_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/resource/Project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_without_credentials(&mock_server));
    let projects = client.fetch_projects().await.unwrap();

    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_create_lead_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/resource/Lead"))
        .and(header("Authorization", "token test-key:test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "name": "CRM-LEAD-2026-00042",
                "first_name": "Max Muster"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_for(&mock_server));
    let result = client.create_lead(&lead()).await.unwrap();

    assert_eq!(result["data"]["name"], "CRM-LEAD-2026-00042");
}

#[tokio::test]
async fn test_create_lead_sends_expected_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/resource/Lead"))
        .and(body_string_contains("\"first_name\":\"Max Muster\""))
        .and(body_string_contains("\"email_id\":\"max@example.com\""))
        .and(body_string_contains("\"message\":\"Eine Anfrage zur Sommergala.\""))
        .and(body_string_contains("\"source\":\"Webseite\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_for(&mock_server));
    let result = client.create_lead(&lead()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_lead_rejected_with_server_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/resource/Lead"))
        .respond_with(ResponseTemplate::new(417).set_body_json(json!({
            "_server_messages": ["Email Adresse ungültig"]
        })))
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_for(&mock_server));
    let result = client.create_lead(&lead()).await;

    match result {
        Err(ErpNextError::Rejected { message, status, .. }) => {
            assert_eq!(message, "Email Adresse ungültig");
            assert_eq!(status.as_u16(), 417);
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_lead_rejected_without_message_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/resource/Lead"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_for(&mock_server));
    let result = client.create_lead(&lead()).await;

    match result {
        Err(ErpNextError::Rejected { message, .. }) => {
            assert_eq!(message, SUBMIT_FALLBACK_NOTIFICATION);
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_lead_without_credentials_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/resource/Lead"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ErpNextClient::new(&config_without_credentials(&mock_server));
    let result = client.create_lead(&lead()).await;

    assert!(matches!(
        result,
        Err(ErpNextError::MissingCredentials { .. })
    ));
}
