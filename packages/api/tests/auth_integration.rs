use api::{ApiClient, ErrorKind, SignIn, SignUp};
use serde_json::json;
use store::{MemoryTokenStore, TokenStore};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sign_in_form() -> SignIn {
    SignIn {
        email: "test@example.com".to_string(),
        password: "secret123".to_string(),
    }
}

#[tokio::test]
async fn test_sign_in_persists_token() {
    let mock_server = MockServer::start().await;
    let tokens = MemoryTokenStore::new();
    let client = ApiClient::new(&mock_server.uri(), tokens.clone());

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .and(body_json(json!({
            "user_email": "test@example.com",
            "password": "secret123",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-abc",
            "token_type": "bearer",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let signed_in = client.auth().sign_in(sign_in_form()).await.unwrap();
    assert_eq!(signed_in.token, "jwt-abc");
    assert!(signed_in.user.is_none());
    assert_eq!(tokens.get().as_deref(), Some("jwt-abc"));
    assert_eq!(client.auth().token().as_deref(), Some("jwt-abc"));
}

#[tokio::test]
async fn test_sign_in_with_user() {
    let mock_server = MockServer::start().await;
    let client = ApiClient::new(&mock_server.uri(), MemoryTokenStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-abc",
            "token_type": "bearer",
            "user": {"user_id": "u1", "user_name": "Test User", "user_email": "test@example.com"},
        })))
        .mount(&mock_server)
        .await;

    let signed_in = client.auth().sign_in(sign_in_form()).await.unwrap();
    let user = signed_in.user.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Test User");
}

#[tokio::test]
async fn test_sign_in_rejected_keeps_storage_untouched() {
    let mock_server = MockServer::start().await;
    let tokens = MemoryTokenStore::new();
    let client = ApiClient::new(&mock_server.uri(), tokens.clone());

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid email or password"})),
        )
        .mount(&mock_server)
        .await;

    let err = client.auth().sign_in(sign_in_form()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn test_sign_in_without_token_is_an_error() {
    let mock_server = MockServer::start().await;
    let tokens = MemoryTokenStore::new();
    let client = ApiClient::new(&mock_server.uri(), tokens.clone());

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "bearer"})))
        .mount(&mock_server)
        .await;

    let err = client.auth().sign_in(sign_in_form()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.message, "Sign in failed");
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn test_sign_up() {
    let mock_server = MockServer::start().await;
    let client = ApiClient::new(&mock_server.uri(), MemoryTokenStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(body_json(json!({
            "user_name": "Test User",
            "user_email": "test@example.com",
            "password": "secret123",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user_id": "u1",
            "user_name": "Test User",
            "user_email": "test@example.com",
            "created_on": "2024-01-05T09:30:00",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client
        .auth()
        .sign_up(SignUp {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.email, "test@example.com");
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let mock_server = MockServer::start().await;
    let client = ApiClient::new(&mock_server.uri(), MemoryTokenStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Email already registered"})),
        )
        .mount(&mock_server)
        .await;

    let err = client
        .auth()
        .sign_up(SignUp {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.to_string(), "Email already registered");
}

#[tokio::test]
async fn test_sign_out_clears_token() {
    let tokens = MemoryTokenStore::with_token("jwt-abc");
    let client = ApiClient::new("http://localhost:8000", tokens.clone());

    client.auth().sign_out();
    assert!(tokens.get().is_none());
    assert!(client.auth().token().is_none());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1", MemoryTokenStore::new());

    let err = client.auth().sign_in(sign_in_form()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.message, "Sign in failed");
    assert!(err.status.is_none());
}
