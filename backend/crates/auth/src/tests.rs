//! Unit tests for Auth crate
//! Use cases and handlers against an in-memory identity source

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};

use crate::domain::entity::{credential::Credential, session::Session};
use crate::domain::strategy::{CredentialStrategy, Registrar};
use crate::error::{AuthError, AuthResult};

const EMAIL: &str = "a@b.com";
const PASSWORD: &str = "secret";
const TOKEN: &str = "tok.en-123";

/// How the stub answers a registration
#[derive(Clone)]
enum SignUpBehavior {
    Created(Value),
    Rejected(u16, Value),
}

/// In-memory identity source
#[derive(Clone)]
struct StubIdentity {
    calls: Arc<AtomicUsize>,
    token: String,
    user: Value,
    sign_up: SignUpBehavior,
    unavailable: bool,
}

impl StubIdentity {
    fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            token: TOKEN.to_string(),
            user: json!({ "id": 7, "email": EMAIL, "name": "Ana" }),
            sign_up: SignUpBehavior::Created(json!({ "data": "user-42" })),
            unavailable: false,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CredentialStrategy for StubIdentity {
    async fn authenticate(&self, credential: &Credential) -> AuthResult<Session> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable {
            return Err(AuthError::UpstreamFailure("identity source down".into()));
        }
        if credential.email.as_str() != EMAIL || credential.password.expose() != PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(serde_json::from_value(json!({
            "token": self.token,
            "user": self.user
        }))
        .unwrap())
    }
}

impl Registrar for StubIdentity {
    async fn register(&self, _payload: &Value) -> AuthResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.sign_up {
            SignUpBehavior::Created(body) => Ok(body.clone()),
            SignUpBehavior::Rejected(status, body) => Err(AuthError::UpstreamRejected {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::*;
    use crate::application::{SignInInput, SignInUseCase, SignUpUseCase};

    fn json_input(email: &str, password: &str) -> SignInInput {
        SignInInput::Json {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let stub = StubIdentity::new();
        let session = SignInUseCase::new(Arc::new(stub.clone()))
            .execute(json_input(EMAIL, PASSWORD))
            .await
            .unwrap();

        assert_eq!(session.token.as_str(), TOKEN);
        assert_eq!(session.user.id(), Some(&json!(7)));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_user_without_id() {
        let stub = StubIdentity {
            user: json!({ "_id": "64f0c2", "email": EMAIL }),
            ..StubIdentity::new()
        };
        let session = SignInUseCase::new(Arc::new(stub))
            .execute(json_input(EMAIL, PASSWORD))
            .await
            .unwrap();

        assert_eq!(session.token.as_str(), TOKEN);
        assert_eq!(session.user.get("_id"), Some(&json!("64f0c2")));
    }

    #[tokio::test]
    async fn test_sign_in_empty_fields_skip_identity_source() {
        let stub = StubIdentity::new();
        let use_case = SignInUseCase::new(Arc::new(stub.clone()));

        let result = use_case.execute(json_input("", PASSWORD)).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));

        let result = use_case.execute(json_input(EMAIL, "")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));

        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_sign_in_empty_token_is_upstream_failure() {
        let stub = StubIdentity {
            token: String::new(),
            ..StubIdentity::new()
        };
        let result = SignInUseCase::new(Arc::new(stub))
            .execute(json_input(EMAIL, PASSWORD))
            .await;

        assert!(matches!(result, Err(AuthError::UpstreamFailure(_))));
    }

    #[tokio::test]
    async fn test_sign_in_non_basic_authorization() {
        let result = SignInUseCase::new(Arc::new(StubIdentity::new()))
            .execute(SignInInput::Authorization("Bearer abc".into()))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_sign_up_copies_request_fields() {
        let output = SignUpUseCase::new(Arc::new(StubIdentity::new()))
            .execute(json!({ "name": "Ana", "email": EMAIL, "password": "pw" }))
            .await
            .unwrap();

        assert_eq!(output.name, json!("Ana"));
        assert_eq!(output.email, json!(EMAIL));
        assert_eq!(output.id, json!("user-42"));
    }

    #[tokio::test]
    async fn test_sign_up_missing_fields_are_null() {
        let output = SignUpUseCase::new(Arc::new(StubIdentity::new()))
            .execute(json!({ "password": "pw" }))
            .await
            .unwrap();

        assert_eq!(output.name, Value::Null);
        assert_eq!(output.email, Value::Null);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_non_object() {
        let stub = StubIdentity::new();
        let result = SignUpUseCase::new(Arc::new(stub.clone()))
            .execute(json!(["not", "an", "object"]))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidRequest(_))));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_sign_up_without_id_is_upstream_failure() {
        let stub = StubIdentity {
            sign_up: SignUpBehavior::Created(json!({ "message": "ok" })),
            ..StubIdentity::new()
        };
        let result = SignUpUseCase::new(Arc::new(stub))
            .execute(json!({ "name": "Ana" }))
            .await;

        assert!(matches!(result, Err(AuthError::UpstreamFailure(_))));
    }
}

#[cfg(test)]
mod handler_tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::presentation::router::auth_router_generic;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use platform::cookie::CookiePolicy;
    use tower::ServiceExt;

    fn router(stub: StubIdentity) -> Router {
        auth_router_generic(stub, AuthConfig::default())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn set_cookies(response: &Response) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_sign_in_sets_cookie_and_returns_profile() {
        let response = router(StubIdentity::new())
            .oneshot(post_json(
                "/sign-in",
                r#"{"email":"a@b.com","password":"secret"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].contains("Max-Age=0"));
        assert!(cookies[1].starts_with(&format!("token={}", TOKEN)));
        assert!(cookies[1].contains("HttpOnly"));
        assert!(cookies[1].contains("Secure"));

        let body = body_json(response).await;
        assert_eq!(body, json!({ "id": 7, "email": EMAIL, "name": "Ana" }));
        assert!(!body.to_string().contains(TOKEN));
    }

    #[tokio::test]
    async fn test_sign_in_echoes_profile_unchanged() {
        let user = json!({ "id": "u1", "email": EMAIL, "name": null, "isAdmin": false });
        let stub = StubIdentity {
            user: user.clone(),
            ..StubIdentity::new()
        };
        let response = router(stub)
            .oneshot(post_json(
                "/sign-in",
                r#"{"email":"a@b.com","password":"secret"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(set_cookies(&response).len(), 2);

        let body = body_json(response).await;
        assert_eq!(body, user);
        assert!(body.as_object().unwrap().contains_key("name"));
    }

    #[tokio::test]
    async fn test_sign_in_profile_with_underscore_id() {
        let user = json!({ "_id": "64f0c2", "email": EMAIL });
        let stub = StubIdentity {
            user: user.clone(),
            ..StubIdentity::new()
        };
        let response = router(stub)
            .oneshot(post_json(
                "/sign-in",
                r#"{"email":"a@b.com","password":"secret"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookies(&response)[1].starts_with(&format!("token={}", TOKEN)));
        assert_eq!(body_json(response).await, user);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let response = router(StubIdentity::new())
            .oneshot(post_json(
                "/sign-in",
                r#"{"email":"a@b.com","password":"wrong"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(set_cookies(&response).is_empty());

        let body = body_json(response).await;
        assert_eq!(body["status"], 401);
        assert_eq!(body["title"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_sign_in_with_basic_header() {
        let stub = StubIdentity::new();
        let request = Request::builder()
            .method("POST")
            .uri("/sign-in")
            .header(
                header::AUTHORIZATION,
                format!("Basic {}", STANDARD.encode("a@b.com:secret")),
            )
            .body(Body::empty())
            .unwrap();

        let response = router(stub.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(set_cookies(&response).len(), 2);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_basic_header_wins_over_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/sign-in")
            .header(header::CONTENT_TYPE, "application/json")
            .header(
                header::AUTHORIZATION,
                format!("Basic {}", STANDARD.encode("a@b.com:wrong")),
            )
            .body(Body::from(r#"{"email":"a@b.com","password":"secret"}"#))
            .unwrap();

        let response = router(StubIdentity::new()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sign_in_without_credentials() {
        let stub = StubIdentity::new();

        let empty = Request::builder()
            .method("POST")
            .uri("/sign-in")
            .body(Body::empty())
            .unwrap();
        let response = router(stub.clone()).oneshot(empty).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = router(stub.clone())
            .oneshot(post_json("/sign-in", r#"{"email":"","password":"secret"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(set_cookies(&response).is_empty());

        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_sign_in_malformed_json() {
        let response = router(StubIdentity::new())
            .oneshot(post_json("/sign-in", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_sign_in_identity_source_down() {
        let stub = StubIdentity {
            unavailable: true,
            ..StubIdentity::new()
        };
        let response = router(stub)
            .oneshot(post_json(
                "/sign-in",
                r#"{"email":"a@b.com","password":"secret"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(set_cookies(&response).is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_development_cookie() {
        let config = AuthConfig {
            session_cookie: platform::cookie::SessionCookie::new(
                "token",
                CookiePolicy::development(),
            ),
        };
        let response = auth_router_generic(StubIdentity::new(), config)
            .oneshot(post_json(
                "/sign-in",
                r#"{"email":"a@b.com","password":"secret"}"#,
            ))
            .await
            .unwrap();

        let cookies = set_cookies(&response);
        assert!(!cookies[1].contains("HttpOnly"));
        assert!(!cookies[1].contains("Secure"));
        assert!(!cookies[1].contains("Domain="));
    }

    #[tokio::test]
    async fn test_sign_up_created() {
        let response = router(StubIdentity::new())
            .oneshot(post_json(
                "/sign-up",
                r#"{"name":"Ana","email":"a@b.com","password":"pw"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "name": "Ana", "email": EMAIL, "id": "user-42" })
        );
    }

    #[tokio::test]
    async fn test_sign_up_relays_upstream_error() {
        let stub = StubIdentity {
            sign_up: SignUpBehavior::Rejected(409, json!({ "message": "Email taken" })),
            ..StubIdentity::new()
        };
        let response = router(stub)
            .oneshot(post_json("/sign-up", r#"{"name":"Ana","email":"a@b.com"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await, json!({ "message": "Email taken" }));
    }

    #[tokio::test]
    async fn test_sign_up_non_object_body() {
        let response = router(StubIdentity::new())
            .oneshot(post_json("/sign-up", "[1,2,3]"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sign_out_clears_cookie() {
        let request = Request::builder()
            .method("POST")
            .uri("/sign-out")
            .body(Body::empty())
            .unwrap();
        let response = router(StubIdentity::new()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("token=;"));
        assert!(cookies[0].contains("Max-Age=0"));
        assert!(cookies[0].contains("Domain=fgpos.gabrielpinto.me"));
    }
}
