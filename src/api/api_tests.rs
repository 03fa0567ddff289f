#[cfg(test)]
mod router_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::services::content::ContentServiceImpl;
    use crate::storage::repository::{ContentSeed, InMemoryContentRepository};

    fn app() -> Router {
        let seed: ContentSeed = serde_json::from_value(json!({
            "events": [
                {"id": "ev1", "slug": "ncs-2025", "name": "NCS 2025",
                 "start_date": "2025-09-10", "end_date": "2025-09-12", "published": true},
                {"id": "ev2", "slug": "draft", "name": "Draft",
                 "start_date": "2026-01-10", "end_date": "2026-01-11", "published": false}
            ],
            "partners": [
                {"id": "p1", "event_id": "ev1", "name": "A", "category": "platinum"},
                {"id": "p2", "event_id": "ev1", "name": "B", "category": "media"},
                {"id": "p3", "event_id": "ev1", "name": "C", "category": "silver"},
                {"id": "p4", "event_id": "ev1", "name": "D", "category": "unknown"}
            ]
        }))
        .unwrap();

        let repository = Arc::new(InMemoryContentRepository::new(seed));
        let content = Box::new(ContentServiceImpl::with_seed(repository, 3));
        create_router(AppState::development(content), &[])
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_as(uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap()
    }

    async fn login(app: &Router) -> String {
        let (status, body) = send(
            app,
            post(
                "/api/v1/admin/login",
                json!({"username": "admin", "password": "statcon-dev-password"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_homepage_returns_published_events() {
        let app = app();
        let (status, body) = send(&app, get("/api/v1/events", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["events"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_event_returns_404() {
        let app = app();
        let (status, body) = send(&app, get("/api/v1/events/nope", None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");

        let (status, _) = send(&app, get("/api/v1/events/draft/faqs", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_partner_types() {
        let app = app();
        let (status, body) = send(&app, get("/api/v1/events/ncs-2025/partners", None)).await;

        assert_eq!(status, StatusCode::OK);
        let kinds: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["sponsor", "partner", "sponsor", "partner"]);
    }

    #[tokio::test]
    async fn test_rejected_login() {
        let app = app();
        let (status, body) = send(
            &app,
            post(
                "/api/v1/admin/login",
                json!({"username": "admin", "password": "guess"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid username or password");
        assert!(body.get("token").is_none());

        let (_, body) = send(&app, get("/api/v1/admin/session", None)).await;
        assert_eq!(body["authenticated"], false);
    }

    #[tokio::test]
    async fn test_admin_session_lifecycle() {
        let app = app();

        let (status, _) = send(&app, get("/api/v1/admin/events", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let token = login(&app).await;

        let (_, body) = send(&app, get("/api/v1/admin/session", None)).await;
        assert_eq!(body["authenticated"], true);

        let (status, body) = send(&app, get("/api/v1/admin/events", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (status, body) = send(&app, post_as("/api/v1/admin/refresh", &token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["refreshed"], true);
        let refreshed = body["token"].as_str().unwrap().to_string();

        // Both the login token and the refreshed one belong to the same session
        let (status, _) = send(&app, get("/api/v1/admin/events", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, get("/api/v1/admin/events", Some(&refreshed))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, post_as("/api/v1/admin/logout", &token)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get("/api/v1/admin/events", Some(&refreshed))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(&app, post_as("/api/v1/admin/refresh", &token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn test_anonymous_refresh_and_logout_are_rejected() {
        let app = app();
        let token = login(&app).await;

        let (status, body) = send(&app, post("/api/v1/admin/refresh", json!({}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.get("token").is_none());

        let (status, _) = send(&app, post("/api/v1/admin/logout", json!({}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, post_as("/api/v1/admin/refresh", "not-a-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // The admin's session is untouched
        let (status, _) = send(&app, get("/api/v1/admin/events", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, get("/api/v1/admin/session", None)).await;
        assert_eq!(body["authenticated"], true);
    }

    #[tokio::test]
    async fn test_relogin_invalidates_previous_token() {
        let app = app();
        let first = login(&app).await;
        let second = login(&app).await;

        let (status, _) = send(&app, get("/api/v1/admin/events", Some(&first))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = send(&app, get("/api/v1/admin/events", Some(&second))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let app = app();
        let response = app.oneshot(get("/api/v1/events", None)).await.unwrap();

        assert_eq!(
            response.headers().get("X-Content-Type-Options").unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get("X-Frame-Options").unwrap(), "DENY");
    }
}
