use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{orders, session, users};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .merge(session::router())
                .merge(users::router())
                .merge(orders::router())
                .route("/health", get(|| async { "ok" })),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, state: &AppState) -> anyhow::Result<()> {
    let addr = state.config.addr()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct Client {
        app: Router,
    }

    impl Client {
        fn new() -> Self {
            Self {
                app: build_app(AppState::fake()),
            }
        }

        async fn send(
            &self,
            method: Method,
            uri: &str,
            session: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, axum::http::HeaderMap, Value) {
            let mut req = Request::builder().method(method).uri(uri);
            if let Some(id) = session {
                req = req.header("x-session-id", id);
            }
            let req = match body {
                Some(json) => req
                    .header("content-type", "application/json")
                    .body(Body::from(json.to_string())),
                None => req.body(Body::empty()),
            }
            .unwrap();

            let res = self.app.clone().oneshot(req).await.unwrap();
            let status = res.status();
            let headers = res.headers().clone();
            let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
                .await
                .unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                    Value::String(String::from_utf8_lossy(&bytes).into_owned())
                })
            };
            (status, headers, value)
        }

        async fn open(&self) -> String {
            let (status, headers, body) = self.send(Method::POST, "/api/v1/session", None, None).await;
            assert_eq!(status, StatusCode::CREATED);
            let id = headers["x-session-id"].to_str().unwrap().to_string();
            assert_eq!(body["session_id"], id.as_str());
            assert_eq!(body["view"]["screen"], "welcome");
            id
        }

        async fn post(&self, sid: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let (status, _, value) = self.send(Method::POST, uri, Some(sid), body).await;
            (status, value)
        }

        async fn register(&self, sid: &str, name: &str, role: &str) -> Value {
            let (status, _) = self.post(sid, "/api/v1/session/register", None).await;
            assert_eq!(status, StatusCode::OK);
            let (status, body) = self
                .post(
                    sid,
                    "/api/v1/users",
                    Some(json!({
                        "name": name,
                        "phone": "612345678",
                        "neighborhood": "Gràcia",
                        "role": role,
                    })),
                )
                .await;
            assert_eq!(status, StatusCode::OK, "{}", body);
            body
        }
    }

    #[tokio::test]
    async fn health_and_neighborhoods_need_no_session() {
        let client = Client::new();
        let (status, _, body) = client.send(Method::GET, "/api/v1/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("ok".into()));

        let (status, _, body) = client
            .send(Method::GET, "/api/v1/neighborhoods", None, None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(6));
    }

    #[tokio::test]
    async fn session_header_is_required_and_checked() {
        let client = Client::new();
        let (status, _, _) = client.send(Method::GET, "/api/v1/session", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, _) = client
            .send(Method::GET, "/api/v1/session", Some("not-a-uuid"), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let unknown = uuid::Uuid::new_v4().to_string();
        let (status, _, body) = client
            .send(Method::GET, "/api/v1/session", Some(&unknown), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "session not found");
    }

    #[tokio::test]
    async fn registration_success_enters_dashboard() {
        let client = Client::new();
        let sid = client.open().await;
        let body = client.register(&sid, "Ana Lopez", "cliente").await;

        assert_eq!(body["screen"], "main");
        assert_eq!(body["tab"], "home");
        assert_eq!(body["user"]["name"], "Ana Lopez");
        assert_eq!(body["user"]["neighborhood"], "Gràcia");
        assert_eq!(body["user"]["role"], "cliente");
    }

    #[tokio::test]
    async fn short_phone_is_reported_inline() {
        let client = Client::new();
        let sid = client.open().await;
        client.post(&sid, "/api/v1/session/register", None).await;

        let (status, body) = client
            .post(
                &sid,
                "/api/v1/users",
                Some(json!({
                    "name": "Ana Lopez",
                    "phone": "12345",
                    "neighborhood": "Gràcia",
                    "role": "cliente",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Teléfono inválido");
        assert_eq!(body["view"]["screen"], "register");

        // nobody was added: the login list for clients is still empty
        client.post(&sid, "/api/v1/session/back", None).await;
        let (_, body) = client.post(&sid, "/api/v1/session/continue", None).await;
        assert_eq!(body["users"], json!([]));
        assert_eq!(body["notice"]["message"], "No hay usuarios de este tipo");
    }

    #[tokio::test]
    async fn courier_claims_client_order_end_to_end() {
        let client = Client::new();
        let sid = client.open().await;
        client.register(&sid, "Ana Lopez", "cliente").await;

        client
            .post(&sid, "/api/v1/session/tab", Some(json!({ "tab": "create_order" })))
            .await;
        let (status, body) = client
            .post(&sid, "/api/v1/orders", Some(json!({ "item": "Llaves" })))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["notice"]["message"], "Pedido creado");

        let (_, body) = client
            .post(&sid, "/api/v1/session/tab", Some(json!({ "tab": "home" })))
            .await;
        let order = &body["panel"]["orders"][0];
        assert_eq!(order["status"], "pendiente");
        assert_eq!(order["can_claim"], false);
        let order_id = order["id"].as_str().unwrap().to_string();

        let (status, body) = client
            .post(&sid, &format!("/api/v1/orders/{}/claim", order_id), None)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["view"]["panel"]["orders"][0]["status"], "pendiente");

        client.post(&sid, "/api/v1/session/logout", None).await;
        let body = client.register(&sid, "Leo Puig", "repartidor").await;
        assert_eq!(body["panel"]["orders"][0]["can_claim"], true);

        let (status, body) = client
            .post(&sid, &format!("/api/v1/orders/{}/claim", order_id), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let order = &body["panel"]["orders"][0];
        assert_eq!(order["status"], "asignado");
        assert_eq!(order["courier"], "Leo Puig");

        let (status, _) = client
            .post(&sid, &format!("/api/v1/orders/{}/claim", order_id), None)
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn sessions_do_not_share_state() {
        let client = Client::new();
        let first = client.open().await;
        let second = client.open().await;
        client.register(&first, "Ana Lopez", "cliente").await;

        let (_, body) = client.post(&second, "/api/v1/session/continue", None).await;
        assert_eq!(body["screen"], "login");
        assert_eq!(body["users"], json!([]));
    }

    #[tokio::test]
    async fn deleted_session_is_gone() {
        let client = Client::new();
        let sid = client.open().await;
        let (status, _, _) = client
            .send(Method::DELETE, "/api/v1/session", Some(&sid), None)
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = client
            .send(Method::GET, "/api/v1/session", Some(&sid), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
