use axum::extract::{Query, State};
use axum::Json;
use chat_widget_core::ChatPage;
use tracing::debug;

use crate::models::PageQuery;
use crate::service::history_service::HistoryService;

/// GET `/assignment/chat?page={n}` — one page of history as JSON
pub async fn history_handler(
    State(svc): State<HistoryService>,
    Query(query): Query<PageQuery>,
) -> Json<ChatPage> {
    let page = svc.page(query.page);
    debug!("serving history page {} ({} messages)", query.page, page.chats.len());
    Json(page)
}

/// GET `/health`
pub async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use chat_widget_core::{ChatMessage, ChatPage};
    use tower::ServiceExt;

    use crate::routes::router;
    use crate::service::history_service::HistoryService;
    use crate::store::fixture_store::FixtureStore;

    fn app() -> Router {
        let messages = (1..=12)
            .map(|i| ChatMessage::new("a", format!("m{i}"), format!("T{i}")))
            .collect();
        router(HistoryService::new(FixtureStore::new(messages), 5))
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let resp = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn serves_newest_page_first() {
        let (status, body) = get("/assignment/chat?page=0").await;
        assert_eq!(status, StatusCode::OK);

        let page = ChatPage::from_json(std::str::from_utf8(&body).unwrap()).unwrap();
        let texts: Vec<_> = page.chats.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, ["m8", "m9", "m10", "m11", "m12"]);
    }

    #[tokio::test]
    async fn page_beyond_history_is_empty() {
        let (status, body) = get("/assignment/chat?page=9").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, br#"{"chats":[]}"#);
    }

    #[tokio::test]
    async fn invalid_page_is_rejected() {
        let (status, _) = get("/assignment/chat?page=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get("/assignment/chat?page=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() {
        let resp = app()
            .oneshot(
                Request::get("/assignment/chat?page=1")
                    .header(header::ORIGIN, "http://127.0.0.1:8081")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn health_check() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }
}
