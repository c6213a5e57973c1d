use std::future::Future;

use chat_widget_core::{ChatPage, FetchFailure, HistorySource, WidgetConfig};
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Chat history over HTTP, `GET {api_base}/assignment/chat?page={n}`.
pub struct HttpHistorySource {
    config: WidgetConfig,
}

impl HttpHistorySource {
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }
}

impl HistorySource for HttpHistorySource {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<ChatPage, FetchFailure>> {
        let url = self.config.history_url(page);
        let timeout_ms = self.config.fetch_timeout_ms;

        async move {
            let request = get_page(url);
            if timeout_ms == 0 {
                return request.await;
            }
            let timer = TimeoutFuture::new(timeout_ms);
            futures::pin_mut!(request, timer);
            match future::select(request, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(FetchFailure::Timeout(timeout_ms)),
            }
        }
    }
}

async fn get_page(url: String) -> Result<ChatPage, FetchFailure> {
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchFailure::Status(resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))?;
    ChatPage::from_json(&body)
}
