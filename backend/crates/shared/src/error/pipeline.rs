//! Error Pipeline - Log stage
//!
//! The response stage lives in `impl IntoResponse for AppError`: it maps the
//! error to a JSON body and attaches an [`ErrorReport`] to the response.
//! The log stage is [`log_errors`], a middleware that picks the report up and
//! writes exactly one log event per failed request without touching the
//! status or body.
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(axum::middleware::from_fn(kernel::error::pipeline::log_errors));
//! ```

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use super::app_error::AppError;
use super::kind::ErrorKind;

/// レスポンス拡張に格納されるエラー報告
///
/// クライアントには送信されません。
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub status: u16,
    pub message: String,
    pub relayed: bool,
    pub source: Option<String>,
}

impl From<&AppError> for ErrorReport {
    fn from(err: &AppError) -> Self {
        Self {
            kind: err.kind(),
            status: err.status_code(),
            message: err.message().to_string(),
            relayed: err.is_relayed(),
            source: err.source_chain(),
        }
    }
}

impl ErrorReport {
    /// ステータスに応じたレベルで 1 件だけ記録
    fn log(&self, method: &Method, path: &str) {
        let source = self.source.as_deref().unwrap_or("-");

        if self.status >= 500 {
            tracing::error!(
                %method,
                path,
                status = self.status,
                kind = %self.kind,
                relayed = self.relayed,
                source,
                "{}",
                self.message
            );
        } else {
            tracing::warn!(
                %method,
                path,
                status = self.status,
                kind = %self.kind,
                relayed = self.relayed,
                source,
                "{}",
                self.message
            );
        }
    }
}

/// エラーログ用ミドルウェア
///
/// `axum::middleware::from_fn(log_errors)` として最外周に近い位置へ配置します。
pub async fn log_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    if let Some(report) = response.extensions_mut().remove::<ErrorReport>() {
        report.log(&method, &path);
    }

    response
}
