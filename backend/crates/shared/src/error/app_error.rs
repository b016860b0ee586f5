//! Application Error
//!
//! [`AppError`] carries either a gateway-originated failure (kind + message)
//! or an upstream error response to relay unchanged (status + payload).

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// ゲートウェイ全体で使用する標準エラー型です。
/// ビルダーパターンを使用してエラーを構築できます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `action` - ユーザーが取るべきアクション（オプション）
/// * `status` - 上流 API から中継したステータス（オプション）
/// * `payload` - 上流 API から中継したボディ（オプション）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// // シンプルなエラー
/// let err = AppError::new(ErrorKind::Unauthorized, "Invalid credentials");
///
/// // 上流 API のエラーをそのまま中継
/// let err = AppError::relayed(404, serde_json::json!({ "message": "not found" }));
/// assert_eq!(err.status_code(), 404);
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// ユーザー向けメッセージ
    message: Cow<'static, str>,
    /// ユーザーが取るべきアクション
    action: Option<Cow<'static, str>>,
    /// 中継したステータスコード（`kind` より優先）
    status: Option<u16>,
    /// 中継したレスポンスボディ（問題詳細 JSON の代わりに返す）
    payload: Option<serde_json::Value>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 種別とメッセージからエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            status: None,
            payload: None,
            source: None,
        }
    }

    /// 上流 API のエラー応答を中継するエラーを作成
    ///
    /// ステータスコードとボディは変更せずにクライアントへ返されます。
    /// 種別はステータスから推定し、ログの分類にのみ使います。
    pub fn relayed(status: u16, payload: serde_json::Value) -> Self {
        let kind = ErrorKind::from_status(status);
        Self {
            status: Some(status),
            payload: Some(payload),
            ..Self::new(kind, format!("Upstream responded with status {}", status))
        }
    }

    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 502 Bad Gateway エラー
    #[inline]
    pub fn bad_gateway(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadGateway, message)
    }

    /// 504 Gateway Timeout エラー
    #[inline]
    pub fn gateway_timeout(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::GatewayTimeout, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// ユーザー向けアクションを設定（問題詳細の `action` に出力）
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを設定
    ///
    /// ログにのみ出力され、クライアントには返されません。
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP ステータスコードを取得
    ///
    /// 中継したステータスがあればそれを優先します。
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.status.unwrap_or_else(|| self.kind.status_code())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// 中継したボディを取得
    #[inline]
    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    /// 上流 API のエラーを中継しているかどうか
    #[inline]
    pub fn is_relayed(&self) -> bool {
        self.payload.is_some()
    }

    /// サーバーエラーかどうか
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 元のエラーチェーンを「: 」区切りの文字列に展開（ログ用）
    pub fn source_chain(&self) -> Option<String> {
        let mut current = self.source()?;
        let mut chain = current.to_string();
        while let Some(next) = current.source() {
            chain.push_str(": ");
            chain.push_str(&next.to_string());
            current = next;
        }
        Some(chain)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(status) = &self.status {
            builder.field("status", status);
        }
        if let Some(payload) = &self.payload {
            builder.field("payload", payload);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
