//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// APIとの境界で発生する失敗と、クライアント側バリデーションの失敗を
/// 1つの分類にまとめる。空コレクションはエラーではなく状態として扱う
/// （state::RenderPlan::Empty / NoMatches）。
#[derive(Error, Debug)]
pub enum Error {
    /// fetch自体が失敗（ネットワーク断・CORS拒否など）
    #[error("network failure: {0}")]
    Network(String),

    /// HTTPステータスが2xx以外
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// レスポンスは返ったがアプリケーションとして失敗（success: false / detail）
    #[error("application error: {0}")]
    Application(String),

    /// クライアント側バリデーション違反。メッセージはそのまま表示文面。
    #[error("{0}")]
    Validation(String),

    /// タイムスタンプが解釈できない
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// リクエストが期限内に完了しなかった
    #[error("request timed out after {0}ms")]
    Timeout(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
