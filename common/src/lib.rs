//! Lost & Found Common Library
//!
//! Web(WASM)側とネイティブテストで共有される純粋ロジック:
//! - 投稿・検索結果の型とAPIレスポンス境界検証
//! - 相対時刻フォーマッタ
//! - ギャラリー表示状態と描画プラン
//! - フォームバリデーション
//!
//! DOMやfetchへの依存はここには置かない（web-wasm側の責務）。

pub mod card;
pub mod error;
pub mod reltime;
pub mod state;
pub mod suggest;
pub mod theme;
pub mod types;
pub mod validate;

pub use card::CardModel;
pub use error::{Error, Result};
pub use reltime::{format_relative, parse_timestamp};
pub use state::{GalleryState, RenderPlan, ViewMode};
pub use suggest::typing_suggestions;
pub use theme::{next_theme, theme_icon, DEFAULT_THEME};
pub use types::{
    sanitize_results, sanitize_submissions, ErrorDetail, SearchResponse, SearchResult, Submission,
    SubmissionsResponse,
};
pub use validate::{can_submit, format_file_size, validate_image, MAX_IMAGE_BYTES};
