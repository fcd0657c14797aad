//! ギャラリー表示状態
//!
//! ページ読込時に取得した投稿一覧（canonical）をページ生存中ずっと
//! 保持し、検索はその上に重ねる表示モードとして扱う。検索解除は
//! 再フェッチせずcanonicalへ戻るだけ。
//!
//! 「何を描くか」は `render()` が返す `RenderPlan` に全部入っている。
//! DOMを持たないのでネイティブテストできる。

use crate::card::CardModel;
use crate::types::{SearchResponse, SearchResult, Submission};
use chrono::{DateTime, Utc};

/// 表示モード。BrowsingかSearchingのどちらか一方だけが描画される。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewMode {
    #[default]
    Browsing,
    Searching {
        query: String,
        results: Vec<SearchResult>,
        suggestions: Vec<String>,
    },
}

/// ギャラリーの保持状態
///
/// `canonical` は初回ロードで一度だけ書かれ、以後は読み取りのみ。
/// 検索に入っても `canonical` は変更しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    canonical: Vec<Submission>,
    mode: ViewMode,
}

/// 1回の描画で画面に出すべき内容
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// 投稿が1件もない（空状態メッセージを出す）
    Empty,
    /// 通常一覧
    Listing { cards: Vec<CardModel> },
    /// 検索結果一覧（バナーと提案チップ付き）
    SearchResults {
        query: String,
        total: usize,
        cards: Vec<CardModel>,
        suggestions: Vec<String>,
    },
    /// 検索ヒットなし（「すべて表示」ボタン付きプレースホルダ）
    NoMatches { query: String },
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初回ロード結果を取り込む。モードはBrowsingに戻す。
    pub fn load(&mut self, items: Vec<Submission>) {
        self.canonical = items;
        self.mode = ViewMode::Browsing;
    }

    /// 一覧取得の失敗を取り込む。前の内容は残さず空状態に倒す。
    pub fn load_failed(&mut self) {
        self.load(Vec::new());
    }

    /// 検索結果に切り替える。canonicalには触らない。
    pub fn enter_search(&mut self, query: impl Into<String>, response: SearchResponse) {
        self.mode = ViewMode::Searching {
            query: query.into(),
            results: response.results,
            suggestions: response.suggestions,
        };
    }

    /// 検索の失敗を取り込む。直前の表示は変えない。
    /// 失敗の通知はUI側の仕事で、状態としては何も起きなかった扱い。
    pub fn search_failed(&mut self) {}

    /// Browsingへ戻す。戻り値は復元された件数（トースト表示用）。
    ///
    /// 既にBrowsingのときは何もせず件数だけ返す（冪等）。
    pub fn clear_search(&mut self) -> usize {
        self.mode = ViewMode::Browsing;
        self.canonical.len()
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, ViewMode::Searching { .. })
    }

    pub fn canonical(&self) -> &[Submission] {
        &self.canonical
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// 現在の状態から描画内容を導出する
    ///
    /// タイムスタンプ不正は境界で除外済みの前提だが、万一残っていても
    /// ここで黙って飛ばす（パニックにも空白カードにもしない）。
    pub fn render(&self, now: DateTime<Utc>) -> RenderPlan {
        match &self.mode {
            ViewMode::Browsing => {
                if self.canonical.is_empty() {
                    return RenderPlan::Empty;
                }
                let cards: Vec<CardModel> = self
                    .canonical
                    .iter()
                    .filter_map(|item| CardModel::from_submission(item, now).ok())
                    .collect();
                if cards.is_empty() {
                    RenderPlan::Empty
                } else {
                    RenderPlan::Listing { cards }
                }
            }
            ViewMode::Searching {
                query,
                results,
                suggestions,
            } => {
                let cards: Vec<CardModel> = results
                    .iter()
                    .filter_map(|r| CardModel::from_search_result(r, now).ok())
                    .collect();
                if cards.is_empty() {
                    RenderPlan::NoMatches {
                        query: query.clone(),
                    }
                } else {
                    let total = cards.len();
                    RenderPlan::SearchResults {
                        query: query.clone(),
                        total,
                        cards,
                        suggestions: suggestions.clone(),
                    }
                }
            }
        }
    }
}
