//! カード表示モデル
//!
//! 投稿・検索結果から「カードに何を描くか」だけを計算する。
//! DOM操作は一切しない（web側が`CardModel`をそのまま描画する）。

use crate::error::Result;
use crate::reltime::{format_relative, parse_timestamp};
use crate::types::{SearchResult, Submission};
use chrono::{DateTime, Utc};

/// 1枚のカードに表示する内容
///
/// `None`のフィールドはその要素自体を描画しない。
/// `image_src`が`None`のときはプレースホルダ画像を出す。
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub image_src: Option<String>,
    pub author: String,
    pub date_label: String,
    pub description: Option<String>,
    pub contact: Option<String>,
    pub image_filename: Option<String>,
    /// 検索結果のみ: "42% match" 形式
    pub match_badge: Option<String>,
    /// 検索結果のみ: 理由を " • " で連結した1行
    pub match_reasons: Option<String>,
}

impl CardModel {
    /// 通常の投稿からカードを作る
    pub fn from_submission(item: &Submission, now: DateTime<Utc>) -> Result<Self> {
        let ts = parse_timestamp(&item.timestamp)?;
        Ok(Self {
            image_src: item.image().map(str::to_string),
            author: item.author().to_string(),
            date_label: format_relative(ts, now),
            description: item.description().map(str::to_string),
            contact: item.contact().map(str::to_string),
            image_filename: item.image_filename.clone(),
            match_badge: None,
            match_reasons: None,
        })
    }

    /// 検索結果からカードを作る（スコアバッジと理由付き）
    pub fn from_search_result(result: &SearchResult, now: DateTime<Utc>) -> Result<Self> {
        let base = Submission::from(result);
        let mut card = Self::from_submission(&base, now)?;
        card.match_badge = Some(format!("{}% match", result.score_percent()));
        if !result.match_reasons.is_empty() {
            card.match_reasons = Some(result.match_reasons.join(" • "));
        }
        Ok(card)
    }
}
