//! 投稿・検索結果の型定義
//!
//! APIと共有される型:
//! - Submission: GET /api/submissions の1レコード
//! - SearchResult: POST /api/search の1レコード（スコアと理由付き）
//! - SubmissionsResponse / SearchResponse: レスポンス封筒
//!
//! フィールド名はAPIのsnake_caseそのまま。欠けたフィールドは
//! `#[serde(default)]` で許容し、タイムスタンプ不正だけを境界で弾く。

use crate::reltime::parse_timestamp;
use serde::{Deserialize, Serialize};

/// 投稿レコード（クライアント側からは読み取り専用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub text: Option<String>,
    pub contact: Option<String>,
    pub image_path: Option<String>,
    pub image_filename: Option<String>,
    /// ISO-8601日時文字列。相対時刻表示の唯一の情報源。
    pub timestamp: String,
}

impl Submission {
    /// 表示用の投稿者名。未入力・空文字は "Anonymous"。
    pub fn author(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Anonymous")
    }

    /// 説明文。空白のみは「なし」として扱う。
    pub fn description(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// 画像URL。空文字はプレースホルダ扱い。
    pub fn image(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|p| !p.is_empty())
    }

    /// 連絡先。空白のみは非表示。
    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// 検索結果レコード。Submissionの全フィールドに加えて
/// 類似度スコアとマッチ理由を持つ。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub text: Option<String>,
    pub contact: Option<String>,
    pub image_path: Option<String>,
    pub image_filename: Option<String>,
    pub timestamp: String,
    /// 類似度 [0,1]（API側で算出）
    pub similarity_score: f64,
    /// マッチ理由（表示順は受信順）
    pub match_reasons: Vec<String>,
}

impl SearchResult {
    /// 類似度を0-100の整数パーセントに丸める（表示用の派生値）
    pub fn score_percent(&self) -> u8 {
        (self.similarity_score * 100.0).round() as u8
    }
}

impl From<&SearchResult> for Submission {
    fn from(result: &SearchResult) -> Self {
        Self {
            id: result.id,
            name: result.name.clone(),
            text: result.text.clone(),
            contact: result.contact.clone(),
            image_path: result.image_path.clone(),
            image_filename: result.image_filename.clone(),
            timestamp: result.timestamp.clone(),
        }
    }
}

/// GET /api/submissions のレスポンス
///
/// キー欠落は空配列として扱う（= 空状態表示）。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmissionsResponse {
    pub submissions: Vec<Submission>,
}

/// POST /api/search のレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<SearchResult>,
    pub suggestions: Vec<String>,
    pub total_matches: usize,
}

/// エラーレスポンスボディ（POST /api/submit の非2xx時）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub detail: String,
}

/// タイムスタンプが解釈できない投稿を境界で除外する
///
/// 返値は (残ったレコード, 除外件数)。除外はエラーにせず、
/// 呼び出し側でログに残す。
pub fn sanitize_submissions(items: Vec<Submission>) -> (Vec<Submission>, usize) {
    let before = items.len();
    let kept: Vec<Submission> = items
        .into_iter()
        .filter(|s| parse_timestamp(&s.timestamp).is_ok())
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// 検索結果版の境界検証
pub fn sanitize_results(results: Vec<SearchResult>) -> (Vec<SearchResult>, usize) {
    let before = results.len();
    let kept: Vec<SearchResult> = results
        .into_iter()
        .filter(|r| parse_timestamp(&r.timestamp).is_ok())
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_deserialize_full() {
        let json = r#"{
            "id": 7,
            "name": "Alice",
            "text": "Black wallet near the library",
            "contact": "alice@example.com",
            "image_path": "/uploads/wallet.jpg",
            "image_filename": "wallet.jpg",
            "timestamp": "2025-08-20T10:30:00Z"
        }"#;

        let s: Submission = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(s.id, Some(7));
        assert_eq!(s.author(), "Alice");
        assert_eq!(s.description(), Some("Black wallet near the library"));
        assert_eq!(s.image(), Some("/uploads/wallet.jpg"));
        assert_eq!(s.contact(), Some("alice@example.com"));
    }

    #[test]
    fn test_submission_deserialize_missing_fields() {
        // timestampだけでもデシリアライズできる
        let json = r#"{"timestamp": "2025-08-20T10:30:00Z"}"#;

        let s: Submission = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(s.id, None);
        assert_eq!(s.author(), "Anonymous");
        assert_eq!(s.description(), None);
        assert_eq!(s.image(), None);
    }

    #[test]
    fn test_submission_author_empty_name() {
        let s = Submission {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(s.author(), "Anonymous");
    }

    #[test]
    fn test_submission_description_whitespace_only() {
        let s = Submission {
            text: Some("   \n\t ".to_string()),
            ..Default::default()
        };
        assert_eq!(s.description(), None);
    }

    #[test]
    fn test_submission_image_empty_path() {
        let s = Submission {
            image_path: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(s.image(), None);
    }

    #[test]
    fn test_search_result_deserialize() {
        let json = r#"{
            "name": "Bob",
            "text": "Blue backpack",
            "timestamp": "2025-08-20T10:30:00Z",
            "similarity_score": 0.42,
            "match_reasons": ["Keyword match", "Color match"]
        }"#;

        let r: SearchResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(r.similarity_score, 0.42);
        assert_eq!(r.match_reasons.len(), 2);
        assert_eq!(r.score_percent(), 42);
    }

    #[test]
    fn test_score_percent_rounding() {
        let mut r = SearchResult::default();

        r.similarity_score = 0.0;
        assert_eq!(r.score_percent(), 0);

        r.similarity_score = 0.005;
        assert_eq!(r.score_percent(), 1);

        r.similarity_score = 0.999;
        assert_eq!(r.score_percent(), 100);

        r.similarity_score = 1.0;
        assert_eq!(r.score_percent(), 100);
    }

    #[test]
    fn test_search_result_to_submission() {
        let r = SearchResult {
            id: Some(3),
            name: Some("Carol".to_string()),
            text: Some("Silver keys".to_string()),
            timestamp: "2025-08-20T10:30:00Z".to_string(),
            similarity_score: 0.8,
            match_reasons: vec!["Keyword match".to_string()],
            ..Default::default()
        };

        let s = Submission::from(&r);
        assert_eq!(s.id, Some(3));
        assert_eq!(s.author(), "Carol");
        assert_eq!(s.timestamp, r.timestamp);
    }

    #[test]
    fn test_submissions_response_absent_key() {
        // submissionsキーがなくても空配列になる
        let response: SubmissionsResponse = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(response.submissions.is_empty());
    }

    #[test]
    fn test_search_response_deserialize() {
        let json = r#"{
            "success": true,
            "results": [{"timestamp": "2025-08-20T10:30:00Z", "similarity_score": 0.9}],
            "suggestions": ["wallet", "keys"],
            "total_matches": 1
        }"#;

        let response: SearchResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.success);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.suggestions, vec!["wallet", "keys"]);
        assert_eq!(response.total_matches, 1);
    }

    #[test]
    fn test_error_detail_deserialize() {
        let body: ErrorDetail =
            serde_json::from_str(r#"{"detail": "Image too large"}"#).expect("デシリアライズ失敗");
        assert_eq!(body.detail, "Image too large");
    }

    // =============================================
    // 境界検証テスト
    // =============================================

    #[test]
    fn test_sanitize_submissions_drops_bad_timestamps() {
        let items = vec![
            Submission {
                timestamp: "2025-08-20T10:30:00Z".to_string(),
                ..Default::default()
            },
            Submission {
                timestamp: "not-a-date".to_string(),
                ..Default::default()
            },
            Submission {
                timestamp: String::new(),
                ..Default::default()
            },
        ];

        let (kept, dropped) = sanitize_submissions(items);
        assert_eq!(kept.len(), 1);
        assert_eq!(dropped, 2);
    }

    #[test]
    fn test_sanitize_submissions_keeps_order() {
        let items = vec![
            Submission {
                id: Some(1),
                timestamp: "2025-08-20T10:00:00Z".to_string(),
                ..Default::default()
            },
            Submission {
                id: Some(2),
                timestamp: "2025-08-20T11:00:00Z".to_string(),
                ..Default::default()
            },
        ];

        let (kept, dropped) = sanitize_submissions(items);
        assert_eq!(dropped, 0);
        assert_eq!(kept[0].id, Some(1));
        assert_eq!(kept[1].id, Some(2));
    }

    #[test]
    fn test_sanitize_results() {
        let results = vec![
            SearchResult {
                timestamp: "2025-08-20T10:30:00Z".to_string(),
                similarity_score: 0.9,
                ..Default::default()
            },
            SearchResult {
                timestamp: "garbage".to_string(),
                ..Default::default()
            },
        ];

        let (kept, dropped) = sanitize_results(results);
        assert_eq!(kept.len(), 1);
        assert_eq!(dropped, 1);
        assert_eq!(kept[0].similarity_score, 0.9);
    }
}
