//! タイムスタンプ解釈と相対時刻表示
//!
//! APIの日時文字列は形式が揺れる（タイムゾーン付きRFC3339と
//! 素のISO-8601が混在）ため、段階的にパースを試みる。
//! 相対時刻の基準時刻 `now` は必ず引数で渡す。ここでは時計を読まない。

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

/// APIのタイムスタンプ文字列をUTC日時に解釈する
///
/// タイムゾーン情報がない文字列はUTCとみなす。
///
/// # Examples
///
/// ```
/// use lostfound_common::parse_timestamp;
///
/// let ts = parse_timestamp("2025-08-20T10:30:00Z").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2025-08-20T10:30:00+00:00");
///
/// // タイムゾーンなしでも可
/// assert!(parse_timestamp("2025-08-20T10:30:00").is_ok());
/// assert!(parse_timestamp("next tuesday").is_err());
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    // "2025-08-20T10:30:00" / "2025-08-20T10:30:00.123"
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    // "2025-08-20 10:30:00"（SQLiteのDATETIME既定形式）
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    Err(Error::InvalidTimestamp(raw.to_string()))
}

/// 投稿時刻を相対表示に変換する
///
/// - 1時間未満: "Just now"
/// - 24時間未満: "Nh ago"
/// - それ以上: "Nd ago"
///
/// 端数は常に切り捨て（25時間→"1d ago"）。未来の時刻は
/// クロックずれとみなして "Just now" に倒す。
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}
