//! 入力途中の検索候補
//!
//! サーバーを呼ばずに出すクライアント側の固定候補。APIが返す
//! `suggestions` とは別物（あちらは結果バナーの隣にチップ表示）。

/// よく探される持ち物の固定プール
const CANDIDATES: &[&str] = &[
    "wallet",
    "keys",
    "phone",
    "backpack",
    "glasses",
    "watch",
    "headphones",
    "laptop",
    "charger",
    "umbrella",
    "water bottle",
    "jacket",
    "id card",
    "earbuds",
    "notebook",
];

/// 入力途中の文字列に部分一致する候補を返す
///
/// 3文字以上入力されるまでは何も出さない。大文字小文字は無視。
pub fn typing_suggestions(partial: &str) -> Vec<&'static str> {
    let trimmed = partial.trim();
    if trimmed.chars().count() <= 2 {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();
    CANDIDATES
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_gives_nothing() {
        assert!(typing_suggestions("").is_empty());
        assert!(typing_suggestions("wa").is_empty());
        assert!(typing_suggestions("  wa  ").is_empty());
    }

    #[test]
    fn test_three_chars_match() {
        assert_eq!(typing_suggestions("wal"), vec!["wallet"]);
        assert_eq!(typing_suggestions("wat"), vec!["watch", "water bottle"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(typing_suggestions("WAL"), vec!["wallet"]);
        // "phone"は"headphones"にも部分一致する
        assert_eq!(typing_suggestions("Phone"), vec!["phone", "headphones"]);
    }

    #[test]
    fn test_substring_not_prefix() {
        // 先頭一致に限らない
        assert_eq!(typing_suggestions("book"), vec!["notebook"]);
    }

    #[test]
    fn test_no_match() {
        assert!(typing_suggestions("zzz").is_empty());
    }
}
