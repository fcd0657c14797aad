//! テーマ切替の純粋部分
//!
//! localStorageへの読み書きと `data-theme` 属性の反映はweb側。
//! ここは「次のテーマ」と「アイコン」の対応表だけを持つ。

/// 保存値がないときの初期テーマ
pub const DEFAULT_THEME: &str = "dark";

/// トグル後のテーマ名。未知の値はdarkに倒す。
pub fn next_theme(current: &str) -> &'static str {
    if current == "dark" {
        "light"
    } else {
        "dark"
    }
}

/// 現在のテーマを表すアイコン
pub fn theme_icon(theme: &str) -> &'static str {
    if theme == "dark" {
        "🌙"
    } else {
        "☀️"
    }
}
