//! テーマの永続化とDOM反映
//!
//! localStorageの`theme`キーに"dark"か"light"を生の文字列で保存し、
//! `<html data-theme>`属性に反映する。次テーマとアイコンの対応表は
//! common::theme側。

use gloo_storage::{LocalStorage, Storage as _};
use lostfound_common::DEFAULT_THEME;

const THEME_KEY: &str = "theme";

/// 保存されたテーマ名。未保存・読めないときはdark。
pub fn load_theme() -> String {
    LocalStorage::raw()
        .get_item(THEME_KEY)
        .ok()
        .flatten()
        .unwrap_or_else(|| DEFAULT_THEME.to_string())
}

/// テーマをlocalStorageと`data-theme`属性の両方に書く
pub fn apply_theme(theme: &str) {
    let _ = LocalStorage::raw().set_item(THEME_KEY, theme);
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

/// 起動時に保存値（なければdark）を適用して返す
pub fn init_theme() -> String {
    let theme = load_theme();
    apply_theme(&theme);
    theme
}
