//! 投稿フォームの入力検証
//!
//! 画像の種類・サイズ検査と送信可否判定。サイズはブラウザの
//! `File.size` がf64なのでf64のまま扱う。

use crate::error::{Error, Result};

/// 添付画像の上限（10MB）
pub const MAX_IMAGE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// 選択されたファイルが投稿可能な画像か検査する
///
/// メッセージはそのままユーザーに見せる文面。
pub fn validate_image(mime: &str, size_bytes: f64) -> Result<()> {
    if !mime.starts_with("image/") {
        return Err(Error::Validation(
            "Please select a valid image file.".to_string(),
        ));
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(Error::Validation(
            "File size must be less than 10MB.".to_string(),
        ));
    }
    Ok(())
}

/// 送信ボタンを有効にしてよいか
///
/// 説明文が空白のみでないか、画像が選択されていれば送信できる。
pub fn can_submit(text: &str, has_image: bool) -> bool {
    !text.trim().is_empty() || has_image
}

/// バイト数を "2.4 MB" 形式に整形する
///
/// 小数2桁で丸めて末尾の0は省く（"1.00 KB" ではなく "1 KB"）。
pub fn format_file_size(bytes: f64) -> String {
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exp = if bytes < 1.0 {
        0
    } else {
        ((bytes.ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1)
    };
    let value = bytes / 1024_f64.powi(exp as i32);
    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, UNITS[exp])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_image() {
        let err = validate_image("application/pdf", 1024.0).unwrap_err();
        assert_eq!(err.to_string(), "Please select a valid image file.");

        assert!(validate_image("text/plain", 10.0).is_err());
        assert!(validate_image("", 10.0).is_err());
    }

    #[test]
    fn test_validate_rejects_oversize() {
        let err = validate_image("image/png", MAX_IMAGE_BYTES + 1.0).unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 10MB.");
    }

    #[test]
    fn test_validate_accepts_exactly_10mb() {
        assert!(validate_image("image/jpeg", MAX_IMAGE_BYTES).is_ok());
        assert!(validate_image("image/png", 1024.0).is_ok());
        assert!(validate_image("image/webp", 0.0).is_ok());
    }

    #[test]
    fn test_can_submit() {
        assert!(!can_submit("", false));
        assert!(!can_submit("   \n ", false));
        assert!(can_submit("lost my wallet", false));
        assert!(can_submit("", true));
        assert!(can_submit("both", true));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0.0), "0 Bytes");
        assert_eq!(format_file_size(500.0), "500 Bytes");
        assert_eq!(format_file_size(1024.0), "1 KB");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(1048576.0), "1 MB");
        // 2516582 bytes ≒ 2.4 MB
        assert_eq!(format_file_size(2_516_582.0), "2.4 MB");
        assert_eq!(format_file_size(10.0 * 1024.0 * 1024.0), "10 MB");
        assert_eq!(format_file_size(1_073_741_824.0), "1 GB");
    }

    #[test]
    fn test_format_file_size_trims_trailing_zeros() {
        // 2.50 -> 2.5, 3.00 -> 3
        assert_eq!(format_file_size(2560.0), "2.5 KB");
        assert_eq!(format_file_size(3072.0), "3 KB");
    }
}
