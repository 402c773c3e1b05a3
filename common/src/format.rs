//! 表示用フォーマット・エスケープ

/// セント単位の金額を `1.234,50` 形式に整形
///
/// 小数点は `,`、3桁区切りは `.`、常に小数2桁。
pub fn format_cents(cents: u64) -> String {
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{},{:02}", grouped, fraction)
}

/// 小数の金額を整形（負数・非有限値は 0 として扱う）
pub fn format_price(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return format_cents(0);
    }
    format_cents((value * 100.0).round() as u64)
}

/// 先頭の1文字だけ大文字にする
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// HTMLテキスト・属性値のエスケープ
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#039;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// フォーム形式のURLエンコード
///
/// 英数字と `-_.` はそのまま、空白は `+`、それ以外はUTF-8バイトごとに `%XX`。
pub fn url_encode(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(value.len() * 3);
    for &byte in value.as_bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' => out.push(byte as char),
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(10.0), "10,00");
        assert_eq!(format_price(5.0), "5,00");
        assert_eq!(format_price(0.0), "0,00");
        assert_eq!(format_price(4.5), "4,50");
    }

    #[test]
    fn test_format_price_thousands() {
        assert_eq!(format_price(1234.5), "1.234,50");
        assert_eq!(format_price(999.99), "999,99");
        assert_eq!(format_price(1_000_000.0), "1.000.000,00");
    }

    #[test]
    fn test_format_price_invalid_is_zero() {
        assert_eq!(format_price(-3.0), "0,00");
        assert_eq!(format_price(f64::INFINITY), "0,00");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("home"), "Home");
        assert_eq!(capitalize_first("Home"), "Home");
        assert_eq!(capitalize_first("ropa de niño"), "Ropa de niño");
        assert_eq!(capitalize_first("électronique"), "Électronique");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("Red Shirt"), "Red+Shirt");
        assert_eq!(url_encode("($10,00)"), "%28%2410%2C00%29");
        assert_eq!(url_encode("niño"), "ni%C3%B1o");
        assert_eq!(url_encode("a-b_c.d"), "a-b_c.d");
    }
}
