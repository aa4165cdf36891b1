use crate::types::AppVersion;

/// Extract the leading integer of a host version string such as
/// `"5.0 (Windows; en-US)"`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Input without any leading digit yields an absent
/// version. Values too large for `i64` saturate.
pub fn parse_app_version(raw: &str) -> AppVersion {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: Option<i64> = None;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        let acc = value.unwrap_or(0);
        value = Some(if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        });
    }

    value.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer() {
        assert_eq!(parse_app_version("5.0 (Windows; en-US)").get(), Some(5));
        assert_eq!(parse_app_version("4.0 (compatible; MSIE 6.0)").get(), Some(4));
        assert_eq!(parse_app_version("  12abc").get(), Some(12));
        assert_eq!(parse_app_version("9.80").get(), Some(9));
    }

    #[test]
    fn signs() {
        assert_eq!(parse_app_version("-3").get(), Some(-3));
        assert_eq!(parse_app_version("+7.1").get(), Some(7));
    }

    #[test]
    fn no_digits_is_absent() {
        assert_eq!(parse_app_version("").get(), None);
        assert_eq!(parse_app_version("unknown").get(), None);
        assert_eq!(parse_app_version("-").get(), None);
        assert_eq!(parse_app_version(".5").get(), None);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(parse_app_version("99999999999999999999999").get(), Some(i64::MAX));
        assert_eq!(parse_app_version("-99999999999999999999999").get(), Some(i64::MIN));
    }
}
