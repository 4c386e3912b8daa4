//! Lenient number parsing for upstream table cells.

/// Parse a loosely formatted number.
///
/// Whitespace is trimmed and thousands separators are stripped, then the
/// longest numeric prefix is read (`"12.5 mi"` is `12.5`). Empty,
/// unparseable and non-finite input all yield `0.0`; this never returns
/// `NaN` and never fails.
pub fn to_num(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0.0;
    }

    let Some(prefix) = regex!(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").find(&cleaned) else {
        return 0.0;
    };

    match prefix.as_str().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(to_num("1,234.5"), 1234.5);
        assert_eq!(to_num(" 3,000,000 "), 3e6);
    }

    #[test]
    fn empty_and_garbage_are_zero() {
        assert_eq!(to_num(""), 0.0);
        assert_eq!(to_num("   "), 0.0);
        assert_eq!(to_num("abc"), 0.0);
        assert_eq!(to_num("."), 0.0);
        assert_eq!(to_num("-"), 0.0);
    }

    #[test]
    fn reads_numeric_prefix() {
        assert_eq!(to_num("12.5 mi"), 12.5);
        assert_eq!(to_num(".75"), 0.75);
        assert_eq!(to_num("-4"), -4.0);
        assert_eq!(to_num("2e3"), 2000.0);
        assert_eq!(to_num("7."), 7.0);
    }

    #[test]
    fn overflow_is_zero() {
        assert_eq!(to_num("1e999"), 0.0);
    }
}
