//! 把未定型的 JSON 值轉換成宣告的型別。
//!
//! 每個函式只做型別轉換，不檢查業務規則；失敗時回傳 [`Issue`]，
//! 位置相對於被轉換的值本身。

use crate::utils::error::{ErrorKind, Issue};
use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

pub type Coerced<T> = std::result::Result<T, Vec<Issue>>;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

fn fail<T>(kind: ErrorKind, input: &Value) -> Coerced<T> {
    Err(vec![Issue::new(kind, input)])
}

/// 只接受 JSON 字串
pub fn to_text(value: &Value) -> Coerced<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => fail(ErrorKind::StringType, other),
    }
}

/// 接受整數、小數部分為零的浮點數或字串、整數字串與布林值
pub fn to_int(value: &Value) -> Coerced<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return fail(ErrorKind::IntParsingSize, value);
            }
            match n.as_f64() {
                Some(f) if f.fract() != 0.0 || !f.is_finite() => {
                    fail(ErrorKind::IntFromFloat, value)
                }
                Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
                _ => fail(ErrorKind::IntParsingSize, value),
            }
        }
        Value::String(s) => parse_int_text(s).map_err(|kind| vec![Issue::new(kind, value)]),
        Value::Bool(b) => Ok(i64::from(*b)),
        other => fail(ErrorKind::IntType, other),
    }
}

/// 可帶正負號，小數部分只能全是零（`"23.0"`、`"400001.00"`）
fn parse_int_text(text: &str) -> std::result::Result<i64, ErrorKind> {
    let trimmed = text.trim();
    let integral = match trimmed.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') => {
            whole
        }
        Some(_) => return Err(ErrorKind::IntParsing),
        None => trimmed,
    };
    let digits = integral
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(integral);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::IntParsing);
    }

    integral.parse::<i64>().map_err(|_| ErrorKind::IntParsingSize)
}

/// 只接受 `YYYY-MM-DD` 格式且實際存在的日期
pub fn to_date(value: &Value) -> Coerced<NaiveDate> {
    let text = match value {
        Value::String(s) => s,
        other => return fail(ErrorKind::DateType, other),
    };

    if !ISO_DATE.is_match(text) {
        let reason = if text.len() < 10 {
            "input is too short"
        } else {
            "invalid character in date"
        };
        return fail(
            ErrorKind::DateFromIso {
                reason: reason.to_string(),
            },
            value,
        );
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").or_else(|_| {
        fail(
            ErrorKind::DateFromIso {
                reason: "date is outside the calendar".to_string(),
            },
            value,
        )
    })
}

/// 字串陣列；每個不合法的元素以索引回報
pub fn to_text_list(value: &Value) -> Coerced<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        other => return fail(ErrorKind::ListType, other),
    };

    let mut issues = Vec::new();
    let mut texts = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match to_text(item) {
            Ok(text) => texts.push(text),
            Err(errs) => issues.extend(errs.into_iter().map(|issue| issue.within(index))),
        }
    }

    if issues.is_empty() {
        Ok(texts)
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LocItem;
    use serde_json::json;

    fn kind_of<T: std::fmt::Debug>(result: Coerced<T>) -> ErrorKind {
        result.unwrap_err().remove(0).kind
    }

    #[test]
    fn test_to_int_accepts_numbers_and_numeric_text() {
        assert_eq!(to_int(&json!(23)).unwrap(), 23);
        assert_eq!(to_int(&json!("23")).unwrap(), 23);
        assert_eq!(to_int(&json!(" 23 ")).unwrap(), 23);
        assert_eq!(to_int(&json!("-4")).unwrap(), -4);
        assert_eq!(to_int(&json!(23.0)).unwrap(), 23);
        assert_eq!(to_int(&json!("23.0")).unwrap(), 23);
        assert_eq!(to_int(&json!("400001.00")).unwrap(), 400001);
        assert_eq!(to_int(&json!(" -7.0 ")).unwrap(), -7);
        assert_eq!(to_int(&json!(true)).unwrap(), 1);
        assert_eq!(to_int(&json!(9555025078_i64)).unwrap(), 9555025078);
    }

    #[test]
    fn test_to_int_rejects_bad_input() {
        assert_eq!(kind_of(to_int(&json!("abc"))), ErrorKind::IntParsing);
        assert_eq!(kind_of(to_int(&json!(""))), ErrorKind::IntParsing);
        assert_eq!(kind_of(to_int(&json!("23.5"))), ErrorKind::IntParsing);
        assert_eq!(kind_of(to_int(&json!("23."))), ErrorKind::IntParsing);
        assert_eq!(kind_of(to_int(&json!(".0"))), ErrorKind::IntParsing);
        assert_eq!(kind_of(to_int(&json!("1.0.0"))), ErrorKind::IntParsing);
        assert_eq!(kind_of(to_int(&json!(23.5))), ErrorKind::IntFromFloat);
        assert_eq!(kind_of(to_int(&json!(null))), ErrorKind::IntType);
        assert_eq!(kind_of(to_int(&json!([1]))), ErrorKind::IntType);
        assert_eq!(
            kind_of(to_int(&json!("99999999999999999999"))),
            ErrorKind::IntParsingSize
        );
        assert_eq!(kind_of(to_int(&json!(u64::MAX))), ErrorKind::IntParsingSize);
    }

    #[test]
    fn test_to_text_is_strict() {
        assert_eq!(to_text(&json!("Mumbai")).unwrap(), "Mumbai");
        assert_eq!(kind_of(to_text(&json!(400001))), ErrorKind::StringType);
        assert_eq!(kind_of(to_text(&json!(null))), ErrorKind::StringType);
    }

    #[test]
    fn test_to_date() {
        assert_eq!(
            to_date(&json!("2024-12-01")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
        assert_eq!(kind_of(to_date(&json!(20241201))), ErrorKind::DateType);
        assert_eq!(kind_of(to_date(&json!("Dec 1 2024"))).code(), "date_from_iso");
        assert_eq!(kind_of(to_date(&json!("2024-1-5"))).code(), "date_from_iso");
        assert_eq!(kind_of(to_date(&json!("2023-02-29"))).code(), "date_from_iso");
    }

    #[test]
    fn test_to_text_list_reports_each_bad_item() {
        assert_eq!(
            to_text_list(&json!(["python", "selenium"])).unwrap(),
            vec!["python".to_string(), "selenium".to_string()]
        );
        assert_eq!(to_text_list(&json!([])).unwrap(), Vec::<String>::new());
        assert_eq!(kind_of(to_text_list(&json!("python"))), ErrorKind::ListType);

        let issues = to_text_list(&json!(["python", 3, null])).unwrap_err();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].loc, vec![LocItem::Index(1)]);
        assert_eq!(issues[1].loc, vec![LocItem::Index(2)]);
    }
}
