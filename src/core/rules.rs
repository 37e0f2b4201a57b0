use crate::utils::error::ErrorKind;
use serde_json::Value;
use validator::{Validate, ValidationError};

/// 型別轉換之後才套用的業務規則
///
/// 轉換失敗的欄位保持 `None`，`validator` 會略過它們，
/// 所以每條規則只檢查轉換成功的值。
#[derive(Debug, Default, Validate)]
pub struct UserRules {
    #[validate(range(
        min = 18,
        code = "greater_than_equal",
        message = "Age must be 18 or above"
    ))]
    pub age: Option<i64>,

    #[validate(length(min = 1, code = "too_short", message = "At least one skill required"))]
    pub skills: Option<Vec<String>>,
}

/// 把 `validator` 的違規轉成欄位錯誤種類
pub fn violation_kind(violation: &ValidationError) -> ErrorKind {
    let message = violation
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| violation.code.to_string());
    let param = |name: &str| violation.params.get(name);

    match violation.code.as_ref() {
        "greater_than_equal" => ErrorKind::GreaterThanEqual {
            minimum: param("min")
                .and_then(|min| min.as_i64().or_else(|| min.as_f64().map(|f| f as i64)))
                .unwrap_or_default(),
            message,
        },
        "too_short" => ErrorKind::TooShort {
            min_length: param("min")
                .and_then(Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or_default(),
            actual: param("value")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
            message,
        },
        _ => ErrorKind::ValueError { message },
    }
}
