use crate::core::alias::FieldAliases;
use crate::core::reader::FieldReader;
use crate::utils::error::{ErrorKind, FieldError, IntakeError, Issue, Result, ValidationError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// 可以從未定型資料驗證建構、再輸出回映射的紀錄
pub trait Model: Serialize + DeserializeOwned + Sized {
    /// 錯誤訊息中的紀錄名稱
    const TITLE: &'static str;
    const ALIASES: FieldAliases;

    /// 依宣告順序讀取每個欄位；有任何錯誤時回傳 `None`
    fn validate_fields(reader: &mut FieldReader<'_>) -> Option<Self>;

    fn model_validate(raw: &Value) -> std::result::Result<Self, ValidationError> {
        let Value::Object(object) = raw else {
            let kind = ErrorKind::ModelType {
                title: Self::TITLE.to_string(),
            };
            return Err(ValidationError::new(
                Self::TITLE,
                vec![FieldError::from_issue(&[], Issue::new(kind, raw))],
            ));
        };

        let mut reader = FieldReader::new(object, Self::ALIASES);
        let model = Self::validate_fields(&mut reader);
        let errors = reader.into_errors();

        match model {
            Some(model) if errors.is_empty() => Ok(model),
            _ => Err(ValidationError::new(Self::TITLE, errors)),
        }
    }

    /// 只轉換本紀錄自己的鍵；巢狀紀錄依其 `Serialize` 輸出
    fn model_dump(&self, by_alias: bool) -> Result<Value> {
        let value = serde_json::to_value(self).map_err(IntakeError::SerializationError)?;
        match value {
            Value::Object(map) if by_alias => Ok(Value::Object(Self::ALIASES.to_external_keys(map))),
            other => Ok(other),
        }
    }

    /// 從先前 `model_dump` 的輸出還原，不重新驗證
    fn from_dump(value: Value, by_alias: bool) -> Result<Self> {
        let value = match value {
            Value::Object(map) if by_alias => Value::Object(Self::ALIASES.to_internal_keys(map)),
            other => other,
        };
        serde_json::from_value(value).map_err(IntakeError::PayloadError)
    }
}

pub trait PayloadSource {
    fn read_payload(&self) -> Result<String>;
    fn describe(&self) -> String;
}

pub trait OutputSink {
    fn write_output(&self, rendered: &str) -> Result<()>;
    fn describe(&self) -> String;
}

pub trait ConfigProvider {
    fn by_alias(&self) -> bool;
    fn pretty(&self) -> bool;
    /// 沒有設定時輸出到 stdout
    fn output_path(&self) -> Option<&Path>;
}
