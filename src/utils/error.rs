use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Payload is not valid JSON: {0}")]
    PayloadError(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[source] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    ValidationError(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, IntakeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IntakeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IntakeError::IoError(_) | IntakeError::SerializationError(_) => ErrorCategory::System,
            IntakeError::PayloadError(_) => ErrorCategory::Input,
            IntakeError::ConfigValidationError { .. }
            | IntakeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            IntakeError::ValidationError(_) => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            IntakeError::IoError(_) => {
                "Check that the input file exists and the output location is writable".to_string()
            }
            IntakeError::PayloadError(_) => {
                "Make sure the payload is a single well-formed JSON document".to_string()
            }
            IntakeError::SerializationError(_) => {
                "This is an internal error, please report it with the payload".to_string()
            }
            IntakeError::ConfigValidationError { field, .. }
            | IntakeError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration", field)
            }
            IntakeError::ValidationError(e) => {
                let fields: Vec<String> = e.errors().iter().map(|err| err.location()).collect();
                format!("Correct the following fields: {}", fields.join(", "))
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IntakeError::ValidationError(e) => e.to_string(),
            IntakeError::PayloadError(e) => format!("The payload could not be read as JSON ({})", e),
            IntakeError::IoError(e) => format!("Could not read or write a file ({})", e),
            other => other.to_string(),
        }
    }
}

/// 錯誤位置中的一個片段：物件鍵或陣列索引
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocItem {
    Key(String),
    Index(usize),
}

impl fmt::Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocItem::Key(key) => f.write_str(key),
            LocItem::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        LocItem::Key(key.to_string())
    }
}

impl From<usize> for LocItem {
    fn from(index: usize) -> Self {
        LocItem::Index(index)
    }
}

/// 單一欄位驗證失敗的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Field required")]
    Missing,

    #[error("Input should be a valid string")]
    StringType,

    #[error("Input should be a valid integer")]
    IntType,

    #[error("Input should be a valid integer, unable to parse string as an integer")]
    IntParsing,

    #[error("Unable to parse input string as an integer, exceed maximum size")]
    IntParsingSize,

    #[error("Input should be a valid integer, got a number with a fractional part")]
    IntFromFloat,

    #[error("Input should be a valid date")]
    DateType,

    #[error("Input should be a valid date in the format YYYY-MM-DD, {reason}")]
    DateFromIso { reason: String },

    #[error("Input should be a valid list")]
    ListType,

    #[error("Input should be a valid dictionary or instance of {title}")]
    ModelType { title: String },

    #[error("Value error, {message}")]
    GreaterThanEqual { minimum: i64, message: String },

    #[error("Value error, {message}")]
    TooShort {
        min_length: usize,
        actual: usize,
        message: String,
    },

    #[error("Value error, {message}")]
    ValueError { message: String },
}

impl ErrorKind {
    /// 機器可讀的錯誤代碼
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Missing => "missing",
            ErrorKind::StringType => "string_type",
            ErrorKind::IntType => "int_type",
            ErrorKind::IntParsing => "int_parsing",
            ErrorKind::IntParsingSize => "int_parsing_size",
            ErrorKind::IntFromFloat => "int_from_float",
            ErrorKind::DateType => "date_type",
            ErrorKind::DateFromIso { .. } => "date_from_iso",
            ErrorKind::ListType => "list_type",
            ErrorKind::ModelType { .. } => "model_type",
            ErrorKind::GreaterThanEqual { .. } => "greater_than_equal",
            ErrorKind::TooShort { .. } => "too_short",
            ErrorKind::ValueError { .. } => "value_error",
        }
    }
}

/// 轉換或規則檢查產生的問題，位置相對於目前欄位
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub loc: Vec<LocItem>,
    pub kind: ErrorKind,
    pub input: Value,
}

impl Issue {
    pub fn new(kind: ErrorKind, input: &Value) -> Self {
        Self {
            loc: Vec::new(),
            kind,
            input: input.clone(),
        }
    }

    /// 在位置前面加上一層
    pub fn within(mut self, item: impl Into<LocItem>) -> Self {
        self.loc.insert(0, item.into());
        self
    }
}

/// 帶完整位置的欄位錯誤
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<LocItem>,
    #[serde(rename = "type")]
    pub code: &'static str,
    #[serde(rename = "msg")]
    pub message: String,
    pub input: Value,
    #[serde(skip)]
    pub kind: ErrorKind,
}

impl FieldError {
    pub fn from_issue(prefix: &[LocItem], issue: Issue) -> Self {
        let mut loc = prefix.to_vec();
        loc.extend(issue.loc);

        Self {
            loc,
            code: issue.kind.code(),
            message: issue.kind.to_string(),
            input: issue.input,
            kind: issue.kind,
        }
    }

    /// 以點號連接的位置，例如 `address.pincode`
    pub fn location(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// 一次驗證中所有失敗欄位的集合
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    title: String,
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(title: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            title: title.into(),
            errors,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// 找出指定位置（點號格式）的第一個錯誤
    pub fn find(&self, location: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.location() == location)
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!(self.errors)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "{} validation error{} for {}",
            count,
            if count == 1 { "" } else { "s" },
            self.title
        )?;

        for error in &self.errors {
            write!(
                f,
                "\n{}\n  {} [type={}, input_value={}]",
                error.location(),
                error.message,
                error.code,
                error.input
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
