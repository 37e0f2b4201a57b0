use crate::core::alias::FieldAliases;
use crate::core::coerce::Coerced;
use crate::core::rules::violation_kind;
use crate::domain::ports::Model;
use crate::utils::error::{ErrorKind, FieldError, Issue, LocItem};
use serde_json::{Map, Value};
use validator::Validate;

/// 逐欄讀取一個 JSON 物件並累積所有錯誤
///
/// 欄位以內部名稱指定，讀取時透過別名表換成外部鍵；
/// 錯誤位置也使用外部鍵，並依欄位第一次被讀取的順序排列。
/// 任何一步失敗都回傳 `None`，但會繼續讓呼叫端檢查其餘欄位。
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    aliases: FieldAliases,
    prefix: Vec<LocItem>,
    fields: Vec<String>,
    errors: Vec<(usize, FieldError)>,
}

impl<'a> FieldReader<'a> {
    pub fn new(object: &'a Map<String, Value>, aliases: FieldAliases) -> Self {
        Self::with_prefix(object, aliases, Vec::new())
    }

    fn with_prefix(
        object: &'a Map<String, Value>,
        aliases: FieldAliases,
        prefix: Vec<LocItem>,
    ) -> Self {
        Self {
            object,
            aliases,
            prefix,
            fields: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// 欄位的宣告順序
    fn slot(&mut self, field: &str) -> usize {
        match self.fields.iter().position(|f| f == field) {
            Some(slot) => slot,
            None => {
                self.fields.push(field.to_string());
                self.fields.len() - 1
            }
        }
    }

    fn raw(&self, field: &str) -> Option<&'a Value> {
        let object = self.object;
        object.get(self.aliases.external(field))
    }

    fn record(&mut self, field: &str, issues: Vec<Issue>) {
        let slot = self.slot(field);
        let key = self.aliases.external(field);
        for issue in issues {
            self.errors
                .push((slot, FieldError::from_issue(&self.prefix, issue.within(key))));
        }
    }

    fn missing(&mut self, field: &str) {
        let input = Value::Object(self.object.clone());
        self.record(field, vec![Issue::new(ErrorKind::Missing, &input)]);
    }

    fn accept<T>(&mut self, field: &str, coerced: Coerced<T>) -> Option<T> {
        self.slot(field);
        match coerced {
            Ok(value) => Some(value),
            Err(issues) => {
                self.record(field, issues);
                None
            }
        }
    }

    /// 必填欄位：缺少時記錄 `missing`
    pub fn required<T>(
        &mut self,
        field: &str,
        coerce: impl FnOnce(&Value) -> Coerced<T>,
    ) -> Option<T> {
        match self.raw(field) {
            Some(value) => {
                let coerced = coerce(value);
                self.accept(field, coerced)
            }
            None => {
                self.missing(field);
                None
            }
        }
    }

    /// 選填欄位：缺少或 `null` 都視為沒有值
    pub fn optional<T>(
        &mut self,
        field: &str,
        coerce: impl FnOnce(&Value) -> Coerced<T>,
    ) -> Option<Option<T>> {
        match self.raw(field) {
            None | Some(Value::Null) => {
                self.slot(field);
                Some(None)
            }
            Some(value) => {
                let coerced = coerce(value);
                self.accept(field, coerced).map(Some)
            }
        }
    }

    /// 以 `validator` 規則集檢查轉換成功的欄位
    ///
    /// 違規記在對應欄位的位置上，輸入值取原始資料；全部通過才回傳 `true`。
    pub fn enforce(&mut self, rules: &impl Validate) -> bool {
        let Err(violations) = rules.validate() else {
            return true;
        };

        for (field, errors) in violations.field_errors() {
            let input = self.raw(&field).cloned().unwrap_or(Value::Null);
            let issues = errors
                .iter()
                .map(|violation| Issue::new(violation_kind(violation), &input))
                .collect();
            self.record(&field, issues);
        }
        false
    }

    /// 巢狀紀錄：子欄位錯誤的位置加上本欄位的鍵
    pub fn nested<M: Model>(&mut self, field: &str) -> Option<M> {
        let slot = self.slot(field);
        let key = self.aliases.external(field);

        match self.raw(field) {
            Some(Value::Object(child_object)) => {
                let mut prefix = self.prefix.clone();
                prefix.push(LocItem::from(key));

                let mut child = FieldReader::with_prefix(child_object, M::ALIASES, prefix);
                let model = M::validate_fields(&mut child);
                self.errors
                    .extend(child.into_errors().into_iter().map(|error| (slot, error)));
                model
            }
            Some(other) => {
                let kind = ErrorKind::ModelType {
                    title: M::TITLE.to_string(),
                };
                self.record(field, vec![Issue::new(kind, other)]);
                None
            }
            None => {
                self.missing(field);
                None
            }
        }
    }

    pub fn into_errors(mut self) -> Vec<FieldError> {
        self.errors.sort_by_key(|(slot, _)| *slot);
        self.errors.into_iter().map(|(_, error)| error).collect()
    }
}
