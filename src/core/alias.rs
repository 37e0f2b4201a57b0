use serde_json::{Map, Value};

/// 內部欄位名稱與外部（傳輸格式）名稱的雙向對照表
///
/// 沒有列在表中的欄位，內外名稱相同。
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldAliases {
    pub const NONE: FieldAliases = FieldAliases { pairs: &[] };

    /// `pairs` 為 `(internal, external)`
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    pub fn external<'a>(&self, internal: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(name, _)| *name == internal)
            .map(|(_, alias)| *alias)
            .unwrap_or(internal)
    }

    pub fn internal<'a>(&self, external: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(_, alias)| *alias == external)
            .map(|(name, _)| *name)
            .unwrap_or(external)
    }

    /// 內部名稱 → 外部名稱，保留鍵的順序
    pub fn to_external_keys(&self, map: Map<String, Value>) -> Map<String, Value> {
        map.into_iter()
            .map(|(key, value)| (self.external(&key).to_string(), value))
            .collect()
    }

    /// 外部名稱 → 內部名稱，保留鍵的順序
    pub fn to_internal_keys(&self, map: Map<String, Value>) -> Map<String, Value> {
        map.into_iter()
            .map(|(key, value)| (self.internal(&key).to_string(), value))
            .collect()
    }
}
