use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 通訊地址，只存在於 [`User`] 之內
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub(crate) street: String,
    pub(crate) city: String,
    pub(crate) pincode: i64,
}

impl Address {
    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn pincode(&self) -> i64 {
        self.pincode
    }
}

/// 驗證完成的使用者註冊資料
///
/// 欄位順序即輸出順序。`full_name` 對外的鍵是 `fullName`，
/// 由別名表在讀取與輸出時轉換，這裡一律使用內部名稱。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) email: String,
    pub(crate) phone: Option<i64>,
    pub(crate) age: i64,
    pub(crate) registered_at: NaiveDate,
    pub(crate) full_name: String,
    pub(crate) skills: Vec<String>,
    pub(crate) address: Address,
}

impl User {
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<i64> {
        self.phone
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn registered_at(&self) -> NaiveDate {
        self.registered_at
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}
