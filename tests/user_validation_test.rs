use anyhow::Result;
use serde_json::{json, Value};
use user_intake::utils::error::ErrorKind;
use user_intake::{Model, User};

fn sample_payload() -> Value {
    json!({
        "fullName": "Sachin Kharat",
        "email": "sachin@example.com",
        "age": "23",
        "phone": 9555025078_i64,
        "registered_at": "2024-12-01",
        "skills": ["python", "selenium", "fastapi"],
        "address": {
            "street": "Palm Avenue",
            "city": "Mumbai",
            "pincode": "400001"
        }
    })
}

fn with(field: &str, value: Value) -> Value {
    let mut payload = sample_payload();
    payload[field] = value;
    payload
}

fn validate(payload: &Value) -> std::result::Result<User, user_intake::ValidationError> {
    User::model_validate(payload)
}

/// 範例資料可以通過驗證，並以別名輸出
#[test]
fn test_sample_payload_validates_and_dumps_by_alias() -> Result<()> {
    let user = validate(&sample_payload())?;

    assert_eq!(user.full_name(), "Sachin Kharat");
    assert_eq!(user.age(), 23);
    assert_eq!(user.phone(), Some(9555025078));
    assert_eq!(user.registered_at().to_string(), "2024-12-01");
    assert_eq!(user.skills(), ["python", "selenium", "fastapi"]);
    assert_eq!(user.address().pincode(), 400001);

    let dumped = user.model_dump(true)?;
    assert_eq!(
        dumped,
        json!({
            "first_name": null,
            "last_name": null,
            "email": "sachin@example.com",
            "phone": 9555025078_i64,
            "age": 23,
            "registered_at": "2024-12-01",
            "fullName": "Sachin Kharat",
            "skills": ["python", "selenium", "fastapi"],
            "address": {"street": "Palm Avenue", "city": "Mumbai", "pincode": 400001}
        })
    );

    let keys: Vec<&str> = dumped
        .as_object()
        .map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(
        keys,
        vec![
            "first_name",
            "last_name",
            "email",
            "phone",
            "age",
            "registered_at",
            "fullName",
            "skills",
            "address"
        ]
    );

    let rendered = serde_json::to_string(&dumped)?;
    assert!(rendered.contains(r#""fullName":"Sachin Kharat""#));
    assert!(rendered.contains(r#""age":23"#));
    assert!(rendered.contains(
        r#""address":{"street":"Palm Avenue","city":"Mumbai","pincode":400001}"#
    ));
    assert!(!rendered.contains("full_name"));

    Ok(())
}

#[test]
fn test_dump_by_name_uses_internal_field_names() -> Result<()> {
    let user = validate(&sample_payload())?;
    let dumped = user.model_dump(false)?;

    assert_eq!(dumped["full_name"], json!("Sachin Kharat"));
    assert!(dumped.get("fullName").is_none());
    Ok(())
}

#[test]
fn test_age_from_text_or_number_is_identical() -> Result<()> {
    for raw_age in [
        json!("23"),
        json!(23),
        json!(" 23 "),
        json!(23.0),
        json!("23.0"),
    ] {
        let user = validate(&with("age", raw_age.clone()))?;
        assert_eq!(user.age(), 23, "age input {}", raw_age);
    }
    Ok(())
}

#[test]
fn test_underage_is_rejected() {
    for raw_age in [json!("15"), json!(17), json!("17")] {
        let err = validate(&with("age", raw_age.clone())).unwrap_err();

        assert_eq!(err.error_count(), 1, "age input {}", raw_age);
        let age_error = err.find("age").expect("age error");
        assert_eq!(age_error.code, "greater_than_equal");
        assert_eq!(age_error.message, "Value error, Age must be 18 or above");
        assert_eq!(age_error.input, raw_age);
    }
}

#[test]
fn test_boundary_age_is_accepted() -> Result<()> {
    let user = validate(&with("age", json!(18)))?;
    assert_eq!(user.age(), 18);
    Ok(())
}

#[test]
fn test_non_numeric_age_fails_coercion_not_domain_rule() {
    let err = validate(&with("age", json!("twenty"))).unwrap_err();

    assert_eq!(err.error_count(), 1);
    assert_eq!(err.find("age").unwrap().kind, ErrorKind::IntParsing);
}

#[test]
fn test_empty_skills_are_rejected() {
    let err = validate(&with("skills", json!([]))).unwrap_err();

    assert_eq!(err.error_count(), 1);
    let skills_error = err.find("skills").expect("skills error");
    assert_eq!(skills_error.code, "too_short");
    assert_eq!(skills_error.message, "Value error, At least one skill required");
}

#[test]
fn test_non_text_skill_reports_index() {
    let err = validate(&with("skills", json!(["python", 42]))).unwrap_err();

    assert_eq!(err.error_count(), 1);
    assert_eq!(err.find("skills.1").unwrap().kind, ErrorKind::StringType);
}

#[test]
fn test_non_iso_date_is_rejected() {
    for raw_date in ["Dec 1 2024", "01-12-2024", "2024/12/01", "2024-13-01"] {
        let err = validate(&with("registered_at", json!(raw_date))).unwrap_err();
        assert_eq!(
            err.find("registered_at").map(|e| e.code),
            Some("date_from_iso"),
            "date input {}",
            raw_date
        );
    }
}

#[test]
fn test_phone_is_optional() -> Result<()> {
    let user = validate(&with("phone", Value::Null))?;
    assert_eq!(user.phone(), None);
    assert_eq!(user.model_dump(true)?["phone"], Value::Null);

    let mut payload = sample_payload();
    if let Some(map) = payload.as_object_mut() {
        map.remove("phone");
    }
    assert_eq!(validate(&payload)?.phone(), None);

    let user = validate(&with("phone", json!("9555025078")))?;
    assert_eq!(user.phone(), Some(9555025078));
    Ok(())
}

#[test]
fn test_nested_address_failure_carries_path() {
    let err = validate(&with(
        "address",
        json!({"street": "Palm Avenue", "pincode": "four hundred"}),
    ))
    .unwrap_err();

    assert_eq!(err.error_count(), 2);
    assert_eq!(err.find("address.city").unwrap().kind, ErrorKind::Missing);
    assert_eq!(err.find("address.pincode").unwrap().kind, ErrorKind::IntParsing);

    let err = validate(&with("address", json!("Palm Avenue, Mumbai"))).unwrap_err();
    assert_eq!(err.find("address").unwrap().code, "model_type");
}

#[test]
fn test_internal_name_is_not_accepted_for_aliased_field() {
    let mut payload = sample_payload();
    if let Some(map) = payload.as_object_mut() {
        let name = map.remove("fullName").unwrap_or(Value::Null);
        map.insert("full_name".to_string(), name);
    }

    let err = validate(&payload).unwrap_err();
    assert_eq!(err.error_count(), 1);
    assert_eq!(err.find("fullName").unwrap().kind, ErrorKind::Missing);
}

#[test]
fn test_every_violation_is_reported() {
    let payload = json!({
        "email": 12345,
        "age": "15",
        "registered_at": "Dec 1 2024",
        "skills": [],
        "address": {"street": "Palm Avenue", "city": "Mumbai", "pincode": "x"}
    });

    let err = validate(&payload).unwrap_err();
    let locations: Vec<String> = err.errors().iter().map(|e| e.location()).collect();

    assert_eq!(
        locations,
        vec![
            "email",
            "age",
            "registered_at",
            "fullName",
            "skills",
            "address.pincode"
        ]
    );
    assert!(err.to_string().starts_with("6 validation errors for User"));
}

#[test]
fn test_non_object_payload_is_rejected() {
    let err = validate(&json!(["not", "a", "mapping"])).unwrap_err();

    assert_eq!(err.error_count(), 1);
    assert_eq!(err.errors()[0].code, "model_type");
    assert!(err.errors()[0].loc.is_empty());
}

#[test]
fn test_dump_round_trip_restores_user() -> Result<()> {
    let user = validate(&sample_payload())?;

    for by_alias in [true, false] {
        let dumped = user.model_dump(by_alias)?;
        let restored = User::from_dump(dumped, by_alias)?;
        assert_eq!(restored, user);
    }

    let revalidated = validate(&user.model_dump(true)?)?;
    assert_eq!(revalidated, user);
    Ok(())
}
