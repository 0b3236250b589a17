//! Declarative request validation for product payloads.
//!
//! Rules run against the raw JSON body rather than a typed struct so a single
//! pass reports every violated constraint: missing keys, wrong types, empty
//! strings, bad status values and keys the rule set does not know. Messages
//! are rendered in the caller's [`Locale`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value, json};

use super::{Error, Locale, ProductDraft, ProductStatus};

/// Fields known to the product rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Manager,
    Description,
    Password,
    Status,
}

impl Field {
    /// JSON key for the field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Manager => "manager",
            Self::Description => "description",
            Self::Password => "password",
            Self::Status => "status",
        }
    }
}

/// Raised when a key is not one of the known [`Field`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAField;

impl FromStr for Field {
    type Err = NotAField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "manager" => Ok(Self::Manager),
            "description" => Ok(Self::Description),
            "password" => Ok(Self::Password),
            "status" => Ok(Self::Status),
            _ => Err(NotAField),
        }
    }
}

/// Field order of the full-record rules.
const PRODUCT_FIELDS: [Field; 5] = [
    Field::Name,
    Field::Manager,
    Field::Description,
    Field::Password,
    Field::Status,
];

const PASSWORD_FIELDS: [Field; 1] = [Field::Password];

/// Kind of constraint a value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Key absent or `null`.
    Required,
    /// Present but not a JSON string.
    NotString,
    /// A string with no characters.
    Empty,
    /// A string holding a NUL character, which the store cannot keep.
    ContainsNul,
    /// Status outside `FOR_SALE` / `SOLD_OUT`.
    InvalidStatus,
    /// Key not declared by the rule set.
    UnknownField,
    /// The body itself is not a JSON object.
    NotAnObject,
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    #[serde(rename = "code")]
    pub kind: ViolationKind,
    pub message: String,
}

/// Every violation found in one validation pass, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// The collected violations.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields, in rule order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::invalid_request(err.summary()).with_details(json!({
            "code": "validation_failed",
            "violations": err.violations,
        }))
    }
}

/// Password extracted by the password-only rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordInput(pub String);

struct Validator<'a> {
    body: &'a Map<String, Value>,
    locale: Locale,
    violations: Vec<FieldViolation>,
}

impl<'a> Validator<'a> {
    fn new(body: &'a Value, locale: Locale) -> Result<Self, ValidationError> {
        match body {
            Value::Object(body) => Ok(Self {
                body,
                locale,
                violations: Vec::new(),
            }),
            _ => Err(ValidationError {
                violations: vec![FieldViolation {
                    field: "body".to_owned(),
                    kind: ViolationKind::NotAnObject,
                    message: locale.violation("body", ViolationKind::NotAnObject),
                }],
            }),
        }
    }

    fn record(&mut self, field: &str, kind: ViolationKind) {
        self.violations.push(FieldViolation {
            field: field.to_owned(),
            kind,
            message: self.locale.violation(field, kind),
        });
    }

    fn required_text(&mut self, field: Field) -> Option<String> {
        let body = self.body;
        match body.get(field.key()) {
            None | Some(Value::Null) => {
                self.record(field.key(), ViolationKind::Required);
                None
            }
            Some(Value::String(text)) if text.is_empty() => {
                self.record(field.key(), ViolationKind::Empty);
                None
            }
            Some(Value::String(text)) if text.contains('\0') => {
                self.record(field.key(), ViolationKind::ContainsNul);
                None
            }
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                self.record(field.key(), ViolationKind::NotString);
                None
            }
        }
    }

    /// `Ok(None)` when absent, `Err(())` when present but invalid.
    fn optional_status(&mut self) -> Result<Option<ProductStatus>, ()> {
        let key = Field::Status.key();
        let body = self.body;
        match body.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => raw.parse().map(Some).map_err(|_| {
                self.record(key, ViolationKind::InvalidStatus);
            }),
            Some(_) => {
                self.record(key, ViolationKind::InvalidStatus);
                Err(())
            }
        }
    }

    fn reject_unknown(&mut self, allowed: &[Field]) {
        let unknown: Vec<String> = self
            .body
            .keys()
            .filter(|key| {
                key.parse::<Field>()
                    .map_or(true, |field| !allowed.contains(&field))
            })
            .cloned()
            .collect();
        for key in unknown {
            self.record(&key, ViolationKind::UnknownField);
        }
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.violations.is_empty() => Ok(value),
            _ => Err(ValidationError {
                violations: self.violations,
            }),
        }
    }
}

/// Apply the full-record rules used by create and update.
///
/// # Examples
/// ```
/// use product_service::domain::{validate_product, Locale};
/// use serde_json::json;
///
/// let err = validate_product(&json!({ "name": "Lamp" }), Locale::En).unwrap_err();
/// assert_eq!(err.fields(), ["manager", "description", "password"]);
/// ```
pub fn validate_product(body: &Value, locale: Locale) -> Result<ProductDraft, ValidationError> {
    let mut validator = Validator::new(body, locale)?;
    let name = validator.required_text(Field::Name);
    let manager = validator.required_text(Field::Manager);
    let description = validator.required_text(Field::Description);
    let password = validator.required_text(Field::Password);
    let status = validator.optional_status();
    validator.reject_unknown(&PRODUCT_FIELDS);

    let draft = match (name, manager, description, password, status) {
        (Some(name), Some(manager), Some(description), Some(password), Ok(status)) => {
            Some(ProductDraft {
                name,
                description,
                manager,
                password,
                status,
            })
        }
        _ => None,
    };
    validator.finish(draft)
}

/// Apply the password-only rules used by delete.
pub fn validate_password(body: &Value, locale: Locale) -> Result<PasswordInput, ValidationError> {
    let mut validator = Validator::new(body, locale)?;
    let password = validator.required_text(Field::Password);
    validator.reject_unknown(&PASSWORD_FIELDS);
    validator.finish(password.map(PasswordInput))
}

#[cfg(test)]
mod tests {
    //! Rule-set behaviour.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn full_body() -> Value {
        json!({
            "name": "Lamp",
            "manager": "Jin",
            "description": "Desk lamp",
            "password": "secret",
        })
    }

    #[rstest]
    fn accepts_a_complete_body_without_status() {
        let draft = validate_product(&full_body(), Locale::Ko).expect("valid body");
        assert_eq!(draft.name, "Lamp");
        assert_eq!(draft.password, "secret");
        assert_eq!(draft.status, None);
    }

    #[rstest]
    #[case("FOR_SALE", ProductStatus::ForSale)]
    #[case("SOLD_OUT", ProductStatus::SoldOut)]
    fn accepts_enumerated_status(#[case] raw: &str, #[case] expected: ProductStatus) {
        let mut body = full_body();
        body["status"] = json!(raw);
        let draft = validate_product(&body, Locale::Ko).expect("valid body");
        assert_eq!(draft.status, Some(expected));
    }

    #[rstest]
    fn null_status_counts_as_absent() {
        let mut body = full_body();
        body["status"] = Value::Null;
        let draft = validate_product(&body, Locale::Ko).expect("valid body");
        assert_eq!(draft.status, None);
    }

    #[rstest]
    fn reports_every_missing_field_in_one_pass() {
        let err = validate_product(&json!({}), Locale::Ko).expect_err("empty body");
        assert_eq!(err.fields(), ["name", "manager", "description", "password"]);
        assert!(
            err.violations()
                .iter()
                .all(|v| v.kind == ViolationKind::Required)
        );
        assert_eq!(
            err.to_string(),
            "상품명을 입력해 주세요. 담당자를 입력해 주세요. 설명을 입력해 주세요. 비밀번호를 입력해 주세요."
        );
    }

    #[rstest]
    fn mixes_violation_kinds_in_rule_order() {
        let body = json!({
            "name": "",
            "manager": 7,
            "description": "Desk lamp",
            "status": "GONE",
            "colour": "red",
        });
        let err = validate_product(&body, Locale::En).expect_err("invalid body");
        let kinds: Vec<(&str, ViolationKind)> = err
            .violations()
            .iter()
            .map(|v| (v.field.as_str(), v.kind))
            .collect();
        assert_eq!(
            kinds,
            [
                ("name", ViolationKind::Empty),
                ("manager", ViolationKind::NotString),
                ("password", ViolationKind::Required),
                ("status", ViolationKind::InvalidStatus),
                ("colour", ViolationKind::UnknownField),
            ]
        );
    }

    #[rstest]
    #[case(json!([]))]
    #[case(json!("name"))]
    #[case(Value::Null)]
    fn rejects_non_object_bodies(#[case] body: Value) {
        let err = validate_product(&body, Locale::En).expect_err("not an object");
        assert_eq!(err.fields(), ["body"]);
        assert_eq!(
            err.violations().first().map(|v| v.kind),
            Some(ViolationKind::NotAnObject)
        );
    }

    #[rstest]
    fn password_rules_accept_only_password() {
        let input = validate_password(&json!({ "password": "secret" }), Locale::Ko)
            .expect("valid body");
        assert_eq!(input, PasswordInput("secret".to_owned()));

        let err = validate_password(&json!({ "password": "secret", "name": "Lamp" }), Locale::Ko)
            .expect_err("extra key");
        assert_eq!(err.fields(), ["name"]);
    }

    #[rstest]
    #[case(json!({}), ViolationKind::Required)]
    #[case(json!({ "password": "" }), ViolationKind::Empty)]
    #[case(json!({ "password": 1234 }), ViolationKind::NotString)]
    #[case(json!({ "password": "se\u{0}cret" }), ViolationKind::ContainsNul)]
    fn password_rules_reject_bad_passwords(#[case] body: Value, #[case] kind: ViolationKind) {
        let err = validate_password(&body, Locale::Ko).expect_err("bad password");
        assert_eq!(err.violations().first().map(|v| v.kind), Some(kind));
    }

    #[rstest]
    fn nul_characters_are_rejected_in_every_text_field() {
        let body = json!({
            "name": "La\u{0}mp",
            "manager": "M",
            "description": "\u{0}",
            "password": "p",
        });
        let err = validate_product(&body, Locale::En).expect_err("NUL in text");
        assert_eq!(err.fields(), ["name", "description"]);
        assert!(
            err.violations()
                .iter()
                .all(|v| v.kind == ViolationKind::ContainsNul)
        );
        assert_eq!(
            err.violations()[0].message,
            "The name must not contain NUL characters."
        );
    }

    #[rstest]
    fn converts_to_invalid_request_with_violation_details() {
        let err: Error = validate_product(&json!({ "name": "Lamp" }), Locale::En)
            .expect_err("missing fields")
            .into();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["code"], json!("validation_failed"));
        assert_eq!(
            details["violations"][0],
            json!({ "field": "manager", "code": "required", "message": "Please enter the manager." })
        );
    }
}
