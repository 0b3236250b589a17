//! Localised message catalogue.
//!
//! Every human-readable string the service emits (envelope messages, error
//! messages and validation messages) is looked up here so the configured
//! [`Locale`] applies uniformly. Korean is the default locale.

use std::fmt;
use std::str::FromStr;

use super::validation::{Field, ViolationKind};

/// Supported response languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Korean.
    #[default]
    Ko,
    /// English.
    En,
}

/// Raised when a configured locale tag is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{tag}'; expected one of: ko, en")]
pub struct UnsupportedLocale {
    /// The tag as supplied.
    pub tag: String,
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Accepts bare language codes and region-qualified tags such as `en-GB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            _ => Err(UnsupportedLocale { tag: s.to_owned() }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ko => "ko",
            Self::En => "en",
        })
    }
}

/// Keys for fixed catalogue messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Create succeeded.
    ProductCreated,
    /// List succeeded.
    ProductsListed,
    /// Get by id succeeded.
    ProductFetched,
    /// Update succeeded.
    ProductUpdated,
    /// Delete succeeded.
    ProductDeleted,
    /// No product for the identifier.
    ProductNotFound,
    /// A product with the same name already exists.
    DuplicateName,
    /// Password did not match the stored one.
    PasswordMismatch,
    /// Password missing from a delete request.
    PasswordRequired,
    /// The request body could not be parsed as JSON.
    MalformedBody,
    /// The product store could not be reached.
    StoreUnavailable,
    /// Generic failure shown in place of internal details.
    InternalError,
}

impl Locale {
    /// Text for a fixed catalogue message.
    ///
    /// # Examples
    /// ```
    /// use product_service::domain::{Locale, Message};
    ///
    /// assert_eq!(Locale::En.text(Message::ProductNotFound), "Product does not exist.");
    /// ```
    #[must_use]
    pub fn text(self, message: Message) -> &'static str {
        match self {
            Self::Ko => korean(message),
            Self::En => english(message),
        }
    }

    /// Display label for a known request field.
    #[must_use]
    pub fn field_label(self, field: Field) -> &'static str {
        match (self, field) {
            (Self::Ko, Field::Name) => "상품명",
            (Self::Ko, Field::Manager) => "담당자",
            (Self::Ko, Field::Description) => "설명",
            (Self::Ko, Field::Password) => "비밀번호",
            (Self::Ko, Field::Status) => "상품 상태",
            (Self::En, Field::Name) => "product name",
            (Self::En, Field::Manager) => "manager",
            (Self::En, Field::Description) => "description",
            (Self::En, Field::Password) => "password",
            (Self::En, Field::Status) => "status",
        }
    }

    /// Message for a single validation violation.
    ///
    /// `field` is the raw key from the request body; known keys are rendered
    /// with their localised label.
    #[must_use]
    pub fn violation(self, field: &str, kind: ViolationKind) -> String {
        let label = field
            .parse::<Field>()
            .map_or(field, |known| self.field_label(known));
        match self {
            Self::Ko => korean_violation(label, kind),
            Self::En => english_violation(label, kind),
        }
    }
}

fn korean(message: Message) -> &'static str {
    match message {
        Message::ProductCreated => "상품 등록에 성공하였습니다.",
        Message::ProductsListed => "상품 목록 조회에 성공했습니다.",
        Message::ProductFetched => "상품 상세 조회에 성공했습니다.",
        Message::ProductUpdated => "상품 수정에 성공했습니다.",
        Message::ProductDeleted => "상품 삭제에 성공했습니다.",
        Message::ProductNotFound => "상품이 존재하지 않습니다.",
        Message::DuplicateName => "이미 등록된 상품입니다.",
        Message::PasswordMismatch => "비밀번호가 일치하지 않습니다.",
        Message::PasswordRequired => "비밀번호를 입력해 주세요.",
        Message::MalformedBody => "요청 본문을 해석할 수 없습니다.",
        Message::StoreUnavailable => "상품 저장소에 연결할 수 없습니다. 잠시 후 다시 시도해 주세요.",
        Message::InternalError => "예상치 못한 에러가 발생했습니다. 관리자에게 문의해 주세요.",
    }
}

fn english(message: Message) -> &'static str {
    match message {
        Message::ProductCreated => "Product created.",
        Message::ProductsListed => "Products listed.",
        Message::ProductFetched => "Product fetched.",
        Message::ProductUpdated => "Product updated.",
        Message::ProductDeleted => "Product deleted.",
        Message::ProductNotFound => "Product does not exist.",
        Message::DuplicateName => "A product with this name is already registered.",
        Message::PasswordMismatch => "Password does not match.",
        Message::PasswordRequired => "Please enter the password.",
        Message::MalformedBody => "Request body could not be parsed.",
        Message::StoreUnavailable => "The product store is unavailable. Please try again later.",
        Message::InternalError => "An unexpected error occurred. Please contact the administrator.",
    }
}

/// Pick the particle form that agrees with the label's final syllable.
///
/// Hangul syllables ending in a consonant (batchim) take the first form.
/// Labels that do not end in Hangul get both forms, e.g. `을(를)`.
fn particle(label: &str, forms: (&'static str, &'static str)) -> String {
    const HANGUL_BASE: u32 = 0xAC00;
    const HANGUL_LAST: u32 = 0xD7A3;
    const FINALS: u32 = 28;

    let (closed, open) = forms;
    match label.chars().last().map(u32::from) {
        Some(code) if (HANGUL_BASE..=HANGUL_LAST).contains(&code) => {
            if (code - HANGUL_BASE) % FINALS == 0 {
                format!("{label}{open}")
            } else {
                format!("{label}{closed}")
            }
        }
        _ => format!("{label}{closed}({open})"),
    }
}

fn korean_violation(label: &str, kind: ViolationKind) -> String {
    let object = particle(label, ("을", "를"));
    let topic = particle(label, ("은", "는"));
    match kind {
        ViolationKind::Required => format!("{object} 입력해 주세요."),
        ViolationKind::NotString => format!("{topic} 문자열이어야 합니다."),
        ViolationKind::Empty => format!("{topic} 비워 둘 수 없습니다."),
        ViolationKind::ContainsNul => format!("{topic} NUL 문자를 포함할 수 없습니다."),
        ViolationKind::InvalidStatus => {
            "상품 상태는 [FOR_SALE, SOLD_OUT] 중 하나여야 합니다.".to_owned()
        }
        ViolationKind::UnknownField => format!("{topic} 허용되지 않는 항목입니다."),
        ViolationKind::NotAnObject => "요청 본문은 JSON 객체여야 합니다.".to_owned(),
    }
}

fn english_violation(label: &str, kind: ViolationKind) -> String {
    match kind {
        ViolationKind::Required => format!("Please enter the {label}."),
        ViolationKind::NotString => format!("The {label} must be a string."),
        ViolationKind::Empty => format!("The {label} must not be empty."),
        ViolationKind::ContainsNul => format!("The {label} must not contain NUL characters."),
        ViolationKind::InvalidStatus => {
            "Status must be one of [FOR_SALE, SOLD_OUT].".to_owned()
        }
        ViolationKind::UnknownField => format!("\"{label}\" is not allowed."),
        ViolationKind::NotAnObject => "Request body must be a JSON object.".to_owned(),
    }
}
