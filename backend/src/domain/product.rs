//! Product records.
//!
//! [`Product`] is the persisted shape, password included. Everything that
//! leaves the service goes through [`ProductView`], which has no password
//! field at all, so a response cannot leak it by accident.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sale state of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Available for purchase.
    #[default]
    ForSale,
    /// No longer available.
    SoldOut,
}

impl ProductStatus {
    /// Wire representation, as stored and serialised.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ForSale => "FOR_SALE",
            Self::SoldOut => "SOLD_OUT",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text is not one of the two status values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownStatus;

    /// Matching is exact; `for_sale` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOR_SALE" => Ok(Self::ForSale),
            "SOLD_OUT" => Ok(Self::SoldOut),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

/// Normalised output of the full-record validation rules.
///
/// All four text fields are guaranteed non-empty. `status` is `None` when the
/// request omitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub manager: String,
    pub password: String,
    pub status: Option<ProductStatus>,
}

/// A persisted product record.
///
/// ## Invariants
/// - `name`, `description`, `manager` and `password` are non-empty.
/// - `created_at <= updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub manager: String,
    pub password: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a new record from a validated draft.
    ///
    /// The identifier is freshly generated and both timestamps are `now`.
    /// New records always start [`ProductStatus::ForSale`]; a status in the
    /// draft is validated upstream but only applies on update.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use product_service::domain::{Product, ProductDraft, ProductStatus};
    ///
    /// let draft = ProductDraft {
    ///     name: "Lamp".into(),
    ///     description: "Desk lamp".into(),
    ///     manager: "Jin".into(),
    ///     password: "secret".into(),
    ///     status: Some(ProductStatus::SoldOut),
    /// };
    /// let product = Product::create(draft, Utc::now());
    /// assert_eq!(product.status, ProductStatus::ForSale);
    /// ```
    #[must_use]
    pub fn create(draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            manager: draft.manager,
            password: draft.password,
            status: ProductStatus::ForSale,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields from `draft`.
    ///
    /// The password is replaced along with the other text fields. An omitted
    /// status leaves the current one in place.
    pub fn replace_with(&mut self, draft: ProductDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.description = draft.description;
        self.manager = draft.manager;
        self.password = draft.password;
        if let Some(status) = draft.status {
            self.status = status;
        }
        self.updated_at = now;
    }

    /// Exact, case-sensitive comparison against the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Project the record for output, dropping the password.
    #[must_use]
    pub fn view(&self) -> ProductView {
        ProductView::from(self.clone())
    }
}

/// Outward projection of a product. Carries no password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub manager: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let Product {
            id,
            name,
            description,
            manager,
            password: _,
            status,
            created_at,
            updated_at,
        } = product;
        Self {
            id,
            name,
            description,
            manager,
            status,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for product records.
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Lamp".to_owned(),
            description: "Desk lamp".to_owned(),
            manager: "Jin".to_owned(),
            password: "secret".to_owned(),
            status: None,
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    #[case("FOR_SALE", ProductStatus::ForSale)]
    #[case("SOLD_OUT", ProductStatus::SoldOut)]
    fn status_parses_wire_values(#[case] raw: &str, #[case] expected: ProductStatus) {
        assert_eq!(raw.parse::<ProductStatus>(), Ok(expected));
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    #[case("for_sale")]
    #[case("SOLD")]
    #[case("")]
    fn status_rejects_other_text(#[case] raw: &str) {
        assert!(raw.parse::<ProductStatus>().is_err());
    }

    #[rstest]
    fn create_defaults_status_and_stamps_both_times(draft: ProductDraft) {
        let product = Product::create(draft, at(9));
        assert_eq!(product.status, ProductStatus::ForSale);
        assert_eq!(product.created_at, at(9));
        assert_eq!(product.updated_at, at(9));
    }

    #[rstest]
    fn create_ignores_a_supplied_status(mut draft: ProductDraft) {
        draft.status = Some(ProductStatus::SoldOut);
        assert_eq!(Product::create(draft, at(9)).status, ProductStatus::ForSale);
    }

    #[rstest]
    fn replace_with_keeps_status_when_omitted(draft: ProductDraft) {
        let mut product = Product::create(draft.clone(), at(9));
        product.status = ProductStatus::SoldOut;
        let replacement = ProductDraft {
            name: "Lamp v2".to_owned(),
            password: "rotated".to_owned(),
            ..draft
        };

        product.replace_with(replacement, at(10));

        assert_eq!(product.name, "Lamp v2");
        assert_eq!(product.password, "rotated");
        assert_eq!(product.status, ProductStatus::SoldOut);
        assert_eq!(product.created_at, at(9));
        assert_eq!(product.updated_at, at(10));
    }

    #[rstest]
    fn password_match_is_exact(draft: ProductDraft) {
        let product = Product::create(draft, at(9));
        assert!(product.password_matches("secret"));
        assert!(!product.password_matches("Secret"));
        assert!(!product.password_matches("secret "));
    }

    #[rstest]
    fn view_serialises_without_password(draft: ProductDraft) {
        let product = Product::create(draft, at(9));
        let value = serde_json::to_value(product.view()).expect("serialise view");
        assert!(value.get("password").is_none());
        assert_eq!(value.get("status").and_then(|v| v.as_str()), Some("FOR_SALE"));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }
}
