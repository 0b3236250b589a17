//! Diesel table definitions for the products store.
//!
//! Kept in step with `backend/migrations` by hand.

diesel::table! {
    /// Product records.
    ///
    /// `status` is text limited to `FOR_SALE` / `SOLD_OUT` by a CHECK
    /// constraint. `name` carries no unique index.
    products (id) {
        /// Primary key: UUID v4 assigned by the service.
        id -> Uuid,
        name -> Text,
        description -> Text,
        manager -> Text,
        /// Plaintext record password.
        password -> Text,
        status -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
