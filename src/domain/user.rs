//! Domain entity representing a user.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::Nullable;

/// Identity and contact attributes of a user.
///
/// Every field is optional and independently settable; nothing is
/// validated. Construct via [`User::new`], [`User::default`] plus field
/// writes, or [`User::builder`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    /// Role marker such as "ADMIN" or "MEMBER"; free-form here.
    pub user_type: Option<String>,
}

impl User {
    /// Build a fully populated user. Arguments follow field declaration
    /// order.
    pub fn new(
        user_id: Option<String>,
        user_name: Option<String>,
        email: Option<String>,
        contact_number: Option<String>,
        user_type: Option<String>,
    ) -> Self {
        Self {
            user_id,
            user_name,
            email,
            contact_number,
            user_type,
        }
    }

    /// Start a builder with every field absent.
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }
}

impl fmt::Display for User {
    /// Renders `User(userId=..., userName=..., email=..., contactNumber=...,
    /// userType=...)` with `null` for absent fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(userId={}, userName={}, email={}, contactNumber={}, userType={})",
            Nullable(&self.user_id),
            Nullable(&self.user_name),
            Nullable(&self.email),
            Nullable(&self.contact_number),
            Nullable(&self.user_type),
        )
    }
}

/// Accumulates field values for a [`User`]. Each setter takes the builder
/// by value so calls chain; [`UserBuilder::build`] snapshots the current
/// values without consuming the builder, so one builder can produce several
/// independent instances.
#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    user_id: Option<String>,
    user_name: Option<String>,
    email: Option<String>,
    contact_number: Option<String>,
    user_type: Option<String>,
}

impl UserBuilder {
    pub fn user_id(mut self, value: impl Into<String>) -> Self {
        self.user_id = Some(value.into());
        self
    }

    pub fn user_name(mut self, value: impl Into<String>) -> Self {
        self.user_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn contact_number(mut self, value: impl Into<String>) -> Self {
        self.contact_number = Some(value.into());
        self
    }

    pub fn user_type(mut self, value: impl Into<String>) -> Self {
        self.user_type = Some(value.into());
        self
    }

    /// Produce a user from the values accumulated so far. Fields never set
    /// stay absent.
    pub fn build(&self) -> User {
        User {
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            user_type: self.user_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_args_construction_reads_back_arguments() {
        let user = User::new(
            Some("u1".to_string()),
            Some("Alice".to_string()),
            Some("alice@example.com".to_string()),
            Some("010-1234-5678".to_string()),
            Some("ADMIN".to_string()),
        );
        assert_eq!(user.user_id.as_deref(), Some("u1"));
        assert_eq!(user.user_name.as_deref(), Some("Alice"));
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
        assert_eq!(user.contact_number.as_deref(), Some("010-1234-5678"));
        assert_eq!(user.user_type.as_deref(), Some("ADMIN"));
    }

    #[test]
    fn test_default_construction_leaves_every_field_absent() {
        let user = User::default();
        assert_eq!(user.user_id, None);
        assert_eq!(user.user_name, None);
        assert_eq!(user.email, None);
        assert_eq!(user.contact_number, None);
        assert_eq!(user.user_type, None);
    }

    #[test]
    fn test_field_writes_round_trip() {
        let mut user = User::default();
        user.email = Some("bob@example.com".to_string());
        assert_eq!(user.email.as_deref(), Some("bob@example.com"));

        // Overwrite wins; no history kept.
        user.email = Some("carol@example.com".to_string());
        assert_eq!(user.email.as_deref(), Some("carol@example.com"));
    }

    #[test]
    fn test_builder_matches_default_plus_field_writes() {
        let built = User::builder().user_id("u1").user_type("ADMIN").build();

        let mut written = User::default();
        // Setter order does not matter across distinct fields.
        written.user_type = Some("ADMIN".to_string());
        written.user_id = Some("u1".to_string());

        assert_eq!(built, written);
    }

    #[test]
    fn test_builder_reuse_yields_independent_instances() {
        let builder = User::builder().user_name("Alice");
        let first = builder.build();
        let mut second = builder.build();
        second.user_name = Some("Mallory".to_string());

        assert_eq!(first.user_name.as_deref(), Some("Alice"));
        assert_eq!(second.user_name.as_deref(), Some("Mallory"));
    }

    #[test]
    fn test_display_lists_fields_in_declaration_order() {
        let user = User::builder().user_id("u1").user_name("Alice").user_type("ADMIN").build();
        assert_eq!(
            user.to_string(),
            "User(userId=u1, userName=Alice, email=null, contactNumber=null, userType=ADMIN)"
        );
    }

    #[test]
    fn test_equal_values_produce_identical_display_output() {
        let a = User::builder().user_id("u1").email("a@b.c").build();
        let b = User::new(Some("u1".to_string()), None, Some("a@b.c".to_string()), None, None);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case_keys() {
        let user = User::builder().user_id("u1").contact_number("010").build();
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"userId\":\"u1\""));
        assert!(json.contains("\"contactNumber\":\"010\""));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
