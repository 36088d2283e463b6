//! User entity representing a registered account on the JobLink platform.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user plays on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// A person looking for work
    #[default]
    Jobseeker,
    /// A company posting jobs
    Employer,
}

/// Identity record keyed by email-or-phone.
///
/// The wire shape matches the public API: `user_type` serializes as `type`
/// and employers carry their company name both as `name` and `company`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name; for employers this is the company name
    pub name: String,

    /// Email address, if the account was registered with one
    pub email: Option<String>,

    /// Phone number, if the account was registered with one
    pub phone: Option<String>,

    /// Role of the user
    #[serde(rename = "type")]
    pub user_type: UserType,

    /// Company name, set for employers only
    pub company: Option<String>,
}

impl User {
    /// Creates a new user.
    ///
    /// For employers the display name is the company name; `company` is kept
    /// only on employer accounts.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        user_type: UserType,
        company: Option<String>,
    ) -> Self {
        let display_name = match user_type {
            UserType::Employer => company.clone().unwrap_or_default(),
            UserType::Jobseeker => name.unwrap_or_default(),
        };
        Self {
            id: Uuid::new_v4(),
            name: display_name,
            email,
            phone,
            user_type,
            company: match user_type {
                UserType::Employer => company,
                UserType::Jobseeker => None,
            },
        }
    }

    /// Whether `identifier` matches this user's email or phone.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.email.as_deref() == Some(identifier) || self.phone.as_deref() == Some(identifier)
    }
}
