//! Authorization roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role tag attached to a user and embedded in session tokens
///
/// Serialized as its snake_case tag. Unknown tags deserialize to
/// [`Role::User`], so a token or record carrying an unexpected value is
/// never granted elevated access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Role {
    Customer,
    ServiceProvider,
    Admin,
    SuperAdmin,
    /// Fallback for records without a role and for unknown tags
    User,
}

impl Role {
    /// Wire tag for this role
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::ServiceProvider => "service_provider",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
            Self::User => "user",
        }
    }

    /// Whether the role may enter the administrator area
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    /// Whether the role may enter the service provider area
    pub fn is_provider(self) -> bool {
        self == Self::ServiceProvider
    }

    /// Whether the role may change other users' roles and status
    pub fn is_super_admin(self) -> bool {
        self == Self::SuperAdmin
    }

    /// Parse a tag, mapping anything unknown to [`Role::User`]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "customer" => Self::Customer,
            "service_provider" => Self::ServiceProvider,
            "admin" => Self::Admin,
            "super_admin" => Self::SuperAdmin,
            _ => Self::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> Self {
        role.as_str()
    }
}
