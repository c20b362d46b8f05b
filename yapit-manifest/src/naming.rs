//! Naming policies for a generation run.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which side of an endpoint a declaration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Request,
    Response,
}

/// How role suffixes are spelled in type names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSuffix {
    /// `Req` / `Res`
    #[default]
    Short,
    /// `Request` / `Response`
    Long,
}

impl RoleSuffix {
    /// The suffix appended to type names for `role`.
    pub fn suffix(&self, role: Role) -> &'static str {
        match (self, role) {
            (RoleSuffix::Short, Role::Request) => "Req",
            (RoleSuffix::Short, Role::Response) => "Res",
            (RoleSuffix::Long, Role::Request) => "Request",
            (RoleSuffix::Long, Role::Response) => "Response",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleSuffix::Short => "short",
            RoleSuffix::Long => "long",
        }
    }
}

impl fmt::Display for RoleSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleSuffix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" | "req" => Ok(RoleSuffix::Short),
            "long" | "request" => Ok(RoleSuffix::Long),
            _ => Err(format!(
                "unknown role suffix '{}', expected 'short' or 'long'",
                s
            )),
        }
    }
}

/// What happens when a synthesized name is already taken in the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Append the smallest free integer suffix, starting at 2.
    #[default]
    Suffix,
    /// Abort the run.
    Reject,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Suffix => "suffix",
            CollisionPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "suffix" => Ok(CollisionPolicy::Suffix),
            "reject" => Ok(CollisionPolicy::Reject),
            _ => Err(format!(
                "unknown collision policy '{}', expected 'suffix' or 'reject'",
                s
            )),
        }
    }
}

/// Naming configuration for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub role_suffix: RoleSuffix,
    pub collisions: CollisionPolicy,
}
