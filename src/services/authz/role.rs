/*
 * Responsibility
 * - Role values stored on profiles
 * - AllowList: the fixed set of roles a route accepts (built once at router construction)
 */
use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            // coordinators are faculty; ownership is checked per event
            "faculty" | "coordinator" => Ok(Role::Faculty),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Roles permitted on a route.
///
/// Order of first appearance is kept, duplicates are dropped. An empty list
/// permits nobody.
#[derive(Debug, Clone)]
pub struct AllowList {
    roles: Arc<[Role]>,
}

impl AllowList {
    pub fn new(roles: &[Role]) -> Self {
        let mut unique: Vec<Role> = Vec::with_capacity(roles.len());
        for role in roles {
            if !unique.contains(role) {
                unique.push(*role);
            }
        }
        Self {
            roles: unique.into(),
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}
