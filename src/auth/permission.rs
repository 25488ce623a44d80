use serde::{Deserialize, Serialize};

/// Staff role. Closed set; an unknown role string fails to deserialize,
/// which fails closed at the token boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

/// Coarse permission buckets applied uniformly across all entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Read,
    Write,
    ManageUsers,
    ManageSettings,
}

impl Role {
    /// Total role/capability lookup. Every role has an explicit case so a
    /// new role cannot silently fall through to a default.
    pub fn allows(self, capability: Capability) -> bool {
        match (self, capability) {
            (Role::Admin, _) => true,
            (Role::Editor, Capability::Read | Capability::Write) => true,
            (Role::Editor, _) => false,
            (Role::Viewer, Capability::Read) => true,
            (Role::Viewer, _) => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "admin" => Some(Role::Admin),
            "editor" => Some(Role::Editor),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }
}

impl Capability {
    /// Snake-case label used in forbidden-error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Read => "read",
            Capability::Write => "write",
            Capability::ManageUsers => "manage_users",
            Capability::ManageSettings => "manage_settings",
        }
    }
}
