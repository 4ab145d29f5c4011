//! Post visibility scope.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who can see a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Visible to every member of the team.
    #[default]
    Everyone,
    /// Visible to the members of the listed groups.
    Group,
    /// Visible to the author only.
    Private,
}

impl Scope {
    /// Wire representation of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Everyone => "everyone",
            Scope::Group => "group",
            Scope::Private => "private",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown scope name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScopeError(pub String);

impl fmt::Display for ParseScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scope: {}", self.0)
    }
}

impl std::error::Error for ParseScopeError {}

impl FromStr for Scope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "everyone" => Ok(Scope::Everyone),
            "group" => Ok(Scope::Group),
            "private" => Ok(Scope::Private),
            other => Err(ParseScopeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_wire_format() {
        assert_eq!(serde_json::to_string(&Scope::Group).unwrap(), r#""group""#);
        let scope: Scope = serde_json::from_str(r#""private""#).unwrap();
        assert_eq!(scope, Scope::Private);
        assert!(serde_json::from_str::<Scope>(r#""GROUP""#).is_err());
    }

    #[test]
    fn test_scope_parse_and_display() {
        assert_eq!("everyone".parse::<Scope>().unwrap(), Scope::Everyone);
        assert_eq!(Scope::Private.to_string(), "private");
        let err = "team".parse::<Scope>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scope: team");
    }

    #[test]
    fn test_scope_default_is_everyone() {
        assert_eq!(Scope::default(), Scope::Everyone);
    }
}
