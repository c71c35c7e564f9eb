//! Participant roles offered on the sign-in screen
//!
//! Each role carries the static copy and accent palette used by the role
//! picker, plus the canned identity handed out by the mock sign-in.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role a visitor signs in as
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display("Student")]
    Student,
    #[display("Teacher")]
    Teacher,
    #[display("NGO")]
    Ngo,
}

/// Tailwind classes that give each role card its colours
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RolePalette {
    /// Gradient used for the badge and the "Select" strip
    pub gradient: &'static str,
    /// Soft background gradient of the card (light theme)
    pub bg_gradient: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

/// Returned when a string is not one of the known role ids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`, expected one of: student, teacher, ngo")]
pub struct ParseRoleError(pub String);

impl Role {
    /// All roles in the order the picker shows them
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Ngo];

    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Ngo => "ngo",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Ngo => "NGO",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Student => {
                "Learn sustainable practices and join a community of eco-conscious learners"
            }
            Role::Teacher => {
                "Educate and inspire the next generation with environmental knowledge"
            }
            Role::Ngo => "Connect with communities and drive impactful environmental initiatives",
        }
    }

    /// Display name the mock identity provider returns for this role
    pub fn mock_display_name(&self) -> &'static str {
        match self {
            Role::Student => "Alex Student",
            Role::Teacher => "Dr. Green",
            Role::Ngo => "EcoOrg Leader",
        }
    }

    /// Icon file shown on the role badge
    pub fn icon(&self) -> &'static str {
        match self {
            Role::Student => "graduation-cap",
            Role::Teacher => "user",
            Role::Ngo => "heart",
        }
    }

    pub fn palette(&self) -> RolePalette {
        match self {
            Role::Student => RolePalette {
                gradient: "from-blue-500 to-cyan-500",
                bg_gradient: "from-blue-50 to-cyan-50",
                border: "border-blue-200",
                text: "text-blue-700",
                icon: "text-blue-600",
            },
            Role::Teacher => RolePalette {
                gradient: "from-emerald-500 to-green-500",
                bg_gradient: "from-emerald-50 to-green-50",
                border: "border-emerald-200",
                text: "text-emerald-700",
                icon: "text-emerald-600",
            },
            Role::Ngo => RolePalette {
                gradient: "from-purple-500 to-pink-500",
                bg_gradient: "from-purple-50 to-pink-50",
                border: "border-purple-200",
                text: "text-purple-700",
                icon: "text-purple-600",
            },
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "ngo" => Ok(Role::Ngo),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(" NGO ".parse::<Role>(), Ok(Role::Ngo));
        assert_eq!("Teacher".parse::<Role>(), Ok(Role::Teacher));
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert_eq!(err, ParseRoleError("admin".to_string()));
        assert!(err.to_string().contains("admin"));
    }

    #[test]
    fn test_role_display_matches_title() {
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.title());
        }
    }

    #[test]
    fn test_picker_order() {
        assert_eq!(Role::ALL, [Role::Student, Role::Teacher, Role::Ngo]);
    }

    #[test]
    fn test_mock_display_names() {
        assert_eq!(Role::Student.mock_display_name(), "Alex Student");
        assert_eq!(Role::Teacher.mock_display_name(), "Dr. Green");
        assert_eq!(Role::Ngo.mock_display_name(), "EcoOrg Leader");
    }

    #[test]
    fn test_role_serializes_as_lowercase_id() {
        assert_eq!(serde_json::to_string(&Role::Ngo).unwrap(), "\"ngo\"");
        let role: Role = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(role, Role::Teacher);
    }
}
