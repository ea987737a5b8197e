//! The user's profile: display name, service category, goal and contact.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_COVER: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=1000&auto=format&fit=crop";

/// Service category. Each one implies a default monthly goal.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    #[serde(rename = "Pioneiro Auxiliar")]
    Auxiliary,
    #[serde(rename = "Pioneiro Regular")]
    Regular,
}

impl ServiceType {
    pub fn default_goal(&self) -> f64 {
        match self {
            ServiceType::Auxiliary => 30.0,
            ServiceType::Regular => 50.0,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceType::Auxiliary => write!(f, "Pioneiro Auxiliar"),
            ServiceType::Regular => write!(f, "Pioneiro Regular"),
        }
    }
}

#[derive(Debug, Clone, Copy, Error)]
#[error("the monthly goal must be a positive number of hours, got {0}")]
pub struct InvalidGoal(pub f64);

/// Accepts finite goals above zero. Non-finite values cannot be stored as JSON.
pub fn check_goal(goal: f64) -> Result<f64, InvalidGoal> {
    if goal.is_finite() && goal > 0.0 {
        Ok(goal)
    } else {
        Err(InvalidGoal(goal))
    }
}

/// Command-line parser for `--goal`.
pub fn parse_goal(raw: &str) -> Result<f64, String> {
    let goal: f64 = raw.trim().parse().map_err(|e| format!("'{}' is not a number: {}", raw, e))?;
    check_goal(goal).map_err(|e| e.to_string())
}

/// Which profile image a new upload replaces.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Cover,
    Picture,
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImageSlot::Cover => write!(f, "Cover"),
            ImageSlot::Picture => write!(f, "Profile"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub service_type: ServiceType,
    pub monthly_goal: f64,
    pub whatsapp_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        let service_type = ServiceType::default();
        Self {
            name: String::new(),
            service_type,
            monthly_goal: service_type.default_goal(),
            whatsapp_number: String::new(),
            cover_photo: Some(DEFAULT_COVER.to_string()),
            profile_picture: None,
        }
    }
}

impl UserProfile {
    /// Switches category and resets the goal to the category default.
    pub fn set_service_type(&mut self, service_type: ServiceType) {
        self.service_type = service_type;
        self.monthly_goal = service_type.default_goal();
    }

    pub fn image_mut(&mut self, slot: ImageSlot) -> &mut Option<String> {
        match slot {
            ImageSlot::Cover => &mut self.cover_photo,
            ImageSlot::Picture => &mut self.profile_picture,
        }
    }

    /// Checks the fields that must hold before the profile is written.
    pub fn validate(&self) -> Result<(), InvalidGoal> {
        check_goal(self.monthly_goal).map(|_| ())
    }

    /// Name shown in reports; falls back to a generic role name.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Pioneiro"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let profile = UserProfile::default();
        assert_eq!(profile.service_type, ServiceType::Auxiliary);
        assert_eq!(profile.monthly_goal, 30.0);
        assert_eq!(profile.cover_photo.as_deref(), Some(DEFAULT_COVER));
        assert!(profile.profile_picture.is_none());
        assert_eq!(profile.display_name(), "Pioneiro");
    }

    #[test]
    fn switching_category_resets_goal() {
        let mut profile = UserProfile::default();
        profile.monthly_goal = 42.0;
        profile.set_service_type(ServiceType::Regular);
        assert_eq!(profile.monthly_goal, 50.0);
    }

    #[test]
    fn goal_must_be_finite_and_positive() {
        assert_eq!(check_goal(12.5).unwrap(), 12.5);
        for goal in [0.0, -5.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(check_goal(goal).is_err(), "{} accepted", goal);
        }
    }

    #[test]
    fn goal_parser_rejects_bad_input() {
        assert_eq!(parse_goal(" 40 ").unwrap(), 40.0);
        for raw in ["inf", "NaN", "0", "-3", "muito"] {
            assert!(parse_goal(raw).is_err(), "{} accepted", raw);
        }
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let json = serde_json::to_value(UserProfile::default()).unwrap();
        assert_eq!(json["serviceType"], "Pioneiro Auxiliar");
        assert_eq!(json["monthlyGoal"], 30.0);
        assert_eq!(json["whatsappNumber"], "");
        assert!(json.get("profilePicture").is_none());
    }
}
