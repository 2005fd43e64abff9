//! Page Content
//!
//! Typed model of the itinerary text, parsed from bundled JSON and checked
//! before the page mounts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Common result type for content loading
pub type ContentResult<T> = Result<T, ContentError>;

/// Content loading errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ContentError::Invalid(msg) => write!(f, "Invalid content: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub title: String,
    pub subtitle: String,
    pub hero_image: Option<String>,
    pub nav: Vec<NavLink>,
    pub days: Vec<Day>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    pub practical: Practical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Section id, without the leading `#`
    pub section: String,
    pub label: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub day: u8,
    pub title: String,
    pub date: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub title: String,
    /// Inline markdown
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practical {
    #[serde(default)]
    pub tips: Vec<String>,
    pub checklist: Vec<String>,
}

impl SiteContent {
    /// Parse and validate content JSON
    pub fn from_json(json: &str) -> ContentResult<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> ContentResult<()> {
        if self.days.is_empty() {
            return Err(ContentError::Invalid("itinerary has no days".into()));
        }
        for (i, day) in self.days.iter().enumerate() {
            if usize::from(day.day) != i + 1 {
                return Err(ContentError::Invalid(format!(
                    "day {} found at position {}, days must be numbered from 1 in order",
                    day.day,
                    i + 1
                )));
            }
        }

        let mut seen = HashSet::new();
        for link in &self.nav {
            if link.section.is_empty() {
                return Err(ContentError::Invalid(format!("nav link '{}' has no section", link.label)));
            }
            if !seen.insert(link.section.as_str()) {
                return Err(ContentError::Invalid(format!("duplicate section id '{}'", link.section)));
            }
        }
        Ok(())
    }

    /// Section ids in nav order
    pub fn section_ids(&self) -> Vec<String> {
        self.nav.iter().map(|link| link.section.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> &'static str {
        r##"{
            "title": "Billund",
            "subtitle": "Five days",
            "hero_image": null,
            "nav": [
                { "section": "home", "label": "Home" },
                { "section": "itinerary", "label": "Itinerary" }
            ],
            "days": [
                { "day": 1, "title": "Arrival", "date": "Aug 1", "activities": [
                    { "time": "10:00", "title": "Land", "note": "**BLL** airport" }
                ] },
                { "day": 2, "title": "LEGOLAND", "date": "Aug 2", "activities": [] }
            ],
            "practical": { "checklist": ["Passport", "Charger"] }
        }"##
    }

    #[test]
    fn test_parse_sample() {
        let content = SiteContent::from_json(sample()).unwrap();
        assert_eq!(content.days.len(), 2);
        assert_eq!(content.nav[1].href(), "#itinerary");
        assert_eq!(content.section_ids(), vec!["home", "itinerary"]);
        assert_eq!(content.practical.checklist.len(), 2);
        assert!(content.practical.tips.is_empty());
        assert!(content.attractions.is_empty());
        assert_eq!(content.days[0].activities[0].note.as_deref(), Some("**BLL** airport"));
    }

    #[test]
    fn test_parse_error() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_days_must_be_contiguous() {
        let mut content = SiteContent::from_json(sample()).unwrap();
        content.days[1].day = 3;
        assert!(matches!(content.validate(), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_no_days_rejected() {
        let mut content = SiteContent::from_json(sample()).unwrap();
        content.days.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let mut content = SiteContent::from_json(sample()).unwrap();
        content.nav[1].section = "home".into();
        let err = content.validate().unwrap_err();
        assert_eq!(err, ContentError::Invalid("duplicate section id 'home'".into()));
    }
}
