//! Bundled Content
//!
//! The itinerary text ships inside the binary as JSON.

use trip_state::{ContentResult, SiteContent};

const BUNDLED_JSON: &str = include_str!("../content/billund.json");

// Section ids rendered by the page components
pub const HOME: &str = "home";
pub const ITINERARY: &str = "itinerary";
pub const ATTRACTIONS: &str = "attractions";
pub const FOOD: &str = "food";
pub const PRACTICAL: &str = "practical";

pub const PAGE_SECTIONS: [&str; 5] = [HOME, ITINERARY, ATTRACTIONS, FOOD, PRACTICAL];

/// Parse and validate the bundled itinerary
pub fn load_bundled() -> ContentResult<SiteContent> {
    SiteContent::from_json(BUNDLED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_is_valid() {
        let content = load_bundled().expect("bundled content should parse");
        assert_eq!(content.days.len(), 5);
        assert!(!content.practical.checklist.is_empty());
    }

    #[test]
    fn test_nav_points_at_rendered_sections() {
        let content = load_bundled().unwrap();
        for link in &content.nav {
            assert!(
                PAGE_SECTIONS.contains(&link.section.as_str()),
                "nav link '{}' points at unknown section '{}'",
                link.label,
                link.section
            );
        }
    }

    #[test]
    fn test_local_images_are_shipped() {
        let content = load_bundled().unwrap();
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let images = content
            .hero_image
            .iter()
            .chain(content.attractions.iter().filter_map(|a| a.image.as_ref()));

        for image in images.filter(|src| !src.starts_with("http://") && !src.starts_with("https://")) {
            assert!(root.join(image).exists(), "missing image asset '{}'", image);
        }
    }
}
