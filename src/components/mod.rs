//! UI Components
//!
//! Page sections and the reusable pieces they are built from.

mod reveal_card;
mod fade_image;
mod ripple_button;
mod navbar;
mod hero;
mod day_card;
mod itinerary_section;
mod attractions;
mod food;
mod checklist;
mod practical;
mod scroll_to_top;

pub use reveal_card::RevealCard;
pub use fade_image::FadeImage;
pub use ripple_button::RippleButton;
pub use navbar::Navbar;
pub use hero::Hero;
pub use day_card::DayCard;
pub use itinerary_section::ItinerarySection;
pub use attractions::AttractionsSection;
pub use food::FoodSection;
pub use checklist::PackingChecklist;
pub use practical::PracticalSection;
pub use scroll_to_top::ScrollToTop;
