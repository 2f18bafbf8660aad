pub mod feedback;
pub mod listing;
pub mod menu;

pub use feedback::{FeedbackRecord, Satisfaction};
pub use listing::{Listing, Medal, PriorityMode, ScoredListing};
pub use menu::{MealStyle, MenuCategory, TastePreference};
