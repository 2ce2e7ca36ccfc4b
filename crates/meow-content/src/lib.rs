//! Everything the dashboard says: weather tips, love quotes, the daily
//! horoscope, the cat photo, and the two tap-for-a-surprise widgets.

pub mod cat;
pub mod daily;
pub mod error;
pub mod food;
pub mod horoscope;
pub mod quotes;
pub mod tips;
pub mod wisdom;

pub use cat::{CatClient, CatImage};
pub use daily::{compose, simulate_weather, DailyContent, DailyContentService};
pub use error::ContentError;
pub use food::{suggest_food, suggest_food_in, FoodCategory, FoodOption};
pub use horoscope::{HoroscopeClient, FALLBACK_HOROSCOPE};
pub use tips::{select_tip, select_tip_for_label, TipCategory};
