//! The Doxie's Diner: a dachshund that decides what you eat.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    Comfort,
    Noodles,
    Rice,
    Spicy,
    Light,
    Sweet,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 6] = [
        Self::Comfort,
        Self::Noodles,
        Self::Rice,
        Self::Spicy,
        Self::Light,
        Self::Sweet,
    ];

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Comfort => "Comfort",
            Self::Noodles => "Noodles",
            Self::Rice => "Rice",
            Self::Spicy => "Spicy",
            Self::Light => "Light",
            Self::Sweet => "Sweet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodOption {
    pub suggestion: &'static str,
    pub mood_text: &'static str,
    pub category: FoodCategory,
}

const fn option(
    suggestion: &'static str,
    mood_text: &'static str,
    category: FoodCategory,
) -> FoodOption {
    FoodOption {
        suggestion,
        mood_text,
        category,
    }
}

pub const FOOD_CATALOG: &[FoodOption] = &[
    option("Hot Pot", "Steamy and bubbly, just like my love for you!", FoodCategory::Spicy),
    option("Spicy Crayfish", "Peel them slowly, I'll wait with my tail wagging.", FoodCategory::Spicy),
    option("Mapo Tofu", "A little spicy, a lot of happy.", FoodCategory::Spicy),
    option("Beef Noodle Soup", "A big warm bowl for a big warm heart.", FoodCategory::Noodles),
    option("Ramen", "Slurp loudly, nobody's judging. Woof!", FoodCategory::Noodles),
    option("Dumplings", "Little pockets of joy, save one for me?", FoodCategory::Comfort),
    option("Fried Chicken", "Crunchy outside, juicy inside, perfect day.", FoodCategory::Comfort),
    option("Pizza", "Share a slice? Pretty please with a bone on top.", FoodCategory::Comfort),
    option("Burger and Fries", "Treat yourself, you've been a good human.", FoodCategory::Comfort),
    option("Claypot Rice", "Don't forget to scrape the crispy bottom!", FoodCategory::Rice),
    option("Sushi", "Fresh fish! The cat is going to be jealous.", FoodCategory::Rice),
    option("Curry Rice", "Warm, golden and cozy like a sunny nap.", FoodCategory::Rice),
    option("Poke Bowl", "Light and fresh, you'll feel like skipping.", FoodCategory::Light),
    option("Caesar Salad", "Crunchy greens! I'll pretend I like them too.", FoodCategory::Light),
    option("Congee", "Gentle on the tummy, gentle on the heart.", FoodCategory::Light),
    option("Bubble Tea", "Extra pearls for extra happiness.", FoodCategory::Sweet),
    option("Strawberry Cake", "Sweet things for my sweetest human.", FoodCategory::Sweet),
    option("Mango Sago", "Tropical vibes, wagging intensifies.", FoodCategory::Sweet),
];

/// Any option from the catalog.
pub fn suggest_food<R: Rng + ?Sized>(rng: &mut R) -> Option<FoodOption> {
    FOOD_CATALOG.choose(rng).copied()
}

/// An option from one category.
pub fn suggest_food_in<R: Rng + ?Sized>(category: FoodCategory, rng: &mut R) -> Option<FoodOption> {
    let matching: Vec<&FoodOption> = FOOD_CATALOG
        .iter()
        .filter(|f| f.category == category)
        .collect();
    matching.choose(rng).map(|f| **f)
}
