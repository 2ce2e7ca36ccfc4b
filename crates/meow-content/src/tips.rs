//! Cat-voiced weather tips.
//!
//! Air quality and UV outrank the sky: a bad-air or high-UV day gets a
//! health tip even when the weather itself is lovely.

use meow_weather::WeatherCondition;
use rand::seq::SliceRandom;
use rand::Rng;

/// AQI strictly above this is hazardous.
pub const AQI_HAZARDOUS: u32 = 150;
/// AQI strictly above this is poor.
pub const AQI_POOR: u32 = 100;
/// UV at or above this is extreme.
pub const UV_EXTREME: f64 = 8.0;
/// UV at or above this is high.
pub const UV_HIGH: f64 = 6.0;

pub const DEFAULT_TIP: &str = "Sun is shining, come sunbathe with me!";

/// Which pool a tip comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipCategory {
    HazardousAir,
    ExtremeUv,
    PoorAir,
    HighUv,
    Weather(WeatherCondition),
}

impl TipCategory {
    /// First match wins: hazardous air, extreme UV, poor air, high UV, then the sky.
    ///
    /// Missing readings never trigger an alert pool.
    pub fn classify(condition: WeatherCondition, uv_index: Option<f64>, aqi: Option<u32>) -> Self {
        let aqi = aqi.unwrap_or(0);
        let uv = uv_index.filter(|uv| uv.is_finite()).unwrap_or(0.0);

        if aqi > AQI_HAZARDOUS {
            Self::HazardousAir
        } else if uv >= UV_EXTREME {
            Self::ExtremeUv
        } else if aqi > AQI_POOR {
            Self::PoorAir
        } else if uv >= UV_HIGH {
            Self::HighUv
        } else {
            Self::Weather(condition)
        }
    }

    pub fn pool(&self) -> &'static [&'static str] {
        match self {
            Self::HazardousAir => HAZARDOUS_AIR,
            Self::ExtremeUv => EXTREME_UV,
            Self::PoorAir => POOR_AIR,
            Self::HighUv => HIGH_UV,
            Self::Weather(condition) => weather_pool(*condition),
        }
    }
}

fn weather_pool(condition: WeatherCondition) -> &'static [&'static str] {
    match condition {
        WeatherCondition::Clear => CLEAR,
        WeatherCondition::Clouds => CLOUDS,
        WeatherCondition::Rain => RAIN,
        WeatherCondition::Drizzle => DRIZZLE,
        WeatherCondition::Snow => SNOW,
        WeatherCondition::Thunderstorm => THUNDERSTORM,
        WeatherCondition::Mist => MIST,
        WeatherCondition::Squall => SQUALL,
    }
}

/// Pick a tip for the given readings.
pub fn select_tip<R: Rng + ?Sized>(
    condition: WeatherCondition,
    uv_index: Option<f64>,
    aqi: Option<u32>,
    rng: &mut R,
) -> &'static str {
    TipCategory::classify(condition, uv_index, aqi)
        .pool()
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_TIP)
}

/// Same as [`select_tip`] for a condition given by name; unknown names use the Clear pool.
pub fn select_tip_for_label<R: Rng + ?Sized>(
    condition: &str,
    uv_index: Option<f64>,
    aqi: Option<u32>,
    rng: &mut R,
) -> &'static str {
    select_tip(WeatherCondition::from_label(condition), uv_index, aqi, rng)
}

const HAZARDOUS_AIR: &[&str] = &[
    "The air is dangerous today, stay inside and cuddle with me!",
    "Close every window, the air outside is too dirty for your little nose.",
    "Hazardous air! Wear a proper mask if you really must go out.",
    "No outdoor running today, let's do cat stretches on the rug instead.",
];

const EXTREME_UV: &[&str] = &[
    "The sun is fierce today, hide in the shade like a smart cat!",
    "Extreme UV! Sunscreen, hat and sunglasses, no excuses meow.",
    "Don't sunbathe at noon today, even I'm staying under the sofa.",
    "Your skin is precious, reapply sunscreen every two hours!",
];

const POOR_AIR: &[&str] = &[
    "The air is a little dusty today, bring a mask just in case.",
    "Not a great day for outdoor exercise, let's stay cozy indoors.",
    "Sniff sniff... the air smells funny, keep the windows mostly closed.",
    "Drink more water today, it helps your throat with this air.",
];

const HIGH_UV: &[&str] = &[
    "Strong sunshine today, don't forget your sunscreen!",
    "Bring a hat or an umbrella, the sun is quite bright meow.",
    "UV is high, find the shady side of the street like I do.",
    "Sunglasses on! You'll look cool and protect your eyes.",
];

const CLEAR: &[&str] = &[
    "Sun is shining, come sunbathe with me!",
    "Full of energy today, shining like the sun!",
    "A bit hot, remember to drink water, don't turn into a roasted bean!",
    "Great weather, let your mood fly high!",
];

const CLOUDS: &[&str] = &[
    "Grey skies are perfect for a cat nap.",
    "Don't let the clouds fool you, bring an umbrella just in case.",
    "Not too hot, let's sneak out to play!",
    "Cuddle day, come let me hug you.",
];

const RAIN: &[&str] = &[
    "Slippery roads, don't let my dried fish get wet!",
    "Rain sounds are cozy, let's watch a movie at home.",
    "Walk lightly like a cat on this wet floor.",
    "It's raining, remember to turn up the heat a little.",
];

const DRIZZLE: &[&str] = &[
    "Misty rain, an umbrella makes it romantic.",
    "Careful not to wet your shoes, squishy is uncomfortable!",
    "Gentle rain, don't forget your raincoat.",
    "It's drizzling, wear an extra layer before going out.",
];

const SNOW: &[&str] = &[
    "Wow! It's snowing outside, hold me tight!",
    "Super cold today, wear extra layers meow.",
    "Want to step in the snow? Paws might get freezing.",
    "Slippery ground, walk slowly, slowly, slowly!",
];

const THUNDERSTORM: &[&str] = &[
    "Thunder! Come comfort me!",
    "Stormy wind and rain, it's safest to stay home.",
    "Close the windows tight, keep the rain out.",
    "Sudden heavy rain, absolutely do not go out today!",
];

const MIST: &[&str] = &[
    "The air is a bit thick, wear a mask to protect your nose.",
    "Foggy outside, watch your step carefully.",
    "It's grey out there, let's stay in the room.",
    "Breathe gently, keep the dust out.",
];

const SQUALL: &[&str] = &[
    "Woo woo, dangerous outside, hide!",
    "Big wind! Absolutely do not go out today!",
    "Waiting for you to come home safe, be careful.",
    "Put away things outside that might blow away.",
];
