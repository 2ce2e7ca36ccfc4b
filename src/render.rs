//! Plain-text screens.

use std::fmt::Write;
use std::path::Path;

use meow_audio::PlaybackStatus;
use meow_content::{DailyContent, FoodOption};
use meow_core::UserProfile;

pub fn welcome() -> String {
    "🐱 Meowing Morning\nTell me who you are and I'll greet you every day.\n".to_string()
}

pub fn letter(profile: &UserProfile) -> String {
    format!(
        "\n  💌\n\n  {}:\n\n    接下来请打开你的每日专属提醒。\n    我一直爱你。\n\n                    —— 乔夏\n",
        profile.nickname
    )
}

pub fn location_question() -> &'static str {
    "\nSniff the Weather?\nTo tell you if it's perfect for a nap or a walk, I need to know where we are!\n(Can I use your location?)"
}

pub fn dashboard(
    profile: &UserProfile,
    content: &DailyContent,
    cat: Option<Result<&Path, &str>>,
    note: Option<&str>,
) -> String {
    let weather = &content.weather;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{} {} {}°C  [{}]",
        weather.condition.icon(),
        weather.city,
        weather.temp,
        profile.nickname
    );
    let mut readings = Vec::new();
    if let Some(uv) = weather.uv_index {
        readings.push(format!("UV {:.1}", uv));
    }
    if let Some(aqi) = weather.aqi {
        readings.push(format!("AQI {}", aqi));
    }
    if !readings.is_empty() {
        let _ = writeln!(out, "   {}", readings.join(" · "));
    }
    if let Some(note) = note {
        let _ = writeln!(out, "   ({})", note);
    }
    let _ = writeln!(out, "   {}", content.weather_tip);
    let _ = writeln!(out);

    match cat {
        Some(Ok(path)) => {
            let _ = writeln!(out, "🐈 Today's cat: {}", path.display());
        }
        Some(Err(reason)) => {
            let _ = writeln!(out, "🐈 The cat is hiding today. {}", reason);
        }
        None => {}
    }
    let _ = writeln!(out, "   \"{}\"", content.quote);
    let _ = writeln!(out);

    let _ = writeln!(out, "✨ {} · Daily Horoscope", profile.zodiac);
    let _ = write!(out, "   {}", content.horoscope);
    out
}

pub fn food(option: &FoodOption) -> String {
    format!(
        "🌭 The dachshund has decided: {}\n   {} ({})",
        option.suggestion,
        option.mood_text,
        option.category.label()
    )
}

pub fn wisdom(answer: &str) -> String {
    format!("📖 The cat opens the book...\n   {}", answer)
}

pub fn recorder(status: &PlaybackStatus) -> String {
    format!("📻 {}", status.text())
}
