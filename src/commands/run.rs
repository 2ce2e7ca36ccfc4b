//! The default command: setup on first run, the letter, then the dashboard.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use meow_core::{AppRouter, AppState, ProfileStore, Zodiac};

use crate::render;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::profile_store(&config);

    let mut router = AppRouter::new();
    let share_location = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut out = std::io::stdout();

        if router.start(&store) == AppState::Config {
            first_run(&mut router, &store, &mut input, &mut out)?;
        }

        match config.location.coordinates() {
            Some(_) => ask_location(&mut input, &mut out)?,
            None => false,
        }
    };

    let Some(profile) = router.profile().cloned() else {
        anyhow::bail!("Setup did not finish, meow.");
    };

    let coordinates = config.location.coordinates().filter(|_| share_location);
    super::dashboard::show(&config, &profile, coordinates, true).await
}

/// Prompt for nickname and sign until they validate, show the letter, then
/// save once the user opens it.
pub fn first_run<R: BufRead, W: Write>(
    router: &mut AppRouter,
    store: &ProfileStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", render::welcome())?;

    let signs = Zodiac::ALL.map(|z| z.name()).join(", ");
    loop {
        let nickname = prompt(input, out, "Nickname: ")?;
        let zodiac = prompt(input, out, &format!("Zodiac sign ({}): ", signs))?;
        let zodiac = (!zodiac.is_empty()).then_some(zodiac.as_str());

        match router.submit_config(&nickname, zodiac) {
            Ok(_) => break,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    if let Some(profile) = router.profile() {
        writeln!(out, "{}", render::letter(profile))?;
    }
    prompt(input, out, "[Enter] 开启 ")?;

    router.open_dashboard(store)?;
    tracing::info!("Profile saved to {}", store.path().display());
    Ok(())
}

fn ask_location<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    writeln!(out, "{}", render::location_question())?;
    let answer = prompt(input, out, "Yes, locate me! [y/N] ")?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("Input closed before setup finished");
    }
    Ok(line.trim().to_string())
}
