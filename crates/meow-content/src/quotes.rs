use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_QUOTE: &str = "Where there is love there is life.";

pub const LOVE_QUOTES: &[&str] = &[
    "Where there is love there is life.",
    "Love matches the soul.",
    "To love and be loved is to feel the sun from both sides.",
    "Love is the whole thing. We are only pieces.",
    "I love you more than I have ever found a way to say to you.",
    "If I know what love is, it is because of you.",
    "Love is being stupid together.",
    "You are my heart, my life, my one and only thought.",
    "There is only one happiness in this life, to love and be loved.",
    "Love serves as a compass.",
];

pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LOVE_QUOTES.choose(rng).copied().unwrap_or(DEFAULT_QUOTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_quote_from_table() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(LOVE_QUOTES.contains(&random_quote(&mut rng)));
        }
    }
}
