//! The Magic Cat: think of a question, get an answer.

use rand::seq::SliceRandom;
use rand::Rng;

pub const WISDOM_ANSWERS: &[&str] = &[
    "Absolutely, meow!",
    "The stars say yes.",
    "Not today, try again after a nap.",
    "Follow your heart, it knows the way.",
    "Ask me again after dinner.",
    "It's a purr-fect idea!",
    "Hmm... the fish says no.",
    "Go for it, I believe in you!",
    "Patience, little one. Good things are coming.",
    "Only if you bring snacks.",
    "The answer is hiding under the sofa.",
    "Yes, but wear a cute outfit.",
    "Let it go, like a cat leaving a cardboard box.",
    "Trust your whiskers.",
    "Definitely not, hiss!",
    "Something sweet is about to happen.",
];

pub fn ask<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WISDOM_ANSWERS.choose(rng).copied().unwrap_or("Trust your whiskers.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_answers_come_from_table() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..30 {
            assert!(WISDOM_ANSWERS.contains(&ask(&mut rng)));
        }
    }

    #[test]
    fn test_repeat_questions_allowed() {
        // Asking repeatedly keeps answering; there's no lock-out.
        let mut rng = StdRng::seed_from_u64(22);
        let answers: Vec<_> = (0..10).map(|_| ask(&mut rng)).collect();
        assert_eq!(answers.len(), 10);
    }
}
