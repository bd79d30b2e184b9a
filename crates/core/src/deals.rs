//! Flash deals

use std::fmt;

use rand::Rng;
use serde::Deserialize;

/// Colour scheme of a deal tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealTheme {
    /// Purple gradient
    Violet,

    /// Green gradient
    Emerald,

    /// Orange gradient
    Amber,
}

/// A time-limited promotional tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashDeal {
    /// Deal id
    pub id: String,

    /// Headline
    pub title: String,

    /// Detail line
    pub description: String,

    /// Tile colours
    pub theme: DealTheme,

    /// Human expiry text the countdown starts from
    pub expires_in: String,
}

/// How a deal's expiry text seeds its countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryHint {
    /// `N hours`
    Hours(u32),

    /// Anything mentioning `Today`
    Today,

    /// Anything else
    Limited,
}

impl ExpiryHint {
    /// Classify expiry text.
    pub fn parse(text: &str) -> Self {
        if text.contains("hours") {
            let hours = text
                .split_whitespace()
                .next()
                .and_then(|count| count.parse().ok());

            if let Some(hours) = hours {
                return Self::Hours(hours);
            }
        }

        if text.contains("Today") {
            return Self::Today;
        }

        Self::Limited
    }
}

/// Remaining time on a deal, shown as `HH:MM` and ticked once a minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    hours: u32,
    minutes: u32,
}

/// Milliseconds between countdown ticks.
pub const COUNTDOWN_TICK_MS: u32 = 60_000;

impl Countdown {
    /// Create a countdown. Minutes above 59 roll into hours.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self {
            hours: hours.saturating_add(minutes / 60),
            minutes: minutes % 60,
        }
    }

    /// Starting value for a deal.
    pub fn initial(hint: ExpiryHint, rng: &mut impl Rng) -> Self {
        match hint {
            ExpiryHint::Hours(hours) => Self::new(hours, 0),
            ExpiryHint::Today => Self::new(rng.gen_range(1..=12), rng.gen_range(0..59)),
            ExpiryHint::Limited => Self::random(rng),
        }
    }

    /// A fresh 1 to 6 hour window.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen_range(1..=6), rng.gen_range(0..59))
    }

    /// Take one minute off, restarting with a random window once expired.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        *self = match (self.hours, self.minutes) {
            (0, 0) => Self::random(rng),
            (hours, 0) => Self::new(hours - 1, 59),
            (hours, minutes) => Self::new(hours, minutes - 1),
        };
    }

    /// Whole hours left
    pub fn hours(self) -> u32 {
        self.hours
    }

    /// Minutes left past the hour
    pub fn minutes(self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn parses_expiry_hints() {
        assert_eq!(ExpiryHint::parse("3 hours"), ExpiryHint::Hours(3));
        assert_eq!(ExpiryHint::parse("Today only"), ExpiryHint::Today);
        assert_eq!(ExpiryHint::parse("Limited time"), ExpiryHint::Limited);
        assert_eq!(ExpiryHint::parse("several hours"), ExpiryHint::Limited);
    }

    #[test]
    fn hours_hint_starts_on_the_hour() {
        let mut rng = StdRng::seed_from_u64(7);

        let countdown = Countdown::initial(ExpiryHint::Hours(3), &mut rng);

        assert_eq!(countdown.to_string(), "03:00");
    }

    #[test]
    fn random_hints_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let today = Countdown::initial(ExpiryHint::Today, &mut rng);
            assert!((1..=12).contains(&today.hours()), "today hours {today}");
            assert!(today.minutes() <= 58, "today minutes {today}");

            let limited = Countdown::initial(ExpiryHint::Limited, &mut rng);
            assert!((1..=6).contains(&limited.hours()), "limited hours {limited}");
            assert!(limited.minutes() <= 58, "limited minutes {limited}");
        }
    }

    #[test]
    fn tick_borrows_from_hours() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut countdown = Countdown::new(1, 0);

        countdown.tick(&mut rng);

        assert_eq!(countdown.to_string(), "00:59");
    }

    #[test]
    fn tick_counts_down_minutes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut countdown = Countdown::new(2, 30);

        countdown.tick(&mut rng);

        assert_eq!(countdown, Countdown::new(2, 29));
    }

    #[test]
    fn expired_countdown_resets_into_window() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut countdown = Countdown::new(0, 0);

        countdown.tick(&mut rng);

        assert!((1..=6).contains(&countdown.hours()), "reset to {countdown}");
        assert!(countdown.minutes() <= 58, "reset to {countdown}");
    }

    #[test]
    fn minutes_roll_into_hours() {
        assert_eq!(Countdown::new(0, 125), Countdown::new(2, 5));
    }
}
