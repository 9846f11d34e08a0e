//! Clock and entropy services.

use std::fmt;

// ---------------------------------------------------------------------------
// Timestamp
// ---------------------------------------------------------------------------

/// A wall-clock timestamp broken into civil fields (UTC, no TZ handling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Day of week, 0 = Sunday.
    pub weekday: u8,
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Timestamp {
    /// Build a timestamp from seconds since the Unix epoch.
    pub fn from_unix(secs: u64) -> Self {
        let days = (secs / 86400) as i64;
        let time_of_day = secs % 86400;

        // Civil-from-days (days since 1970-01-01, era-based arithmetic).
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = doy - (153 * mp + 2) / 5 + 1;
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = if m <= 2 { y + 1 } else { y };

        Self {
            year: year as i32,
            month: m as u8,
            day: d as u8,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
            // 1970-01-01 was a Thursday.
            weekday: ((days + 4).rem_euclid(7)) as u8,
        }
    }

    /// `2026-08-30T12:04:05Z` -- used in simulated log lines.
    pub fn iso8601(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }

    /// `Sun Aug 30 12:04:05 UTC 2026` -- the `date` command layout.
    pub fn date_line(&self) -> String {
        format!(
            "{} {} {:2} {:02}:{:02}:{:02} UTC {}",
            WEEKDAYS[self.weekday as usize % 7],
            MONTHS[(self.month as usize - 1) % 12],
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.year,
        )
    }

    /// `12:04:05` -- the `time` command layout.
    pub fn clock_line(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

// ---------------------------------------------------------------------------
// Clock service
// ---------------------------------------------------------------------------

/// Abstraction over the host wall clock.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> Timestamp;
}

/// Host clock backed by `std::time::SystemTime`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Timestamp::from_unix(secs)
    }
}

// ---------------------------------------------------------------------------
// Entropy service
// ---------------------------------------------------------------------------

/// Abstraction over the host random source.
///
/// Only `next_u64` is required; the bounded helper draws from the high bits,
/// which have the better statistics in a multiplicative generator.
pub trait Entropy {
    /// Next raw 64-bit draw.
    fn next_u64(&mut self) -> u64;

    /// Uniform-ish draw in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u64) -> u64 {
        (self.next_u64() >> 33) % bound
    }
}

/// Seedable linear congruential generator.
///
/// Not cryptographic -- every consumer here synthesizes cosmetic output.
/// A fixed seed reproduces the full draw sequence, which is what the tests
/// rely on.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(0x9e37_79b9_7f4a_7c15),
        }
    }

    /// Seed from the host clock's sub-second noise.
    pub fn from_system_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::new(nanos)
    }
}

impl Entropy for SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }
}
