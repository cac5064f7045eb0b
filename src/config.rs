use std::time::Duration;
use strum::EnumString;

/// Coloring algorithms available on the command line.
///
/// Each mode accepts its long name or a single-letter alias, case
/// insensitively (e.g. `matrix`, `m`, `M`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub(crate) enum ColorMode {
    #[strum(serialize = "rainbow", serialize = "r")]
    Rainbow,
    #[strum(serialize = "fire", serialize = "f")]
    Fire,
    #[strum(serialize = "ocean", serialize = "o")]
    Ocean,
    #[strum(serialize = "matrix", serialize = "m")]
    Matrix,
    #[strum(serialize = "pastel", serialize = "p")]
    Pastel,
}

/// Resolved runtime configuration, built once from CLI arguments.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub mode: ColorMode,
    pub speed: f64,
    pub spread: f64,
    pub frequency: f64,
    pub animate: bool,
    pub delay: Duration,
    pub force: bool,
}

impl Config {
    /// Phase angle for the code point at `index`, with `speed` passed in
    /// explicitly since animation frames shift it per frame.
    pub(crate) fn phase(&self, index: usize, speed: f64) -> f64 {
        self.frequency * (index as f64 * self.spread + speed)
    }
}

/// Parse a duration string made of a decimal value and a unit suffix,
/// e.g. `100ms`, `1.5s`, `2m`.
pub(crate) fn parse_delay(input: &str) -> Result<Duration, InvalidDelay> {
    let invalid = || InvalidDelay(input.to_string());
    let split = input
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .ok_or_else(invalid)?;
    let (value, unit) = input.split_at(split);
    let value: f64 = value.parse().map_err(|_| invalid())?;
    let scale = match unit {
        "ns" => 1e-9,
        "us" => 1e-6,
        "ms" => 1e-3,
        "s" => 1.0,
        "m" => 60.0,
        "h" => 3600.0,
        _ => return Err(invalid()),
    };
    Duration::try_from_secs_f64(value * scale).map_err(|_| invalid())
}

#[derive(thiserror::Error, Debug)]
#[error("invalid delay format: {0}")]
pub(crate) struct InvalidDelay(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("rainbow", ColorMode::Rainbow)]
    #[case("r", ColorMode::Rainbow)]
    #[case("FIRE", ColorMode::Fire)]
    #[case("f", ColorMode::Fire)]
    #[case("Ocean", ColorMode::Ocean)]
    #[case("o", ColorMode::Ocean)]
    #[case("matrix", ColorMode::Matrix)]
    #[case("M", ColorMode::Matrix)]
    #[case("pastel", ColorMode::Pastel)]
    #[case("p", ColorMode::Pastel)]
    fn mode_aliases(#[case] input: &str, #[case] expected: ColorMode) {
        assert_eq!(ColorMode::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("neon")]
    #[case("")]
    #[case("rainbows")]
    fn unknown_modes(#[case] input: &str) {
        assert!(ColorMode::from_str(input).is_err());
    }

    #[rstest]
    #[case("100ms", Duration::from_millis(100))]
    #[case("1s", Duration::from_secs(1))]
    #[case("1.5s", Duration::from_millis(1500))]
    #[case("250us", Duration::from_micros(250))]
    #[case("2m", Duration::from_secs(120))]
    #[case("1h", Duration::from_secs(3600))]
    fn valid_delays(#[case] input: &str, #[case] expected: Duration) {
        assert_eq!(parse_delay(input).unwrap(), expected);
    }

    #[rstest]
    #[case("100")]
    #[case("ms")]
    #[case("10 ms")]
    #[case("-5s")]
    #[case("1.2.3s")]
    #[case("100banana")]
    fn invalid_delays(#[case] input: &str) {
        assert!(parse_delay(input).is_err());
    }
}
