use std::fmt;

use clap::ValueEnum;
use log::LevelFilter;
use serde::Serialize;

/// MQTT Quality of Service level.
#[derive(ValueEnum, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(into = "u8")]
pub enum Qos {
    /// At most once
    #[default]
    #[value(name = "0")]
    AtMostOnce,
    /// At least once
    #[value(name = "1")]
    AtLeastOnce,
    /// Exactly once
    #[value(name = "2")]
    ExactlyOnce,
}

impl From<Qos> for u8 {
    fn from(qos: Qos) -> u8 {
        match qos {
            Qos::AtMostOnce => 0,
            Qos::AtLeastOnce => 1,
            Qos::ExactlyOnce => 2,
        }
    }
}

impl fmt::Display for Qos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[derive(ValueEnum, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MqttVersion {
    #[value(name = "31", alias = "mqttv31")]
    #[serde(rename = "3.1")]
    V3_1,
    #[value(name = "311", alias = "mqttv311")]
    #[serde(rename = "3.1.1")]
    V3_1_1,
    #[value(name = "5", alias = "mqttv5")]
    #[serde(rename = "5")]
    V5,
}

/// Tracing verbosity handed to the client library; `on` is an alias for `min`.
#[derive(ValueEnum, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Error,
    Protocol,
    #[value(name = "min", alias = "on")]
    Minimum,
    #[value(name = "max")]
    Maximum,
}

impl TraceLevel {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            TraceLevel::Error => LevelFilter::Error,
            TraceLevel::Protocol => LevelFilter::Info,
            TraceLevel::Minimum => LevelFilter::Debug,
            TraceLevel::Maximum => LevelFilter::Trace,
        }
    }
}

/// Matches `input` exactly (case-sensitive) against the names and aliases of `T`.
pub fn parse_choice<T: ValueEnum>(input: &str) -> Option<T> {
    T::from_str(input, false).ok()
}

/// The `|`-separated primary names of `T`, for usage text.
pub fn choices<T: ValueEnum>() -> String {
    T::value_variants()
        .iter()
        .filter_map(|v| v.to_possible_value())
        .map(|v| v.get_name().to_string())
        .collect::<Vec<_>>()
        .join("|")
}

/// Lenient integer conversion in the manner of C `atoi`: optional leading
/// whitespace and sign, then digits up to the first non-digit. No digits
/// gives 0 and out-of-range values saturate.
pub fn atoi(input: &str) -> i32 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
