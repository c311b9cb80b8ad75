//! Tests for hook precedence

use std::cell::Cell;

use untext::{
    Decode, Error, ErrorKind, ParseStr, ParseText, Result, Slot, UnmarshalText, Zero, decode,
    decode_slice, parse,
};

/// Stores an integer but decodes hexadecimal through its own hook.
#[derive(Debug, Default, PartialEq)]
struct Hex(i64);

impl ParseText for Hex {
    fn parse_text(&mut self, input: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(input).map_err(Error::custom)?;
        self.0 = i64::from_str_radix(text, 16).map_err(Error::custom)?;
        Ok(())
    }
}

impl Decode for Hex {
    fn slot(&mut self) -> Slot<'_> {
        Slot::I64(&mut self.0)
    }

    fn text_hook(&mut self) -> Option<&mut dyn ParseText> {
        Some(self)
    }
}

impl Zero for Hex {
    fn zero() -> Self {
        Hex(0)
    }
}

#[test]
fn test_text_hook_wins_over_integer_slot() {
    let mut hex = Hex::default();
    parse("ff", &mut hex).unwrap();
    assert_eq!(hex, Hex(255));

    decode(b"10", &mut hex).unwrap();
    assert_eq!(hex, Hex(16));
}

#[test]
fn test_text_hook_error_is_propagated_verbatim() {
    let mut hex = Hex(1);
    let err = parse("zz", &mut hex).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
    assert_eq!(err.to_string(), "invalid digit found in string");
    assert_eq!(hex, Hex(1));
}

#[test]
fn test_text_hook_behind_indirection_and_in_slices() {
    let mut hex: Option<Hex> = None;
    parse("a", &mut hex).unwrap();
    assert_eq!(hex, Some(Hex(10)));

    let mut all: Vec<Hex> = Vec::new();
    decode_slice(&["1", "f", "10"], &mut all).unwrap();
    assert_eq!(all, [Hex(1), Hex(15), Hex(16)]);
}

/// Records which capability decoded it.
#[derive(Debug, Default)]
struct Probe {
    via: &'static str,
}

impl ParseText for Probe {
    fn parse_text(&mut self, _input: &[u8]) -> Result<()> {
        self.via = "text";
        Ok(())
    }
}

impl ParseStr for Probe {
    fn parse_str(&mut self, _input: &str) -> Result<()> {
        self.via = "str";
        Ok(())
    }
}

impl std::str::FromStr for Probe {
    type Err = std::convert::Infallible;

    fn from_str(_s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Probe { via: "standard" })
    }
}

impl Decode for Probe {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Other
    }

    fn text_hook(&mut self) -> Option<&mut dyn ParseText> {
        Some(self)
    }

    fn str_hook(&mut self) -> Option<&mut dyn ParseStr> {
        Some(self)
    }

    fn unmarshaler(&mut self) -> Option<&mut dyn UnmarshalText> {
        Some(self)
    }
}

impl Zero for Probe {
    fn zero() -> Self {
        Probe::default()
    }
}

#[test]
fn test_parse_prefers_string_hook() {
    let mut probe = Probe::default();
    parse("x", &mut probe).unwrap();
    assert_eq!(probe.via, "str");
}

#[test]
fn test_decode_prefers_standard_capability() {
    let mut probe = Probe::default();
    decode("x", &mut probe).unwrap();
    assert_eq!(probe.via, "standard");
}

#[test]
fn test_indirection_uses_text_hook_only() {
    let mut probe: Option<Probe> = None;
    parse("x", &mut probe).unwrap();
    assert_eq!(probe.map(|p| p.via), Some("text"));
}

#[test]
fn test_slice_elements_go_through_parse() {
    let mut probes: Vec<Probe> = Vec::new();
    decode_slice(&["a", "b"], &mut probes).unwrap();
    assert!(probes.iter().all(|p| p.via == "str"));
}

/// Only has the standard capability.
#[derive(Debug, Default, PartialEq)]
struct Version(u32);

impl std::str::FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.strip_prefix('v')
            .and_then(|rest| rest.parse().ok())
            .map(Version)
            .ok_or_else(|| format!("expected v<number>, got {s}"))
    }
}

impl Decode for Version {
    fn slot(&mut self) -> Slot<'_> {
        Slot::U32(&mut self.0)
    }

    fn unmarshaler(&mut self) -> Option<&mut dyn UnmarshalText> {
        Some(self)
    }
}

impl Zero for Version {
    fn zero() -> Self {
        Version(0)
    }
}

#[test]
fn test_standard_capability_at_outermost_entry() {
    let mut version = Version::default();
    parse("v3", &mut version).unwrap();
    assert_eq!(version, Version(3));

    let err = parse("3", &mut version).unwrap_err();
    match err {
        Error::InvalidText { input, message } => {
            assert_eq!(input, "3");
            assert_eq!(message, "expected v<number>, got 3");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(version, Version(3));
}

#[test]
fn test_standard_capability_skipped_behind_indirection() {
    let mut version: Option<Version> = None;
    parse("7", &mut version).unwrap();
    assert_eq!(version, Some(Version(7)));

    assert!(parse("v7", &mut version).unwrap_err().is_parse_error());
    assert_eq!(version, Some(Version(7)));
}

/// Counts hook invocations through a borrowed counter.
struct Counted<'a> {
    calls: &'a Cell<usize>,
}

impl ParseStr for Counted<'_> {
    fn parse_str(&mut self, input: &str) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        if input == "bad" {
            return Err(Error::custom("bad input"));
        }
        Ok(())
    }
}

impl Decode for Counted<'_> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Other
    }

    fn str_hook(&mut self) -> Option<&mut dyn ParseStr> {
        Some(self)
    }
}

#[test]
fn test_hook_called_once_per_parse() {
    let calls = Cell::new(0);
    let mut counted = Counted { calls: &calls };
    parse("good", &mut counted).unwrap();
    assert!(parse("bad", &mut counted).is_err());
    assert_eq!(calls.get(), 2);
}

#[derive(Debug, PartialEq)]
enum Level {
    Low,
    High,
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(Level::Low),
            "high" => Ok(Level::High),
            _ => Err(format!("unknown level {s}")),
        }
    }
}

impl Zero for Level {
    fn zero() -> Self {
        Level::Low
    }
}

untext::decode_via_from_str!(Level);

#[test]
fn test_decode_via_from_str() {
    let mut level = Level::Low;
    parse("high", &mut level).unwrap();
    assert_eq!(level, Level::High);

    let mut maybe: Option<Level> = None;
    parse("low", &mut maybe).unwrap();
    assert_eq!(maybe, Some(Level::Low));

    let mut levels: Vec<Level> = Vec::new();
    decode_slice(&["low", "high"], &mut levels).unwrap();
    assert_eq!(levels, [Level::Low, Level::High]);

    let err = parse("medium", &mut level).unwrap_err();
    assert_eq!(err.to_string(), "failed to decode \"medium\": unknown level medium");
    assert_eq!(level, Level::High);
}

/// Gets everything, including `Zero`, from the macro.
#[derive(Debug, Default, PartialEq)]
struct Channel(u8);

impl std::str::FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.strip_prefix("ch")
            .and_then(|rest| rest.parse().ok())
            .map(Channel)
            .ok_or_else(|| format!("unknown channel {s}"))
    }
}

untext::decode_via_from_str!(default: Channel);

#[test]
fn test_decode_via_from_str_with_default_zero() {
    assert_eq!(Channel::zero(), Channel(0));

    let mut maybe: Option<Channel> = None;
    parse("ch7", &mut maybe).unwrap();
    assert_eq!(maybe, Some(Channel(7)));

    let mut boxed = Box::new(Channel(1));
    decode("ch2", &mut boxed).unwrap();
    assert_eq!(*boxed, Channel(2));

    let mut channels: Vec<Channel> = Vec::new();
    decode_slice(&["ch1", "ch3"], &mut channels).unwrap();
    assert_eq!(channels, [Channel(1), Channel(3)]);

    assert!(decode_slice(&["ch1", "7"], &mut channels).is_err());
    assert_eq!(channels, [Channel(1), Channel(3)]);
}
