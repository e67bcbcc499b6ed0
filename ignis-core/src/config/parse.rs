//! Minimal TOML parser for the appliance configuration
//!
//! Handles only the subset needed for the appliance file. It does NOT
//! support the full TOML grammar and needs no allocator.
//!
//! Supported features:
//! - `[section]` headers
//! - `key = value` pairs with unsigned integer values
//! - `_` digit separators (`3_000`)
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys that are not present keep their default value.

use super::types::{
    ApplianceConfig, ControlConfig, FlameSensorConfig, MainValveConfig, PotentiometerConfig,
    SequencerTiming,
};

/// Parse error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Malformed section header
    InvalidSection,
    /// Section name not recognized
    UnknownSection,
    /// Key not recognized in this section
    UnknownKey,
    /// Key/value pair before the first section header
    KeyOutsideSection,
    /// Line is not `key = value`
    MissingValue,
    /// Value is not an unsigned integer or does not fit the field
    InvalidValue,
}

/// Parse error with the 1-based line it occurred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
    Control,
    FlameSensor,
    Potentiometer,
    MainValve,
}

impl Section {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "timing" => Some(Section::Timing),
            "control" => Some(Section::Control),
            "flame_sensor" => Some(Section::FlameSensor),
            "potentiometer" => Some(Section::Potentiometer),
            "main_valve" => Some(Section::MainValve),
            _ => None,
        }
    }
}

/// Parse TOML configuration into an [`ApplianceConfig`]
///
/// The result is not validated; call [`ApplianceConfig::validate`].
pub fn parse_config(input: &str) -> Result<ApplianceConfig, ParseError> {
    let mut config = ApplianceConfig::default();
    let mut section = Section::Root;

    for (index, raw_line) in input.lines().enumerate() {
        let line_no = index + 1;
        let fail = |kind| ParseError {
            line: line_no,
            kind,
        };

        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(fail(ParseErrorKind::InvalidSection))?
                .trim();
            section = Section::from_name(name).ok_or(fail(ParseErrorKind::UnknownSection))?;
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(fail(ParseErrorKind::MissingValue))?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return Err(fail(ParseErrorKind::MissingValue));
        }

        let result = match section {
            Section::Root => Err(ParseErrorKind::KeyOutsideSection),
            Section::Timing => apply_timing(&mut config.timing, key, value),
            Section::Control => apply_control(&mut config.control, key, value),
            Section::FlameSensor => apply_flame(&mut config.flame_sensor, key, value),
            Section::Potentiometer => apply_pot(&mut config.potentiometer, key, value),
            Section::MainValve => apply_valve(&mut config.main_valve, key, value),
        };
        result.map_err(fail)?;
    }

    Ok(config)
}

fn apply_timing(t: &mut SequencerTiming, key: &str, value: &str) -> Result<(), ParseErrorKind> {
    match key {
        "prepurge_ticks" => t.prepurge_ticks = parse_u32(value)?,
        "ignition_trial_ticks" => t.ignition_trial_ticks = parse_u32(value)?,
        "flame_prove_ticks" => t.flame_prove_ticks = parse_u32(value)?,
        "retry_delay_ticks" => t.retry_delay_ticks = parse_u32(value)?,
        "max_trials" => t.max_trials = narrow(parse_u32(value)?)?,
        "shutdown_linger_ticks" => t.shutdown_linger_ticks = parse_u32(value)?,
        "lockout_blink_half_ticks" => t.lockout_blink_half_ticks = parse_u32(value)?,
        "lockout_blink_period_ticks" => t.lockout_blink_period_ticks = parse_u32(value)?,
        "lockout_reset_confirm_ticks" => t.lockout_reset_confirm_ticks = parse_u32(value)?,
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

fn apply_control(c: &mut ControlConfig, key: &str, value: &str) -> Result<(), ParseErrorKind> {
    match key {
        "tick_period_ms" => c.tick_period_ms = parse_u32(value)?,
        "cycle_period_ms" => c.cycle_period_ms = parse_u32(value)?,
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

fn apply_flame(f: &mut FlameSensorConfig, key: &str, value: &str) -> Result<(), ParseErrorKind> {
    match key {
        "threshold" => f.threshold = narrow(parse_u32(value)?)?,
        "open_circuit_above" => f.open_circuit_above = narrow(parse_u32(value)?)?,
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

fn apply_pot(p: &mut PotentiometerConfig, key: &str, value: &str) -> Result<(), ParseErrorKind> {
    match key {
        "adc_min" => p.adc_min = narrow(parse_u32(value)?)?,
        "adc_max" => p.adc_max = narrow(parse_u32(value)?)?,
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

fn apply_valve(v: &mut MainValveConfig, key: &str, value: &str) -> Result<(), ParseErrorKind> {
    match key {
        "period_us" => v.period_us = narrow(parse_u32(value)?)?,
        "min_pulse_us" => v.min_pulse_us = narrow(parse_u32(value)?)?,
        "max_pulse_us" => v.max_pulse_us = narrow(parse_u32(value)?)?,
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse an unsigned decimal integer, allowing `_` between digits
fn parse_u32(value: &str) -> Result<u32, ParseErrorKind> {
    if value.starts_with('_') || value.ends_with('_') {
        return Err(ParseErrorKind::InvalidValue);
    }

    let mut result: u32 = 0;
    let mut digits = 0;
    for c in value.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(10).ok_or(ParseErrorKind::InvalidValue)?;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseErrorKind::InvalidValue)?;
        digits += 1;
    }

    if digits == 0 {
        return Err(ParseErrorKind::InvalidValue);
    }
    Ok(result)
}

fn narrow<T: TryFrom<u32>>(value: u32) -> Result<T, ParseErrorKind> {
    T::try_from(value).map_err(|_| ParseErrorKind::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
# Appliance configuration
[timing]
prepurge_ticks = 4_000   # longer purge for this flue
max_trials = 2

[control]
tick_period_ms = 1
cycle_period_ms = 20

[flame_sensor]
threshold = 620

[potentiometer]
adc_min = 150
adc_max = 4000

[main_valve]
period_us = 20_000
min_pulse_us = 900
max_pulse_us = 2_100
";

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.timing.prepurge_ticks, 4_000);
        assert_eq!(config.timing.max_trials, 2);
        assert_eq!(config.control.cycle_period_ms, 20);
        assert_eq!(config.flame_sensor.threshold, 620);
        assert_eq!(config.potentiometer.adc_min, 150);
        assert_eq!(config.main_valve.min_pulse_us, 900);
        assert_eq!(config.main_valve.max_pulse_us, 2_100);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[timing]\nmax_trials = 5\n").unwrap();
        assert_eq!(config.timing.max_trials, 5);
        assert_eq!(config.timing.ignition_trial_ticks, 10_000);
        assert_eq!(config.main_valve, MainValveConfig::default());
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config("").unwrap(), ApplianceConfig::default());
    }

    #[test]
    fn test_unknown_section() {
        let err = parse_config("[timing]\n\n[igniter]\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::UnknownSection);
    }

    #[test]
    fn test_unknown_key() {
        let err = parse_config("[control]\ntick_ms = 1\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::UnknownKey);
    }

    #[test]
    fn test_key_outside_section() {
        let err = parse_config("max_trials = 3\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::KeyOutsideSection);
    }

    #[test]
    fn test_value_overflow_rejected() {
        let err = parse_config("[timing]\nmax_trials = 300\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidValue);
    }

    #[test]
    fn test_non_integer_rejected() {
        for value in ["\"3000\"", "-1", "3.5", "_", "1_"] {
            let input = [
                "[timing]\nprepurge_ticks = ",
                value,
                "\n",
            ];
            let mut buf: heapless::String<64> = heapless::String::new();
            for part in input {
                buf.push_str(part).unwrap();
            }
            let err = parse_config(&buf).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::InvalidValue, "{}", value);
        }
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            parse_config("[timing\n").unwrap_err().kind,
            ParseErrorKind::InvalidSection
        );
        assert_eq!(
            parse_config("[timing]\nmax_trials\n").unwrap_err().kind,
            ParseErrorKind::MissingValue
        );
        assert_eq!(
            parse_config("[timing]\nmax_trials =\n").unwrap_err().kind,
            ParseErrorKind::MissingValue
        );
    }

    #[test]
    fn test_parse_shipped_configuration() {
        let shipped = include_str!("../../../ignis-firmware/appliance.toml");
        let config = parse_config(shipped).unwrap();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.timing, SequencerTiming::DEFAULT);
    }
}
