use crate::error::CliError;
use sli_core::{EmulatorMode, RuntimeConfig, BATCH_VERIFICATION_CONFIG, REALTIME_DEMO_CONFIG};

/// Parsed command-line options
pub struct CliOptions {
    pub trace_path: String,
    pub automaton_path: Option<String>,
    pub config: RuntimeConfig,
    pub json: bool,
}

impl CliOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut trace_path = None;
        let mut automaton_path = None;
        let mut capacity = None;
        let mut period_ms = None;
        let mut emulator_mode = None;
        let mut strict = false;
        let mut json = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--capacity" => {
                    capacity = Some(take_value(args, &mut i, "--capacity")?.parse::<usize>().map_err(
                        |_| CliError::Usage("--capacity expects a positive integer".into()),
                    )?);
                }
                "--period-ms" => {
                    period_ms = Some(take_value(args, &mut i, "--period-ms")?.parse::<u64>().map_err(
                        |_| CliError::Usage("--period-ms expects an integer".into()),
                    )?);
                }
                "--emulator-mode" => {
                    let value = take_value(args, &mut i, "--emulator-mode")?;
                    emulator_mode = Some(match value.as_str() {
                        "fixed" => EmulatorMode::FixedPeriod,
                        "real" => EmulatorMode::RealDeltaT,
                        other => {
                            return Err(CliError::Usage(format!(
                                "--emulator-mode expects 'fixed' or 'real', got '{other}'"
                            )))
                        }
                    });
                }
                "--automaton" => {
                    automaton_path = Some(take_value(args, &mut i, "--automaton")?);
                }
                "--strict" => {
                    strict = true;
                    i += 1;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                other if other.starts_with("--") => {
                    return Err(CliError::Usage(format!("unrecognized flag '{other}'")));
                }
                positional => {
                    if trace_path.is_some() {
                        return Err(CliError::Usage(format!(
                            "unexpected extra positional argument '{positional}'"
                        )));
                    }
                    trace_path = Some(positional.to_string());
                    i += 1;
                }
            }
        }

        let trace_path = trace_path.ok_or_else(|| {
            CliError::Usage("missing required trace file path argument".to_string())
        })?;

        let base = if automaton_path.is_some() { BATCH_VERIFICATION_CONFIG } else { REALTIME_DEMO_CONFIG };
        let config = RuntimeConfig::new(
            capacity.unwrap_or(base.capacity),
            period_ms.unwrap_or(base.period_ms),
            emulator_mode.unwrap_or(base.emulator_mode),
            strict || base.strict,
        );

        Ok(Self { trace_path, automaton_path, config, json })
    }
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, CliError> {
    let value = args
        .get(*i + 1)
        .ok_or_else(|| CliError::Usage(format!("{flag} expects a value")))?
        .clone();
    *i += 2;
    Ok(value)
}
