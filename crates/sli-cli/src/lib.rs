//! sli-cli: argument parsing, thread wiring and process exit behavior for
//! the digital-twin trace runtime.

pub mod automaton_file;
pub mod error;
pub mod options;
pub mod pacing;
pub mod runner;

pub use error::CliError;
pub use options::CliOptions;

/// Parses arguments, wires the pipeline, prints the report, and returns the
/// process exit code: `0` when not verifying or when the run conforms, `1`
/// when a verification run ends with `fail > 0`.
pub fn main(args: &[String]) -> i32 {
    match try_main(args) {
        Ok(exit_code) => exit_code,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn try_main(args: &[String]) -> Result<i32, CliError> {
    let options = CliOptions::parse(args)?;

    let automaton = match &options.automaton_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Some(automaton_file::parse_automaton_file(&text)?)
        }
        None => None,
    };

    let (report, conforms) = runner::run(&options, automaton)?;

    if options.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(if conforms { 0 } else { 1 })
}
