//! Textual automaton definitions loaded with `--automaton`.
//!
//! ```text
//! init s0
//! s0 -> s1 : v > 0
//! s1 -> s1 : v > 0
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::error::CliError;
use sli_automaton::{parse_guard, Automaton, Transition};

pub fn parse_automaton_file(text: &str) -> Result<Automaton, CliError> {
    let mut initial_states = Vec::new();
    let mut transitions = Vec::new();

    for (offset, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_number = offset + 1;

        if let Some(state) = line.strip_prefix("init ") {
            initial_states.push(state.trim().to_string());
            continue;
        }

        let (from_part, rest) = line.split_once("->").ok_or_else(|| CliError::Automaton {
            line: line_number,
            detail: "expected 'from -> to : guard' or 'init state'".to_string(),
        })?;
        let (to_part, guard_part) = rest.split_once(':').ok_or_else(|| CliError::Automaton {
            line: line_number,
            detail: "expected 'from -> to : guard'".to_string(),
        })?;

        let from = from_part.trim();
        let to = to_part.trim();
        let guard_text = guard_part.trim();
        if from.is_empty() || to.is_empty() || guard_text.is_empty() {
            return Err(CliError::Automaton {
                line: line_number,
                detail: "from, to and guard must all be non-empty".to_string(),
            });
        }

        let guard = parse_guard(guard_text)?;
        transitions.push(Transition::new(from, guard, to));
    }

    if initial_states.is_empty() {
        return Err(CliError::Automaton { line: 0, detail: "no 'init' line found".to_string() });
    }

    let mut automaton = Automaton::new(initial_states);
    for transition in transitions {
        automaton = automaton.with_transition(transition);
    }
    Ok(automaton)
}
