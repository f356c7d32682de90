use sli_cli::options::CliOptions;
use sli_cli::runner;
use std::io::Write;

fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("sli-cli-test-{name}-{}.csv", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn trace_only_run_reports_drops_and_consumed_inputs() {
    let path = write_temp_csv("trace-only", "t,v\n0,1\n1,2\n2,3\n3,4\n4,5\n");
    let args: Vec<String> =
        vec!["--capacity".into(), "3".into(), path.to_str().unwrap().into()];
    let options = CliOptions::parse(&args).unwrap();

    let (report, conforms) = runner::run(&options, None).unwrap();
    assert!(conforms);
    assert!(report.verification.is_none());
    assert_eq!(report.inputs_consumed, 5);
    assert_eq!(report.outputs_produced, 4);

    std::fs::remove_file(&path).ok();
}

#[test]
fn verification_run_fails_when_guard_is_violated() {
    let path = write_temp_csv("verification", "t,v\n0,1\n1,-1\n2,2\n");
    let args: Vec<String> =
        vec!["--automaton".into(), "dummy".into(), path.to_str().unwrap().into()];
    let options = CliOptions::parse(&args).unwrap();

    let automaton = sli_cli::automaton_file::parse_automaton_file(
        "init s0\ns0 -> s1 : v > 0\ns1 -> s1 : v > 0\n",
    )
    .unwrap();

    let (report, conforms) = runner::run(&options, Some(automaton)).unwrap();
    assert!(!conforms);
    let verification = report.verification.unwrap();
    assert_eq!(verification.total_steps, 2);
    assert!(verification.fail >= 1);

    std::fs::remove_file(&path).ok();
}
