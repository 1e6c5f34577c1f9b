use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

const SOURCE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in
1,Movie,Alpha,Jane Doe,\"Ada, Bob\",Brazil,\"March 4, 2019\",2016,TV-G,90 min,Drama
2,Series,Beta,,,,,,,,
3,Movie,Gamma,John Roe,Carol,Chile,\"May 12, 2021\",2020,PG,100 min,\"Comedy, drama\"
";

fn run_with_input(args: &[&str], input: &[u8]) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_marquee"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn bench_stdout_is_only_verdict_lines() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("catalog.csv");
    fs::write(&source, SOURCE).unwrap();
    let report = dir.path().join("report.txt");

    let output = run_with_input(
        &[
            "bench",
            "--source",
            source.to_str().unwrap(),
            "--report",
            report.to_str().unwrap(),
            "--label",
            "877284",
        ],
        b"1\n3\nFIM\nGamma\nDelta\nFIM\n",
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "SIM\nNAO\n");

    // The milestones stay on the diagnostic channel
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("catalog loaded"));

    let written = fs::read_to_string(&report).unwrap();
    assert!(written.starts_with("877284\t"));
    assert!(written.ends_with("Comparisons: 4"));
}

#[test]
fn print_stdout_is_only_record_lines() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("catalog.csv");
    fs::write(&source, SOURCE).unwrap();

    let output = run_with_input(
        &["print", "--source", source.to_str().unwrap()],
        b"3 1 2\nFIM\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.starts_with("=> ")));
}
