//! # Slabwright CLI
//!
//! Command line front end for one-way slab design. It plays the part of an
//! input form: values come from flags, a JSON request file, or interactive
//! prompts; they are range-checked here and then handed to `slab_core`.
//!
//! ```text
//! slab_cli --span 4 --dead-load 3 --live-load 2 --concrete C25 --steel 460
//! slab_cli --input request.json --json
//! slab_cli --list-grades
//! ```
//!
//! Exit status: 0 on success, 2 when the request fails range validation,
//! 1 when the calculation itself fails or the request cannot be read.

mod logging;
mod report;
mod request;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use slab_core::{calculate, MaterialTable};

use request::SlabRequest;

/// Exit status for a request outside the accepted ranges
const EXIT_INVALID_REQUEST: u8 = 2;

/// Exit status for a failed calculation
const EXIT_CALCULATION_FAILED: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "slab_cli")]
#[command(about = "One-way reinforced concrete slab design (BS 8110)")]
struct Cli {
    /// Clear span (m); prompted for when omitted
    #[arg(long)]
    span: Option<f64>,

    /// Characteristic dead load (kN/m²); prompted for when omitted
    #[arg(long)]
    dead_load: Option<f64>,

    /// Characteristic imposed load (kN/m²); prompted for when omitted
    #[arg(long)]
    live_load: Option<f64>,

    /// Concrete grade (C20, C25, C30, C35, C40)
    #[arg(long, env = "SLAB_CONCRETE", default_value = request::DEFAULT_CONCRETE)]
    concrete: String,

    /// Steel grade (460, 500)
    #[arg(long, env = "SLAB_STEEL", default_value = request::DEFAULT_STEEL)]
    steel: String,

    /// Nominal cover (mm)
    #[arg(long, env = "SLAB_COVER", default_value_t = request::DEFAULT_COVER_MM)]
    cover: f64,

    /// Read the request from a JSON file instead of flags
    #[arg(short, long, conflicts_with_all = ["span", "dead_load", "live_load"])]
    input: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// List the selectable grades and bar sizes, then exit
    #[arg(long)]
    list_grades: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Ask for a number; an empty answer takes the default.
///
/// Non-numeric answers are rejected and asked again. End of input is an error.
fn prompt_f64(input: &mut impl BufRead, out: &mut impl Write, prompt: &str, default: f64) -> Result<f64> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no value entered for '{}'", prompt.trim());
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Please enter valid numeric values")?,
        }
    }
}

fn build_request(cli: &Cli, input: &mut impl BufRead, out: &mut impl Write) -> Result<SlabRequest> {
    if let Some(path) = &cli.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading request file {}", path.display()))?;
        let request = SlabRequest::from_json(&text)
            .with_context(|| format!("parsing request file {}", path.display()))?;
        return Ok(request);
    }

    let span_m = match cli.span {
        Some(value) => value,
        None => prompt_f64(input, out, "Enter span (m) [4.0]: ", 4.0)?,
    };
    let dead_load_kn_m2 = match cli.dead_load {
        Some(value) => value,
        None => prompt_f64(input, out, "Enter dead load (kN/m²) [3.0]: ", 3.0)?,
    };
    let live_load_kn_m2 = match cli.live_load {
        Some(value) => value,
        None => prompt_f64(input, out, "Enter live load (kN/m²) [2.0]: ", 2.0)?,
    };

    Ok(SlabRequest {
        span_m,
        dead_load_kn_m2,
        live_load_kn_m2,
        concrete_grade: cli.concrete.clone(),
        steel_grade: cli.steel.clone(),
        cover_mm: cli.cover,
    })
}

/// Run one invocation, returning the process exit status
fn run(cli: &Cli, input: &mut impl BufRead, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let table = MaterialTable::standard();

    if cli.list_grades {
        write!(out, "{}", report::render_grades(table))?;
        return Ok(0);
    }

    let request = build_request(cli, input, out)?;
    tracing::debug!(?request, "design request");

    let errors = request.validate();
    if !errors.is_empty() {
        for error in &errors {
            writeln!(err, "Error: {}", error)?;
        }
        return Ok(EXIT_INVALID_REQUEST);
    }

    let outcome = request.to_input().and_then(|slab| calculate(&slab, table));
    match outcome {
        Ok(result) => {
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                write!(out, "{}", report::render(&result))?;
            }
            Ok(0)
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "calculation failed");
            writeln!(err, "Calculation error: {}", e)?;
            writeln!(err)?;
            writeln!(err, "Error JSON:")?;
            writeln!(err, "{}", serde_json::to_string_pretty(&e)?)?;
            Ok(EXIT_CALCULATION_FAILED)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdin = io::stdin();
    match run(&cli, &mut stdin.lock(), &mut io::stdout(), &mut io::stderr()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    struct Outcome {
        code: u8,
        stdout: String,
        stderr: String,
    }

    fn invoke(args: &[&str], stdin: &str) -> Outcome {
        let cli = Cli::parse_from(std::iter::once("slab_cli").chain(args.iter().copied()));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&cli, &mut Cursor::new(stdin), &mut out, &mut err).unwrap();
        Outcome {
            code,
            stdout: String::from_utf8(out).unwrap(),
            stderr: String::from_utf8(err).unwrap(),
        }
    }

    fn write_request(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("slab_cli_{}_{}.json", name, std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_build_request() {
        let cli = Cli::parse_from([
            "slab_cli", "--span", "4", "--dead-load", "3", "--live-load", "2", "--concrete", "C30",
        ]);
        let request = build_request(&cli, &mut Cursor::new(""), &mut Vec::<u8>::new()).unwrap();
        assert_eq!(request.span_m, 4.0);
        assert_eq!(request.concrete_grade, "C30");
        assert_eq!(request.cover_mm, 25.0);
    }

    #[test]
    fn test_input_conflicts_with_span() {
        let parsed = Cli::try_parse_from(["slab_cli", "--input", "req.json", "--span", "4"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_successful_design_exits_zero() {
        let outcome = invoke(&["--span", "4", "--dead-load", "3", "--live-load", "2"], "");
        assert_eq!(outcome.code, 0);
        assert!(outcome.stdout.contains("RESULT: PASS"));
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_json_output() {
        let outcome = invoke(&["--span", "4", "--dead-load", "3", "--live-load", "2", "--json"], "");
        assert_eq!(outcome.code, 0);
        let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
        assert_eq!(value["slab_depth_mm"], 175);
    }

    #[test]
    fn test_out_of_range_request_exits_two() {
        let outcome = invoke(&["--span", "20", "--dead-load", "3", "--live-load", "25"], "");
        assert_eq!(outcome.code, EXIT_INVALID_REQUEST);
        assert!(outcome.stderr.contains("Error: Span must be between 0.1m and 12m"));
        assert!(outcome.stderr.contains("Error: Live load must be between 0 and 20 kN/m²"));
        assert!(outcome.stdout.is_empty());
    }

    #[test]
    fn test_unknown_grade_from_file_reports_error_json() {
        let path = write_request(
            "unknown_grade",
            r#"{ "span_m": 4.0, "dead_load_kn_m2": 3.0, "live_load_kn_m2": 2.0, "concrete_grade": "C99" }"#,
        );
        let outcome = invoke(&["--input", path.to_str().unwrap()], "");
        std::fs::remove_file(&path).unwrap();

        assert_eq!(outcome.code, EXIT_CALCULATION_FAILED);
        assert!(outcome.stderr.contains("Calculation error: Unknown concrete grade: 'C99'"));
        let json = outcome.stderr.split("Error JSON:").nth(1).unwrap();
        let value: serde_json::Value = serde_json::from_str(json.trim()).unwrap();
        assert_eq!(value["type"], "UnknownGrade");
        assert_eq!(value["details"]["grade"], "C99");
    }

    #[test]
    fn test_malformed_request_file_is_an_error() {
        let path = write_request("malformed", r#"{ "span_m": "four" }"#);
        let cli = Cli::parse_from(["slab_cli", "--input", path.to_str().unwrap()]);
        let result = run(&cli, &mut Cursor::new(""), &mut Vec::<u8>::new(), &mut Vec::<u8>::new());
        std::fs::remove_file(&path).unwrap();

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("parsing request file"));
        assert!(message.contains("Serialization error"));
    }

    #[test]
    fn test_prompt_rejects_non_numeric_answer() {
        let mut out = Vec::new();
        let value = prompt_f64(&mut Cursor::new("abc\n5.5\n"), &mut out, "Span: ", 4.0).unwrap();
        assert_eq!(value, 5.5);

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Span: ").count(), 2);
        assert!(shown.contains("Please enter valid numeric values"));
    }

    #[test]
    fn test_prompt_empty_answer_takes_default() {
        let value = prompt_f64(&mut Cursor::new("\n"), &mut Vec::<u8>::new(), "Span: ", 4.0).unwrap();
        assert_eq!(value, 4.0);
    }

    #[test]
    fn test_prompt_end_of_input_is_an_error() {
        let result = prompt_f64(&mut Cursor::new("abc\n"), &mut Vec::<u8>::new(), "Span: ", 4.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_values_are_prompted_for() {
        let outcome = invoke(&["--span", "4"], "3\n2\n");
        assert_eq!(outcome.code, 0);
        assert!(outcome.stdout.contains("Enter dead load"));
        assert!(outcome.stdout.contains("Enter live load"));
        assert!(outcome.stdout.contains("h = 175 mm"));
    }
}
