//! Test runner that compares converter output against .expected.ts files
//!
//! Run with: cargo test --test expected_tests

use libtest_mimic::{Arguments, Failed, Trial};
use std::fs;
use std::path::{Path, PathBuf};

/// Collect all .py case files
fn collect_cases() -> Vec<PathBuf> {
    let pattern = format!("{}/tests/cases/**/*.py", env!("CARGO_MANIFEST_DIR"));
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .expect("valid glob pattern")
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    files
}

fn check_case(path: &Path) -> Result<(), Failed> {
    let expected_ts = path.with_extension("expected.ts");
    if !expected_ts.exists() {
        return Err(format!("Missing expected file: {}", expected_ts.display()).into());
    }

    let source = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let expected = fs::read_to_string(&expected_ts).map_err(|e| e.to_string())?;

    let code = pyts_transpiler::convert(&source)
        .map_err(|e| format!("Convert error for {}: {}", path.display(), e))?;

    if code.trim() != expected.trim() {
        return Err(format!(
            "Output mismatch: {}\n--- expected ---\n{}\n--- actual ---\n{}",
            path.display(),
            expected.trim(),
            code.trim()
        )
        .into());
    }

    Ok(())
}

fn main() {
    let args = Arguments::from_args();

    let trials: Vec<Trial> = collect_cases()
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("case")
                .to_string();
            Trial::test(name, move || check_case(&path))
        })
        .collect();

    libtest_mimic::run(&args, trials).exit();
}
