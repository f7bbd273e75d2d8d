use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tenthash::params::Params;
use tenthash::vectors::{verify, TestVector, TEST_VECTORS};
use tenthash::TENTHASH;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Print TentHash digests of files, or check the built-in test vectors.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Files to hash. Reads standard input when empty or `-`.
    files: Vec<PathBuf>,
    /// Run the built-in test vectors instead of hashing input.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut out = io::stdout().lock();

    if args.check {
        let passed = check(&TENTHASH, TEST_VECTORS, &mut out)?;
        return Ok(if passed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    hash_paths(&args.files, io::stdin().lock(), &mut out)?;
    Ok(ExitCode::SUCCESS)
}

/// Writes `<digest>  <name>` for every path, reading `stdin` for `-` or when
/// no path is given.
fn hash_paths(files: &[PathBuf], mut stdin: impl Read, out: &mut impl Write) -> Result<()> {
    if files.is_empty() {
        return hash_reader("-", &mut stdin, out);
    }
    for path in files {
        if path.as_os_str() == "-" {
            hash_reader("-", &mut stdin, out)?;
        } else {
            hash_file(path, out)?;
        }
    }
    Ok(())
}

fn hash_file(path: &Path, out: &mut impl Write) -> Result<()> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    debug!(file = %path.display(), len = data.len(), "hashing file");
    writeln!(out, "{}  {}", tenthash::hash(&data)?, path.display())?;
    Ok(())
}

fn hash_reader(name: &str, input: &mut impl Read, out: &mut impl Write) -> Result<()> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .with_context(|| format!("reading {}", name))?;
    debug!(input = name, len = data.len(), "hashing stream");
    writeln!(out, "{}  {}", tenthash::hash(&data)?, name)?;
    Ok(())
}

/// Prints PASS/FAIL per vector and returns whether all of them passed.
fn check(params: &Params, vectors: &[TestVector], out: &mut impl Write) -> Result<bool> {
    let outcomes = verify(params, vectors)?;

    let mut failures = 0;
    for o in &outcomes {
        if o.passed() {
            writeln!(out, "PASS  {}", o.name)?;
        } else {
            writeln!(out, "FAIL  {}: got {}, want {}", o.name, o.actual, o.expected)?;
            failures += 1;
        }
    }
    info!(total = outcomes.len(), failures, "test vectors checked");

    if failures == 0 {
        writeln!(out, "All test vectors passed.")?;
    } else {
        writeln!(out, "{} of {} test vectors failed.", failures, outcomes.len())?;
    }
    Ok(failures == 0)
}
