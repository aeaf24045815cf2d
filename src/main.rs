use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use time::macros::format_description;
use tracing::{Level, info};
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;

use compact_sha1::{Digest, InputError, STDIN, from_hex, hash_file, sha1_hash, to_hex, vectors};

#[derive(Parser, Debug)]
#[command(name="csha1", version, about="Compute SHA-1 (FIPS 180-4) digests")]
struct Args {
    #[arg(short, long, help="Hash this string instead of a file (repeatable)")]
    string: Vec<String>,

    #[arg(short='t', long, help="Run the built-in known-answer tests")]
    self_test: bool,

    #[arg(short, long, value_name="HEX", help="Compare the digest of the single input against HEX")]
    check: Option<String>,

    #[arg(long, value_name="DIR", help="Write logs to DIR/csha1.log instead of stderr")]
    log_dir: Option<PathBuf>,

    #[arg(help="Files to hash, `-` for standard input")]
    files: Vec<PathBuf>,
}

fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let timer = LocalTime::new(
        format_description!("[month]/[day]/[year] [hour repr:24]:[minute]:[second].[subsecond digits:4]"));
    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "csha1.log");
            let (non_blocking, guard) = non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_max_level(Level::DEBUG)
                .with_timer(timer)
                .init();
            Some(guard)
        },
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_max_level(Level::WARN)
                .with_timer(timer)
                .init();
            None
        },
    }
}

fn run_self_test() -> bool {
    let outcomes = vectors::self_test();
    for outcome in &outcomes {
        println!("{outcome}");
    }
    outcomes.iter().all(|o| o.passed())
}

fn progress_bar(len: usize) -> ProgressBar {
    if len < 2 {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template("{bar:40} {pos}/{len} files")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(len as u64).with_style(style)
}

async fn hash_files(files: &[PathBuf]) -> Vec<(String, Result<Digest, InputError>)> {
    let tasks: Vec<_> = files.iter()
        .map(|path| tokio::spawn(hash_file(path.clone())))
        .collect();

    let bar = progress_bar(files.len());
    let mut results = Vec::with_capacity(tasks.len());
    for (path, task) in files.iter().zip(tasks) {
        let result = match task.await {
            Ok(r) => r,
            Err(e) => Err(InputError::from(e)),
        };
        bar.inc(1);
        results.push((path.display().to_string(), result));
    }
    bar.finish_and_clear();
    results
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = init_logging(args.log_dir.as_deref());

    let mut ok = true;
    if args.self_test {
        ok &= run_self_test();
        if args.string.is_empty() && args.files.is_empty() {
            return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
        }
    }

    let mut files = args.files;
    if args.string.is_empty() && files.is_empty() {
        files.push(PathBuf::from(STDIN));
    }

    let expected = match args.check.as_deref().map(from_hex).transpose() {
        Ok(expected) => expected,
        Err(e) => {
            eprintln!("csha1: --check: {e}");
            return ExitCode::from(2);
        }
    };
    if expected.is_some() && args.string.len() + files.len() != 1 {
        eprintln!("csha1: --check takes exactly one input");
        return ExitCode::from(2);
    }

    info!(strings = args.string.len(), files = files.len(), "hashing inputs");

    let mut results: Vec<(String, Result<Digest, InputError>)> = args.string
        .iter()
        .map(|s| (format!("\"{s}\""), Ok(sha1_hash(s.as_bytes()))))
        .collect();
    results.extend(hash_files(&files).await);

    for (name, result) in results {
        match (result, expected) {
            (Ok(hash), Some(expected)) => {
                let matched = hash == expected;
                println!("{}: {}", name, if matched { "OK" } else { "FAILED" });
                ok &= matched;
            },
            (Ok(hash), None) => println!("{}  {}", to_hex(&hash), name),
            (Err(e), _) => {
                eprintln!("csha1: {e}");
                ok = false;
            },
        }
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
