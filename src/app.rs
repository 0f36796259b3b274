//! End-to-end pipeline for one invocation: resolve settings, build the
//! exclusion set, walk, rank, display, then the interactive cleanup pass.

use std::io;
use std::path::Path;

use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::deleter::InteractiveDeleter;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::display;
use crate::platform::NativeProbe;
use crate::progress::{NullProgress, ProgressSink, SpinnerProgress};
use crate::scanner::{self, exclusions, paths, ScanRequest, TreeScanner};

pub fn run(cli: Cli, config: Config) -> Result<()> {
    if !cfg!(windows) {
        anyhow::bail!("this tool manages the Windows Recycle Bin and only runs on Windows");
    }

    let diag = TracingDiagnostics;

    // CLI wins over config, config over built-in defaults
    let min_size_text = cli.min_size.unwrap_or_else(|| config.scan.min_size.clone());
    let min_size_bytes = scanner::parse_size(&min_size_text)?;
    let top = cli.top.unwrap_or(config.scan.top);

    let root = paths::normalize(&cli.path);
    paths::ensure_directory(&root)?;

    if !cli.quiet && !cli.json {
        println!(
            "Starting scan of {} for files >= {}...",
            root.display(),
            min_size_text.trim()
        );
    }

    let mut raw_exclusions: Vec<String> = Vec::new();
    raw_exclusions.extend(cli.exclude.iter().cloned());
    raw_exclusions.extend(config.scan.exclude.iter().cloned());
    let ignore_file = Path::new(exclusions::IGNORE_FILE_NAME);
    if ignore_file.is_file() {
        diag.info(&format!(
            "loading exclusions from '{}'",
            ignore_file.display()
        ));
        raw_exclusions.extend(exclusions::read_ignore_file(ignore_file));
    }

    let baseline = exclusions::baseline(&root);
    let (excluded, validated) = exclusions::merge(baseline, &raw_exclusions, &diag);
    for path in &validated {
        diag.info(&format!("user exclusion: {}", path.display()));
    }
    if !cli.quiet && !cli.json {
        println!(
            "Excluding {} key system/program directories.",
            excluded.len()
        );
    }

    let request = ScanRequest {
        root,
        min_size_bytes,
        excluded,
    };
    let probe = NativeProbe;
    let progress: Box<dyn ProgressSink> = if cli.json || cli.quiet {
        Box::new(NullProgress)
    } else {
        Box::new(SpinnerProgress::new())
    };
    let records = TreeScanner::new(&probe, &diag, progress.as_ref()).scan(&request);

    let ranked = scanner::rank(records, top);

    if cli.json {
        display::print_json(&ranked.entries, &mut io::stdout().lock())?;
        return Ok(());
    }

    let width = display::terminal_width();
    display::print_results(&ranked, width, &mut io::stdout().lock())?;

    if ranked.entries.is_empty() {
        println!("\nDone.");
        return Ok(());
    }

    let deleter = InteractiveDeleter::new(&diag, width);
    let summary = deleter.run(
        &ranked.entries,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;

    println!(
        "\nDone. {} moved to the recycle bin, {} skipped, {} failed.",
        summary.trashed, summary.skipped, summary.failed
    );

    Ok(())
}
