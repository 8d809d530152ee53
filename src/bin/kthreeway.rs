//! kthreeway - Three-way merge CLI tool
//!
//! Merges a locally edited Kubernetes YAML/JSON resource into the latest
//! server copy, or lists the edits made to a resource.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kube_threeway::codec::{parse_document, Format};
use kube_threeway::{diff_to_path_ops, Conflict, MergeInput, Merger, Value};

/// Exit code used when the merge finished but left conflicts.
const CONFLICT_EXIT_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "kthreeway",
    version,
    about = "Three-way merge of edited Kubernetes YAML/JSON resources"
)]
struct Cli {
    /// Output location. Use '-' for stdout.
    #[arg(short, long, global = true, default_value = "-")]
    output: String,

    /// Document format (json or yaml). Sniffed from the base file when omitted.
    #[arg(short, long, global = true)]
    format: Option<Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge the local edits into the server copy.
    Merge {
        /// Snapshot both the local and the server copy started from.
        #[arg(long)]
        base: PathBuf,

        /// Locally edited copy.
        #[arg(long)]
        local: PathBuf,

        /// Latest copy from the server.
        #[arg(long)]
        server: PathBuf,

        /// Write the server file untouched when the local edits change nothing.
        #[arg(long)]
        keep_server_text: bool,
    },

    /// List the edits that turn base into local.
    Diff {
        #[arg(long)]
        base: PathBuf,

        #[arg(long)]
        local: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut rendered = Vec::new();

    let code = match cli.command {
        Command::Merge {
            base,
            local,
            server,
            keep_server_text,
        } => merge(
            &base,
            &local,
            &server,
            cli.format,
            keep_server_text,
            &mut rendered,
        )?,
        Command::Diff { base, local } => {
            diff(&base, &local, cli.format, &mut rendered)?;
            ExitCode::SUCCESS
        }
    };

    // Only touch the output once there is something to write.
    write_output(&cli.output, &rendered)?;
    Ok(code)
}

fn write_output(output: &str, rendered: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if output == "-" {
        io::stdout().write_all(rendered)?;
        return Ok(());
    }
    fs::write(output, rendered)
        .map_err(|e| format!("Failed to write output file {:?}: {}", output, e).into())
}

fn read(path: &Path, role: &str) -> Result<String, Box<dyn std::error::Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {} file {:?}: {}", role, path, e).into())
}

fn merge(
    base_file: &Path,
    local_file: &Path,
    server_file: &Path,
    format: Option<Format>,
    keep_server_text: bool,
    output: &mut dyn Write,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let base = read(base_file, "base")?;
    let local = read(local_file, "local")?;
    let server = read(server_file, "server")?;

    let merger = Merger::builder()
        .return_server_on_noop(keep_server_text)
        .build();
    let input = MergeInput::new(&base, &local, &server).with_format_hint(format);
    let result = merger.merge(&input)?;

    write!(output, "{}", result.merged_code)?;
    if !result.merged_code.ends_with('\n') {
        writeln!(output)?;
    }

    if !result.has_conflicts() {
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!("{} conflict(s), server values kept:", result.conflicts.len());
    for conflict in result.conflicts.iter() {
        report_conflict(conflict);
    }
    Ok(ExitCode::from(CONFLICT_EXIT_CODE))
}

fn report_conflict(conflict: &Conflict) {
    eprintln!("  {}", conflict);
    eprintln!("    base:   {}", render(conflict.base_value.as_ref()));
    eprintln!("    local:  {}", render(conflict.local_value.as_ref()));
    eprintln!("    server: {}", render(conflict.server_value.as_ref()));
}

fn render(value: Option<&Value>) -> String {
    match value {
        None => "<absent>".to_string(),
        Some(v) => serde_json::to_string(v).unwrap_or_else(|_| format!("{:?}", v)),
    }
}

fn diff(
    base_file: &Path,
    local_file: &Path,
    format: Option<Format>,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let base_text = read(base_file, "base")?;
    let local_text = read(local_file, "local")?;

    let format = Format::resolve(format, &base_text);
    let base = parse_document(&base_text, format)?;
    let local = parse_document(&local_text, format)?;

    let ops = diff_to_path_ops(&base, &local);
    if ops.is_empty() {
        writeln!(output, "Documents are identical")?;
        return Ok(());
    }
    for op in &ops {
        writeln!(output, "{}", op)?;
    }
    Ok(())
}
