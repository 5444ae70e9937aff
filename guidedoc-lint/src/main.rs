// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use guidedoc_lint::{
    CategoryPolicy, FrontMatterMode, FsSourceConfig, LintConfig, lint_fs, output,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable plain text
    Text,
    /// Machine-readable JSON
    Json,
}

/// Lint Markdown guide corpora: front-matter schema, dates, tags, code fences.
#[derive(Debug, Parser)]
#[command(name = "guidedoc-lint", version, about)]
struct Cli {
    /// Paths to scan (files or directories)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Exclude patterns (glob format), repeatable
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Require every guide to carry exactly this category
    #[arg(long, value_name = "CATEGORY", conflicts_with = "allow_category")]
    category: Option<String>,

    /// Allow only these categories, repeatable
    #[arg(long = "allow-category", value_name = "CATEGORY")]
    allow_category: Vec<String>,

    /// Allow only these `type` values, repeatable (empty: any non-empty type)
    #[arg(long = "type", value_name = "TYPE")]
    allowed_types: Vec<String>,

    /// Skip files without a front-matter block instead of erroring
    #[arg(long)]
    optional_front_matter: bool,

    /// Maximum file size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = 10_485_760)]
    max_file_size: u64,

    /// Follow symbolic links (off by default: symlinks can escape the corpus)
    #[arg(long)]
    follow_links: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut fs_config = FsSourceConfig::default();
    fs_config.paths = cli.paths.clone();
    fs_config.exclude = cli.exclude.clone();
    fs_config.max_file_size = cli.max_file_size;
    fs_config.follow_links = cli.follow_links;

    let mut lint_config = LintConfig::default();
    lint_config.category_policy = if let Some(category) = &cli.category {
        CategoryPolicy::MustMatch(category.clone())
    } else if cli.allow_category.is_empty() {
        CategoryPolicy::Any
    } else {
        CategoryPolicy::AllowList(cli.allow_category.clone())
    };
    lint_config.allowed_types = cli.allowed_types.clone();
    lint_config.front_matter = if cli.optional_front_matter {
        FrontMatterMode::Optional
    } else {
        FrontMatterMode::Required
    };

    let report = lint_fs(&fs_config, &lint_config)?;

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
        OutputFormat::Text => output::write_human(&report, &mut stdout)?,
    }
    stdout.flush()?;

    Ok(report.ok)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
