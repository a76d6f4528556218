//! CLI entry point for gleaner

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use gleaner::output::write_language_table;
use gleaner::{
    CommentFilter, Error, FileComments, FileResult, KindFilter, Language, OutputConfig,
    OutputFormat, Walker, WalkerConfig, extract_comments_from_str, print_results,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gleaner")]
#[command(about = "Extract comments from source files, ignoring comment markers inside strings")]
#[command(version)]
struct Args {
    /// Files or directories to scan ("-" reads stdin, requires --language)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Scan with this language's rules instead of guessing from extensions.
    /// While walking directories, only files of this language are scanned
    #[arg(short = 'l', long = "language", value_name = "LANG", value_parser = parse_language)]
    language: Option<Language>,

    /// Scan all files (ignore .gitignore and hidden-file filtering)
    #[arg(short, long)]
    all: bool,

    /// Ignore files matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "DEPTH")]
    level: Option<usize>,

    /// Number of parallel workers for extraction
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Maximum file size to scan (default: 1MB)
    /// Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Show only block comments
    #[arg(long = "multiline-only", conflicts_with = "single_line_only")]
    multiline_only: bool,

    /// Show only line comments
    #[arg(long = "single-line-only")]
    single_line_only: bool,

    /// Show only comments whose text matches REGEX
    #[arg(long = "matching", value_name = "REGEX")]
    matching: Option<String>,

    /// Do not print the comment/file count after text output
    #[arg(long = "no-summary")]
    no_summary: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// List supported languages and their comment syntax, then exit
    #[arg(long = "list-languages")]
    list_languages: bool,
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_name(s).ok_or_else(|| {
        format!("unknown language '{}' (see --list-languages)", s)
    })
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Scan standard input with the given language's rules.
fn extract_stdin(language: Language) -> FileResult {
    let path = PathBuf::from("-");
    let mut code = String::new();
    io::stdin()
        .read_to_string(&mut code)
        .map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
    let code = code.strip_prefix('\u{FEFF}').unwrap_or(code.as_str());

    let comments = extract_comments_from_str(code, language).map_err(|source| Error::Scan {
        path: path.clone(),
        source,
    })?;
    Ok(FileComments {
        path,
        language,
        comments,
    })
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_languages {
        if let Err(e) = write_language_table(io::stdout().lock()) {
            eprintln!("gleaner: error writing output: {}", e);
            process::exit(1);
        }
        return;
    }

    if let Some(ref size_str) = args.max_file_size {
        match parse_file_size(size_str) {
            Ok(size) => gleaner::file_utils::set_max_file_size(size),
            Err(e) => {
                eprintln!("gleaner: invalid --max-file-size '{}': {}", size_str, e);
                process::exit(1);
            }
        }
    }

    let stdin = Path::new("-");
    if args.language.is_none() && args.paths.iter().any(|p| p == stdin) {
        eprintln!("gleaner: reading from stdin requires --language");
        process::exit(1);
    }

    let kind = if args.multiline_only {
        KindFilter::Multiline
    } else if args.single_line_only {
        KindFilter::SingleLine
    } else {
        KindFilter::All
    };
    let filter = CommentFilter::new(kind, args.matching.as_deref()).unwrap_or_else(|e| {
        eprintln!("gleaner: {}", e);
        process::exit(1);
    });

    let walker = Walker::new(WalkerConfig {
        show_all: args.all,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
        language: args.language,
        parallel_workers: args.jobs,
    });

    let mut results: Vec<FileResult> = Vec::new();
    for path in &args.paths {
        match args.language {
            Some(language) if path == stdin => results.push(extract_stdin(language)),
            _ => match walker.run(std::slice::from_ref(path)) {
                Ok(found) => results.extend(found),
                Err(e) => results.push(Err(e)),
            },
        }
    }
    debug!(files = results.len(), "extraction finished");

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        filter,
        summary: !args.no_summary,
    };

    match print_results(results, &output_config) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("gleaner: error writing output: {}", e);
            process::exit(1);
        }
    }
}
