//! CLI binary for img2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to a
//! `ConversionRequest` + `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use img2pdf::{
    convert, ConversionConfig, ConversionProgressCallback, ConversionRequest, ProgressCallback,
    Source,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar and a per-image
/// log line as the pipeline decodes each file.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    /// Create a callback whose progress-bar length is set by
    /// `on_conversion_start` (called once enumeration is done).
    fn new_dynamic() -> std::sync::Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_conversion_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.enable_steady_tick(Duration::from_millis(80));

        std::sync::Arc::new(Self { bar })
    }
}

impl ConversionProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, total_pages: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} images  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        self.bar.set_length(total_pages as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Converting");
    }

    fn on_page_start(&self, _page_num: usize, _total_pages: usize, source: &Path) {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar.set_message(name);
    }

    fn on_page_complete(&self, page_num: usize, total_pages: usize, source: &Path) {
        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {}",
            green("✓"),
            page_num,
            total_pages,
            dim(&source.display().to_string()),
        ));
        self.bar.inc(1);
    }

    fn on_page_error(&self, page_num: usize, total_pages: usize, error: String) {
        let msg = truncate_message(error);
        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {}",
            red("✗"),
            page_num,
            total_pages,
            red(&msg),
        ));
    }

    fn on_conversion_complete(&self, _total_pages: usize) {
        self.bar.finish_and_clear();
    }
}

/// Truncate very long error messages to keep the per-image log tidy.
///
/// Counts characters, not bytes — decode errors embed file paths, and a
/// byte-offset slice could land inside a multi-byte character.
fn truncate_message(error: String) -> String {
    if error.chars().count() > 80 {
        let cut: String = error.chars().take(79).collect();
        format!("{cut}\u{2026}")
    } else {
        error
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert one image (output: photo_YYYYMMDD_HHMMSS.pdf next to the input)
  img2pdf -i photo.jpg

  # Convert one image to an explicit path
  img2pdf -i photo.jpg -o photo.pdf

  # Combine a folder into one multi-page PDF, pages sorted by file name
  # (output: combined_scans_YYYYMMDD_HHMMSS.pdf)
  img2pdf -f scans/

  # Combine with explicit output and higher resolution metadata
  img2pdf -f scans/ -o book.pdf --dpi 300

  # Structured result on stdout
  img2pdf -i photo.jpg --json

ACCEPTED EXTENSIONS (folder mode):
  .png .jpg .jpeg .bmp .tiff .gif  (case-insensitive)
  Single-image mode has no filter — it attempts to decode whatever it is given.

EXIT STATUS:
  0  success (PDF written)
  1  any failure (missing input, decode error, empty folder, write error)
"#;

/// Convert raster images to PDF documents.
#[derive(Parser, Debug)]
#[command(
    name = "img2pdf",
    version,
    about = "Convert raster images to PDF — single files or whole folders",
    long_about = "Convert a single raster image into a one-page PDF, or combine every \
supported image in a folder (sorted by name) into a single multi-page PDF.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP,
    group = ArgGroup::new("source").required(true).args(["image", "folder"])
)]
struct Cli {
    /// Convert a single image file.
    #[arg(short, long, value_name = "IMAGE_PATH")]
    image: Option<PathBuf>,

    /// Combine every supported image in a folder into one multi-page PDF.
    #[arg(short, long, value_name = "FOLDER_PATH")]
    folder: Option<PathBuf>,

    /// Output PDF path. Defaults to a timestamped name next to the input.
    #[arg(short, long, env = "IMG2PDF_OUTPUT")]
    output: Option<PathBuf>,

    /// Resolution metadata in pixels per inch (fixes the physical page size).
    #[arg(long, env = "IMG2PDF_DPI", default_value_t = 100,
          value_parser = clap::value_parser!(u32).range(12..=1200))]
    dpi: u32,

    /// Title for the PDF metadata. Defaults to the input's name.
    #[arg(long, env = "IMG2PDF_TITLE")]
    title: Option<String>,

    /// Output the result as JSON instead of the one-line summary.
    #[arg(long)]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, env = "IMG2PDF_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "IMG2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "IMG2PDF_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build request + config ───────────────────────────────────────────
    let source = match (&cli.image, &cli.folder) {
        (Some(path), None) => Source::Image(path.clone()),
        (None, Some(path)) => Source::Folder(path.clone()),
        // clap's ArgGroup guarantees exactly one selector.
        _ => unreachable!("clap enforces exactly one of --image/--folder"),
    };
    let input_display = match &source {
        Source::Image(p) | Source::Folder(p) => p.display().to_string(),
    };
    let request = ConversionRequest {
        source,
        output: cli.output.clone(),
    };

    let mut builder = ConversionConfig::builder().dpi(cli.dpi);
    if let Some(ref title) = cli.title {
        builder = builder.title(title.clone());
    }
    if show_progress {
        let cb = CliProgressCallback::new_dynamic();
        builder = builder.progress_callback(cb as ProgressCallback);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let result = convert(&request, &config).context("Conversion failed")?;

    if cli.json {
        let json =
            serde_json::to_string_pretty(&result).context("Failed to serialise output")?;
        println!("{json}");
    } else if !cli.quiet {
        let pages = result.page_count();
        println!(
            "{} {} → {}  {}",
            green("✔"),
            input_display,
            bold(&result.output_path.display().to_string()),
            dim(&format!(
                "({} page{}, {} bytes, {}ms)",
                pages,
                if pages == 1 { "" } else { "s" },
                result.stats.output_bytes,
                result.stats.total_duration_ms
            )),
        );
    }

    Ok(())
}
