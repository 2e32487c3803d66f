use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use json2fig::{ConversionOptions, FontBook, SchemaHint};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "json2fig")]
#[command(version, about = "Convert design exports and extracted web pages to scene JSON")]
#[command(long_about = "Convert design exports and extracted web pages to scene JSON\n\n\
    Input is JSON, optionally gzip or Zstandard compressed. JSON output is\n\
    pretty-printed by default with indentation.\n\n\
    For a single document:\n  \
    json2fig input.json [-o output.json] [--compact] [-v]\n\n\
    For ZIP files (extracts all and converts every .json document inside):\n  \
    json2fig input.zip extract-dir [--compact] [-v]")]
struct Cli {
    /// Input .json (optionally compressed) or .zip file path
    input: PathBuf,

    /// Directory to extract ZIP contents (required for ZIP files, converts all .json files found)
    extract_dir: Option<PathBuf>,

    /// Output JSON file path (default: stdout) - Cannot be used with extract_dir
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compact JSON output (default is pretty-printed with indentation)
    #[arg(long)]
    compact: bool,

    /// Verbose output for debugging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Input schema, sniffed from the document structure by default
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// JSON file with conversion options (camelCase keys, as sent by the panel)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Comma-separated font families available for text (default: every family)
    #[arg(long, value_delimiter = ',')]
    fonts: Vec<String>,

    /// Return the frames of a multi-frame export as separate roots
    #[arg(long)]
    no_wrap_frames: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Auto,
    Native,
    Markup,
}

impl From<FormatArg> for SchemaHint {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Auto => SchemaHint::Auto,
            FormatArg::Native => SchemaHint::Native,
            FormatArg::Markup => SchemaHint::Markup,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = load_options(&cli)?;

    log::info!("Reading input file: {}", cli.input.display());

    // Read input file
    let bytes = fs::read(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;

    log::info!("File size: {} bytes", bytes.len());

    // Validate arguments based on file type
    if json2fig::input::is_zip_container(&bytes) {
        // ZIP mode: require extract_dir, forbid -o
        let extract_dir = cli
            .extract_dir
            .as_ref()
            .ok_or_else(|| anyhow!("ZIP files require an extraction directory as second argument"))?;

        if cli.output.is_some() {
            bail!("Cannot use -o/--output flag with extraction directory (ZIP mode)");
        }

        if extract_dir.exists() {
            bail!(
                "Extraction directory already exists: {}\nPlease remove it first",
                extract_dir.display()
            );
        }

        handle_zip_mode(&bytes, extract_dir, &cli, &options)?;
    } else {
        if cli.extract_dir.is_some() {
            bail!("An extraction directory can only be used with ZIP input");
        }

        let output = convert_document(&bytes, &cli, &options)?;

        // Write output
        match cli.output.as_ref() {
            Some(path) => {
                log::info!("Writing output to: {}", path.display());
                fs::write(path, &output)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            }
            None => {
                println!("{}", output);
            }
        }
    }

    Ok(())
}

/// Options from `--options`, then overridden by dedicated flags
fn load_options(cli: &Cli) -> Result<ConversionOptions> {
    let mut options = match &cli.options {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file: {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid options file: {}", path.display()))?
        }
        None => ConversionOptions::default(),
    };

    if cli.no_wrap_frames {
        options.wrap_frames = false;
    }

    Ok(options)
}

/// Convert one document and format the result
fn convert_document(bytes: &[u8], cli: &Cli, options: &ConversionOptions) -> Result<String> {
    let mut fonts = if cli.fonts.is_empty() {
        FontBook::permissive()
    } else {
        FontBook::with_families(cli.fonts.iter().map(|f| f.trim()))
    };

    let conversion = json2fig::convert_bytes(bytes, cli.format.into(), options, &mut fonts)
        .context("Failed to convert document")?;

    log::info!(
        "Conversion successful: {} node(s), {} font request(s)",
        conversion.summary.created,
        fonts.requested().len()
    );
    for line in json2fig::scene::layer_structure(&conversion.roots) {
        log::debug!("{}", line);
    }

    // Format output (pretty by default, compact if flag is set)
    let output = if cli.compact {
        serde_json::to_string(&conversion)?
    } else {
        serde_json::to_string_pretty(&conversion)?
    };

    Ok(output)
}

/// Handle ZIP extraction mode: extract all files and convert all .json files found
fn handle_zip_mode(
    zip_bytes: &[u8],
    extract_dir: &Path,
    cli: &Cli,
    options: &ConversionOptions,
) -> Result<()> {
    log::info!("ZIP file detected - extracting to: {}", extract_dir.display());

    json2fig::input::extract_zip_to_directory(zip_bytes, extract_dir)
        .context("Failed to extract ZIP file")?;

    let json_files = json2fig::input::find_json_files(extract_dir)?;

    if json_files.is_empty() {
        bail!("No .json files found in ZIP archive");
    }

    let file_count = json_files.len();
    log::info!("Found {} .json file(s)", file_count);

    for json_path in json_files {
        let relative_path = json_path.strip_prefix(extract_dir).unwrap_or(&json_path);
        log::info!("Converting: {}", relative_path.display());

        let json_bytes = fs::read(&json_path)
            .with_context(|| format!("Failed to read file: {}", json_path.display()))?;

        let output = convert_document(&json_bytes, cli, options)
            .with_context(|| format!("Failed to convert: {}", json_path.display()))?;

        let output_path = json2fig::input::scene_output_path(&json_path);
        fs::write(&output_path, output)
            .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

        log::info!(
            "  -> {}",
            output_path
                .strip_prefix(extract_dir)
                .unwrap_or(&output_path)
                .display()
        );
    }

    log::info!("Done! Converted {} file(s)", file_count);

    Ok(())
}
