//! The `skinpack generate` command.

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use skinpack_core::output::{to_json, write_document};
use skinpack_core::{
    AssemblyObserver, Config, FileDiscovery, PathSkin, SkinAssembler, SkinDocument, SkinRecord,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Skin file or directory of skins
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (defaults to `output.directory` / `output.file_name` from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Also pick up skins in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Milliseconds between consecutive record timestamps
    #[arg(long)]
    pub step_ms: Option<u64>,
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, mut config: Config) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!(
            "Input path does not exist: {:?}\n\n  Hint: Check the file path and try again.",
            args.input
        );
    }

    if args.recursive {
        config.input.recursive = true;
    }
    if let Some(step_ms) = args.step_ms {
        if step_ms == 0 {
            anyhow::bail!("--step-ms must be greater than 0");
        }
        config.timestamps.step_ms = step_ms;
    }

    let discovered = FileDiscovery::new(config.input.clone()).discover(&args.input);
    if !discovered.skipped.is_empty() {
        tracing::warn!(
            "{} file(s) without a supported extension ({}) will be ignored",
            discovered.skipped.len(),
            config.input.supported_formats.join(", ")
        );
    }
    if discovered.files.is_empty() {
        anyhow::bail!("No skins found at {:?}", args.input);
    }
    tracing::info!("Found {} skin(s) to process", discovered.files.len());

    let sources: Vec<PathSkin> = discovered.files.into_iter().map(PathSkin::new).collect();
    let progress = Arc::new(ProgressObserver::new(args.stdout));
    let document = SkinAssembler::new(&config)
        .with_observer(progress)
        .assemble(sources)
        .await?;

    let pretty = config.output.pretty && !args.compact;
    if args.stdout {
        println!("{}", to_json(&document, pretty)?);
        return Ok(());
    }

    let path = match args.output {
        Some(path) => expand_path(&path),
        None => config.output_path(),
    };
    write_document(&path, &document, pretty)?;

    let slim = document.custom_skins.iter().filter(|r| r.slim).count();
    tracing::info!(
        "Wrote {} skin(s) ({} slim, {} classic) to {:?}",
        document.custom_skins.len(),
        slim,
        document.custom_skins.len() - slim,
        path
    );
    println!("Skin file generated: {}", path.display());
    Ok(())
}

/// Expand a leading `~` in a user-supplied path.
fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&path_str).into_owned())
}

/// Drives a progress bar from assembler events.
struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    fn new(hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0)
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Self { bar }
    }
}

impl AssemblyObserver for ProgressObserver {
    fn on_start(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_skin(&self, _index: usize, record: &SkinRecord) {
        self.bar.set_message(record.name.clone());
        self.bar.inc(1);
    }

    fn on_finish(&self, _document: &SkinDocument) {
        self.bar.finish_and_clear();
    }
}
