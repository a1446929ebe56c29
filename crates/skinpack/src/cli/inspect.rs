//! The `skinpack inspect` command.

use clap::Args;
use serde::Serialize;
use skinpack_core::pipeline::source::skin_name;
use skinpack_core::pipeline::{is_slim, SkinDecoder, SkinModel, TextureHasher};
use std::path::PathBuf;

/// Arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Skin file to inspect
    #[arg(required = true)]
    pub file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the generated record would say about a single skin.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectReport {
    name: String,
    texture_id: String,
    model: SkinModel,
    width: u32,
    height: u32,
}

/// Execute the inspect command.
pub async fn execute(args: InspectArgs) -> anyhow::Result<()> {
    if !args.file.is_file() {
        anyhow::bail!("Not a file: {:?}", args.file);
    }

    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let bytes = tokio::fs::read(&args.file).await?;
    let report = build_report(&file_name, bytes).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("name:       {}", report.name);
        println!("texture id: {}", report.texture_id);
        println!("model:      {}", report.model);
        println!("size:       {}x{}", report.width, report.height);
    }
    Ok(())
}

/// Hash, decode and classify one skin from bytes already in memory.
async fn build_report(file_name: &str, bytes: Vec<u8>) -> anyhow::Result<InspectReport> {
    let texture_id = TextureHasher::texture_id(&bytes);
    let decoded = SkinDecoder::decode(bytes, file_name).await?;

    Ok(InspectReport {
        name: skin_name(file_name).to_string(),
        texture_id,
        model: SkinModel::from_slim(is_slim(&decoded.pixels)),
        width: decoded.width,
        height: decoded.height,
    })
}
