//! Parse one or more .vsdx files, print a summary and optionally export JSON.
//!
//! ```text
//! RUST_LOG=vsdx=debug cargo run --example parse_vsdx -- a.vsdx b.vsdx --json out/
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use vsdx::{ParseOptions, batch, persist};

#[derive(Parser, Debug)]
#[command(about = "Decode Visio drawings")]
struct Args {
    /// Drawings to parse
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory to write one JSON export per drawing
    #[arg(long)]
    json: Option<PathBuf>,

    /// Do not inherit rows from masters
    #[arg(long)]
    no_inherit: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();
    let options = ParseOptions::new().with_inherit_from_masters(!args.no_inherit);

    let start = Instant::now();
    let parsed = args
        .inputs
        .iter()
        .filter(|path| batch::parse_path(path, &options).is_ok())
        .count();
    println!("serial:   {} parsed in {:?}", parsed, start.elapsed());

    let start = Instant::now();
    let parallel = batch::parse_many(&args.inputs, &options);
    println!(
        "parallel: {} parsed in {:?}",
        parallel.iter().filter(|result| result.is_ok()).count(),
        start.elapsed()
    );

    for (path, result) in args.inputs.iter().zip(parallel) {
        let model = match result {
            Ok(model) => model,
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                continue;
            },
        };

        let document = &model.document;
        println!(
            "{}: {} masters, {} pages, {} shapes",
            path.display(),
            document.masters.len(),
            document.pages.len(),
            document.shape_count()
        );
        for page in document.pages.values() {
            println!(
                "  [{}] {} ({} shapes, {} connects, {} layers)",
                page.id,
                page.name.as_deref().unwrap_or("<unnamed>"),
                page.shapes.len(),
                page.connects.len(),
                page.layers.len()
            );
        }

        if let Some(dir) = &args.json {
            std::fs::create_dir_all(dir)?;
            let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned());
            let target = dir.join(format!("{}.json", stem.unwrap_or_else(|| "drawing".into())));
            persist::export_json(&model, &target)?;

            let restored = persist::import_json(&target)?;
            println!(
                "  exported {} (round trip {})",
                target.display(),
                if restored == model { "ok" } else { "MISMATCH" }
            );
        }
    }

    Ok(())
}
