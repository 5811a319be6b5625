//! CLI command dispatch

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::backend::DirContentSource;
use crate::config::LoaderConfig;
use crate::document::Document;
use crate::ingest::{ContentSource, ContentWriter, DocumentUri, ForestId};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    execute(Cli::parse_args())
}

/// Run an already-parsed command
pub fn execute(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Load {
            input,
            output,
            forests,
            config,
            batch_size,
            fast_load,
            output_dir,
        } => load(
            &input, &output, forests, config, batch_size, fast_load, output_dir,
        ),
        Command::Plan { forests, uris } => plan(forests, &uris),
    }
}

fn load(
    input: &Path,
    output: &Path,
    forests: usize,
    config_path: Option<PathBuf>,
    batch_size: Option<usize>,
    fast_load: bool,
    output_dir: Option<String>,
) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => LoaderConfig::from_file(&path)?,
        None => LoaderConfig::default(),
    };
    if let Some(batch_size) = batch_size {
        config.batch_size = batch_size;
    }
    if fast_load {
        config.fast_load = true;
    }
    if output_dir.is_some() {
        config.output_dir = output_dir;
    }

    let source: Arc<dyn ContentSource> = Arc::new(DirContentSource::new(output));
    let forest_count = forests.max(1);
    let sources: Vec<(ForestId, Arc<dyn ContentSource>)> = (0..forest_count)
        .map(|i| (format!("forest-{:03}", i), Arc::clone(&source)))
        .collect();

    let mut writer = ContentWriter::new(&config, sources)?;

    Logger::info(
        "LOAD_START",
        &[
            ("input", &input.display().to_string()),
            ("forests", &forest_count.to_string()),
            ("batch_size", &config.batch_size.to_string()),
        ],
    );

    let mut files = Vec::new();
    collect_files(input, input, &mut files)?;
    files.sort();

    let mut written = 0usize;
    for (relative, path) in &files {
        let mut uri = DocumentUri::new(relative.as_str());
        let document = document_for(path)?;
        writer.write(&mut uri, document)?;
        written += 1;
    }

    writer.close()?;

    Logger::info("LOAD_COMPLETE", &[("documents", &written.to_string())]);
    println!(
        "Loaded {} documents into {} under {}",
        written,
        if forest_count == 1 {
            "1 forest".to_string()
        } else {
            format!("{} forests", forest_count)
        },
        output.display()
    );

    Ok(())
}

fn plan(forests: usize, uris: &[String]) -> CliResult<()> {
    let forest_count = forests.max(1);
    for uri in uris {
        let id = DocumentUri::new(uri.as_str());
        id.validate()?;
        println!("forest-{:03}\t{}", id.placement(forest_count), uri);
    }
    Ok(())
}

/// Collect `(relative_uri, path)` pairs for every file under `dir`.
fn collect_files(
    dir: &Path,
    base: &Path,
    out: &mut Vec<(String, PathBuf)>,
) -> CliResult<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, base, out)?;
        } else {
            let relative = path
                .strip_prefix(base)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");
            out.push((relative, path));
        }
    }
    Ok(())
}

const TEXT_EXTENSIONS: &[&str] = &["xml", "txt", "json", "html", "xhtml", "csv"];

/// Text files load as text documents, everything else as binary. A text
/// file that is not valid UTF-8 falls back to binary rather than failing
/// the load.
fn document_for(path: &Path) -> CliResult<Document> {
    let bytes = fs::read(path)?;

    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    if is_text {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Document::Text(text)),
            Err(e) => Ok(Document::SmallBinary(e.into_bytes())),
        }
    } else {
        Ok(Document::SmallBinary(bytes))
    }
}
