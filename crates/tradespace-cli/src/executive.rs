use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use entity::Entity;
use tracing::{debug, info};
use tradespace::TradespaceSearch;

/// Output file of the architecture at `index`:
/// `<outdir>/<stem>-<index:05>/<stem>-<index:05>.json`.
pub fn architecture_path(outdir: &Path, stem: &str, index: usize) -> PathBuf {
    let label = format!("{stem}-{index:05}");
    outdir.join(&label).join(format!("{label}.json"))
}

/// Enumerates the search in `infile` and writes every architecture under
/// `outdir`. Returns the number of architectures written.
pub fn execute(infile: &Path, outdir: &Path) -> Result<usize> {
    let text = fs::read_to_string(infile)
        .with_context(|| format!("failed to read {}", infile.display()))?;
    let search = TradespaceSearch::from_json(&text)
        .with_context(|| format!("failed to parse {}", infile.display()))?;

    let stem = infile
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("arch");
    info!(
        input = %infile.display(),
        output = %outdir.display(),
        "enumerating tradespace search"
    );

    let architectures = search
        .design_space
        .generate_architectures()
        .context("failed to enumerate the design space")?;

    let mut written = 0;
    for (index, architecture) in architectures.enumerate() {
        let path = architecture_path(outdir, stem, index);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let json = architecture
            .to_json()
            .with_context(|| format!("failed to encode architecture {index}"))?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(index, path = %path.display(), "architecture written");
        written += 1;
    }

    info!(architectures = written, "tradespace search complete");
    Ok(written)
}
