//! Reading OCR text documents.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Where a document's OCR text comes from.
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` is stdin, anything else a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Name used in reports and as ledger description.
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path
                .file_name()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    /// Read the whole document.
    pub async fn read(&self) -> anyhow::Result<String> {
        match self {
            InputSource::Stdin => {
                let mut text = String::new();
                tokio::io::stdin().read_to_string(&mut text).await?;
                Ok(text)
            }
            InputSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e)),
        }
    }
}

/// Expand file arguments: `-` is stdin, anything else a path or glob pattern.
pub fn expand_inputs(patterns: &[String]) -> anyhow::Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            sources.push(InputSource::Stdin);
            continue;
        }

        let matched: Vec<PathBuf> = glob(pattern)?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();

        if matched.is_empty() {
            anyhow::bail!("No matching files found for pattern: {}", pattern);
        }

        debug!("Pattern {} matched {} files", pattern, matched.len());
        sources.extend(matched.into_iter().map(InputSource::File));
    }

    Ok(sources)
}

/// Outcome of reading and interpreting one document.
pub struct Processed<T> {
    pub source: InputSource,
    pub outcome: anyhow::Result<T>,
    pub processing_time_ms: u64,
}

/// Read and interpret documents with at most `jobs` in flight.
///
/// Interpretation runs on the blocking pool. Results come back in input order.
pub async fn interpret_all<T, F>(
    sources: Vec<InputSource>,
    jobs: usize,
    interpret: F,
) -> anyhow::Result<Vec<Processed<T>>>
where
    F: Fn(&str) -> T + Send + Sync + 'static,
    T: Send + 'static,
{
    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents")?
            .progress_chars("=>-"),
    );

    let interpret = Arc::new(interpret);
    let progress = &pb;

    let results: Vec<Processed<T>> = stream::iter(sources)
        .map(|source| {
            let interpret = Arc::clone(&interpret);
            async move {
                let start = Instant::now();
                let outcome = match source.read().await {
                    Ok(text) => tokio::task::spawn_blocking(move || interpret(&text))
                        .await
                        .map_err(anyhow::Error::from),
                    Err(e) => Err(e),
                };
                progress.inc(1);

                Processed {
                    source,
                    outcome,
                    processing_time_ms: start.elapsed().as_millis() as u64,
                }
            }
        })
        .buffered(jobs.max(1))
        .collect()
        .await;

    pb.finish_and_clear();

    Ok(results)
}
