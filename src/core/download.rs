use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

/// Seam for the network step so the pipeline can be exercised without a
/// server. The production implementation is [`HttpFetcher`].
pub trait Fetcher {
    /// Download `url` into the file at `destination`, creating parent
    /// directories as needed. The body is written verbatim (binary-safe).
    fn fetch(&self, url: &str, destination: &Path) -> Result<()>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("gitfetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {url}"))?;

        if !response.status().is_success() {
            bail!("non-200 response ({})", response.status());
        }

        let bar = progress_bar(response.content_length());
        let mut file = File::create(destination)
            .with_context(|| format!("create {}", destination.display()))?;
        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = response.read(&mut buf)?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            bar.inc(n as u64);
        }
        bar.finish_and_clear();

        Ok(())
    }
}

/// Byte-count bar when the server sent Content-Length, indeterminate spinner
/// otherwise.
fn progress_bar(content_length: Option<u64>) -> ProgressBar {
    match content_length {
        Some(total) => {
            let bar = ProgressBar::new(total);
            if let Ok(style) =
                ProgressStyle::with_template("Downloading Git [{bar:50}] {percent}% {eta}")
            {
                bar.set_style(style.progress_chars("= "));
            }
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        }
    }
}
