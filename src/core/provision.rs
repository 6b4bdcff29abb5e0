use crate::core::checksum;
use crate::core::config::ProvisionConfig;
use crate::core::download::Fetcher;
use crate::core::extract;
use crate::error::{ProvisionError, Result};
use crate::utils::fs as fs_utils;
use std::path::{Path, PathBuf};

/// Runs the provisioning pipeline: clean output directory, reuse or download
/// the artifact, verify its checksum, and unpack it.
///
/// The steps run strictly in sequence; there is no retry beyond the single
/// stale-cache re-download, and no step starts before the previous finished.
pub struct Provisioner<F: Fetcher> {
    config: ProvisionConfig,
    fetcher: F,
    cache_path: PathBuf,
}

impl<F: Fetcher> Provisioner<F> {
    pub fn new(config: ProvisionConfig, fetcher: F) -> Self {
        let cache_path = config.artifact_cache_path();
        Self {
            config,
            fetcher,
            cache_path,
        }
    }

    /// Keep the downloaded artifact under `dir` instead of the system temp
    /// directory.
    pub fn with_cache_dir(mut self, dir: &Path) -> Self {
        self.cache_path = dir.join(&self.config.file_name);
        self
    }

    pub fn run(&self) -> Result<()> {
        // A leftover output directory from a prior run is removed entirely so
        // the extraction lands in a clean target.
        fs_utils::recreate_dir(&self.config.output_path)?;

        if self.cache_path.exists() {
            if checksum::verify_file(&self.cache_path, &self.config.checksum)? {
                println!("Using cached archive: {}", self.cache_path.display());
                return self.unpack();
            }
            // Stale download from an earlier run; discard and fetch again.
            std::fs::remove_file(&self.cache_path)?;
        }

        self.download_and_verify()?;
        self.unpack()
    }

    fn download_and_verify(&self) -> Result<()> {
        println!("Downloading Git from: {}", self.config.source);
        self.fetcher
            .fetch(&self.config.source, &self.cache_path)
            .map_err(|e| ProvisionError::Download {
                url: self.config.source.clone(),
                message: e.to_string(),
            })?;

        let actual = checksum::sha256_file(&self.cache_path)?;
        if !actual.eq_ignore_ascii_case(&self.config.checksum) {
            // A fresh download that fails verification is fatal, not retried.
            return Err(ProvisionError::ChecksumMismatch {
                path: self.cache_path.clone(),
                expected: self.config.checksum.clone(),
                actual,
            });
        }
        Ok(())
    }

    fn unpack(&self) -> Result<()> {
        extract::extract_archive(&self.cache_path, &self.config.output_path).map_err(|e| {
            ProvisionError::Extraction {
                path: self.cache_path.clone(),
                message: e.to_string(),
            }
        })?;
        println!(
            "Git {} unpacked into {}",
            self.config.version,
            self.config.output_path.display()
        );
        Ok(())
    }
}
