use crate::error::{ProvisionError, Result};
use std::path::PathBuf;

/// Upstream Git release version embedded in the artifact name.
pub const GIT_VERSION: &str = "2.12.1";

/// Internal build number appended to the artifact name.
pub const GIT_BUILD: &str = "145";

const RELEASE_BASE_URL: &str =
    "https://github.com/desktop/dugite-native/releases/download/v2.12.1-rc1";

/// Immutable provisioning configuration, resolved once at startup from the
/// platform identifier and passed explicitly to every pipeline step.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub output_path: PathBuf,
    pub version: String,
    pub build: String,
    pub platform_label: String,
    pub file_name: String,
    pub source: String,
    pub checksum: String,
}

impl ProvisionConfig {
    /// Resolve the configuration for the host platform, extracting into the
    /// default output directory next to the executable.
    pub fn for_host() -> Result<Self> {
        Self::resolve(std::env::consts::OS, default_output_path()?)
    }

    /// Map a platform identifier to the artifact name, download URL, and
    /// expected checksum. Accepts both Rust OS names (`linux`, `macos`,
    /// `windows`) and the upstream release identifiers (`darwin`, `win32`).
    ///
    /// Unknown platforms fail here, before any network or filesystem work.
    pub fn resolve(platform: &str, output_path: PathBuf) -> Result<Self> {
        let (platform_label, checksum) = match platform {
            "linux" => (
                "ubuntu",
                "dfed95bb0bb905627cfccca7d9462a551129ea70ff20525cb85b88011d0fd513",
            ),
            "macos" | "darwin" => (
                "macOS",
                "75a0d7d9bf743bc2dc2e2dfa815be39c14b5e6c7d480a10934f1f2b74cc3875e",
            ),
            "windows" | "win32" => (
                "win32",
                "6d82f4361ecb78fb1556a8c2f54711c1b76b301007a2000393cea34d363d2dcf",
            ),
            other => {
                return Err(ProvisionError::UnsupportedPlatform {
                    platform: other.to_string(),
                })
            }
        };

        let file_name =
            format!("dugite-native-v{GIT_VERSION}-{platform_label}-{GIT_BUILD}.tar.gz");
        let source = format!("{RELEASE_BASE_URL}/{file_name}");

        Ok(ProvisionConfig {
            output_path,
            version: GIT_VERSION.to_string(),
            build: GIT_BUILD.to_string(),
            platform_label: platform_label.to_string(),
            file_name,
            source,
            checksum: checksum.to_string(),
        })
    }

    /// Deterministic location of the downloaded artifact in the system temp
    /// directory. A file here that still matches the checksum is reused
    /// without touching the network.
    pub fn artifact_cache_path(&self) -> PathBuf {
        std::env::temp_dir().join(&self.file_name)
    }
}

/// The extracted Git distribution lives in `git/` next to the directory
/// containing the tool itself.
fn default_output_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let base = exe
        .parent()
        .and_then(|dir| dir.parent())
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("git"))
}
