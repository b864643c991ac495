//! Default values for configuration that has no file entry.

use std::path::PathBuf;

/// Directory holding vigil's user config and the bundled challenge image.
///
/// Falls back to the temp directory when no home directory can be resolved.
pub fn vigil_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".vigil"),
        None => {
            eprintln!(
                "Warning: Could not find home directory. Set HOME environment variable. \
                Using fallback directory."
            );
            std::env::temp_dir().join(".vigil")
        }
    }
}

/// Default location of the challenge template image.
pub fn default_template_path() -> PathBuf {
    vigil_dir().join("challenge.png")
}
