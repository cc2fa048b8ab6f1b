//! Asset dataset loading
//!
//! The CLI ships with the bundled seed dataset and optionally reads a JSON
//! file with the same shape, so edited scenarios can be exported, tweaked,
//! and fed back in.

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use flp_core::model::FusionAsset;
use flp_core::seed::baseline_assets;

use crate::util::io::atomic_write;

/// Load the asset collection: the bundled seed when `path` is `None`,
/// otherwise the JSON file at `path`.
pub fn load_assets(path: Option<&Path>) -> color_eyre::Result<Vec<FusionAsset>> {
    let Some(path) = path else {
        tracing::debug!("Using bundled seed dataset");
        return Ok(baseline_assets());
    };

    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read asset dataset {}", path.display()))?;
    let assets: Vec<FusionAsset> = serde_json::from_str(&content)
        .wrap_err_with(|| format!("failed to parse asset dataset {}", path.display()))?;

    tracing::info!(count = assets.len(), path = %path.display(), "Loaded asset dataset");
    Ok(assets)
}

/// Write the asset collection as pretty-printed JSON.
pub fn save_assets(path: &Path, assets: &[FusionAsset]) -> color_eyre::Result<()> {
    let json = serde_json::to_string_pretty(assets)?;
    atomic_write(path, &json)
        .wrap_err_with(|| format!("failed to write asset dataset {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults_to_seed() {
        let assets = load_assets(None).unwrap();
        assert_eq!(assets.len(), baseline_assets().len());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assets.json");

        let assets = baseline_assets();
        save_assets(&path, &assets).unwrap();

        let loaded = load_assets(Some(&path)).unwrap();
        assert_eq!(loaded, assets);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_assets(Some(&dir.path().join("absent.json"))).is_err());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_assets(Some(&path)).is_err());
    }
}
