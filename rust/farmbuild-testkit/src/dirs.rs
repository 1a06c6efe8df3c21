//! Directory and path utilities for test resources.
//!
//! Resolves the sample directory relative to the testkit's source directory
//! and checks that requested files exist.

use std::path::PathBuf;

/// The source directory path for the `farmbuild-testkit`, set at compile time
/// (provided by the build script).
pub const TESTKIT_SRC_DIR_STR: &str = env!("TESTKIT_SRC_DIR");

/// Returns the path to the testkit source directory.
pub fn get_testkit_src_dir() -> anyhow::Result<PathBuf> {
    let res = PathBuf::from(TESTKIT_SRC_DIR_STR);
    if !res.is_dir() {
        anyhow::bail!("{} not found", res.display());
    }
    Ok(res)
}

/// Returns the path to the test samples directory (`$repo_root/test/samples`).
pub fn get_test_samples_dir() -> anyhow::Result<PathBuf> {
    let src_dir = get_testkit_src_dir()?;
    let samples_dir = src_dir
        .parent()
        .ok_or_else(|| anyhow::anyhow!("{} parent", src_dir.display()))?
        .parent()
        .ok_or_else(|| anyhow::anyhow!("{} parent->parent", src_dir.display()))?
        .join("test")
        .join("samples");
    if !samples_dir.is_dir() {
        anyhow::bail!("{} not found", samples_dir.display());
    }
    Ok(samples_dir)
}

/// Returns the path to a JSON sample (`$repo_root/test/samples/{name}.json`).
pub fn get_sample_path(name: &str) -> anyhow::Result<PathBuf> {
    let path = get_test_samples_dir()?.join(format!("{name}.json"));
    if !path.is_file() {
        anyhow::bail!("{} not found", path.display());
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_dirs() {
        assert!(super::get_testkit_src_dir().is_ok());
        assert!(super::get_sample_path("farm_paddocks").is_ok());
        assert!(super::get_sample_path("missing_sample").is_err());
    }
}
