//! Locating the content directory.
//!
//! `MORPH_DATA_DIR` wins when it is set. Otherwise the engine looks for a directory
//! holding `catalog.ron`: first under the working directory, then beside the
//! executable, then one level above it. Each base is tried as `morph_engine/data`
//! and then `data`.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{info, warn};

/// Environment variable naming the content directory explicitly.
pub const DATA_DIR_ENV: &str = "MORPH_DATA_DIR";

const CRATE_DATA: &str = "morph_engine/data";
const CONTENT_MARKER: &str = "catalog.ron";

static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
    let root = resolve_data_root(
        env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        env::current_exe().ok().as_deref(),
    );
    info!("reading content from {}", root.display());
    root
});

/// A path inside the resolved content directory.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Pick the content directory from an explicit override and the executable's path.
///
/// An override is used as given, even if it has no content in it.
pub fn resolve_data_root(override_dir: Option<PathBuf>, exe: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        if !holds_content(&dir) {
            warn!("{DATA_DIR_ENV} points at {}, which has no {CONTENT_MARKER}", dir.display());
        }
        return dir;
    }
    search_roots(exe)
        .into_iter()
        .find(|dir| holds_content(dir))
        .unwrap_or_else(|| PathBuf::from(CRATE_DATA))
}

/// Candidate directories, most preferred first.
fn search_roots(exe: Option<&Path>) -> Vec<PathBuf> {
    let mut bases = vec![PathBuf::new()];
    if let Some(dir) = exe.and_then(Path::parent) {
        bases.push(dir.to_path_buf());
        bases.extend(dir.parent().map(Path::to_path_buf));
    }
    bases
        .iter()
        .flat_map(|base| [base.join(CRATE_DATA), base.join("data")])
        .collect()
}

fn holds_content(dir: &Path) -> bool {
    dir.join(CONTENT_MARKER).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn candidates_follow_the_executable() {
        let roots = search_roots(Some(Path::new("/opt/morph/bin/morph_engine")));
        assert_eq!(
            roots,
            vec![
                PathBuf::from("morph_engine/data"),
                PathBuf::from("data"),
                PathBuf::from("/opt/morph/bin/morph_engine/data"),
                PathBuf::from("/opt/morph/bin/data"),
                PathBuf::from("/opt/morph/morph_engine/data"),
                PathBuf::from("/opt/morph/data"),
            ]
        );
        assert_eq!(search_roots(None).len(), 2);
    }

    #[test]
    fn override_wins_over_search() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONTENT_MARKER), "()").expect("write marker");
        assert_eq!(resolve_data_root(Some(dir.path().to_path_buf()), None), dir.path().to_path_buf());

        let empty = dir.path().join("nothing-here");
        assert_eq!(resolve_data_root(Some(empty.clone()), None), empty);
    }

    #[test]
    fn blank_override_is_ignored() {
        let root = resolve_data_root(Some(PathBuf::new()), None);
        assert_ne!(root, PathBuf::new());
    }
}
