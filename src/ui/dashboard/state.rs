//! Dashboard state management
//!
//! The datasets a dashboard shows, plus what the host resolved for it
//! (logo files, pointer position, root class).

use crate::data::DashboardData;
use crate::theme::RootClass;
use ratatui::layout::Position;
use std::path::{Path, PathBuf};

/// Resolves logo references against a directory on disk.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the asset if it exists. A miss is not an error.
    pub fn resolve(&self, logo_ref: &str) -> Option<PathBuf> {
        let path = self.root.join(logo_ref);
        path.is_file().then_some(path)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState<'a> {
    /// Read-only views over the datasets.
    pub data: DashboardData<'a>,
    /// Resolved logo per audience entry, same order as `data.audience`.
    logos: Vec<Option<PathBuf>>,
    /// Last known mouse position, used for chart tooltips.
    pub hover: Option<Position>,
    /// Whether to paint the page background.
    pub with_background_color: bool,
    /// Class applied to the root surface by the theme store.
    pub root: RootClass,
}

impl<'a> DashboardState<'a> {
    pub fn new(
        data: DashboardData<'a>,
        assets: &AssetResolver,
        root: RootClass,
        with_background_color: bool,
    ) -> Self {
        let logos = data
            .audience
            .iter()
            .map(|platform| assets.resolve(platform.logo_ref))
            .collect();
        Self {
            data,
            logos,
            hover: None,
            with_background_color,
            root,
        }
    }

    /// Resolved logo for the audience entry at `index`.
    pub fn logo(&self, index: usize) -> Option<&Path> {
        self.logos.get(index).and_then(|logo| logo.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AUDIENCE_DATA;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_logos_resolve_only_existing_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/facebook.png"), b"png").unwrap();

        let state = DashboardState::new(
            DashboardData::sample(),
            &AssetResolver::new(dir.path()),
            RootClass::default(),
            true,
        );

        assert_eq!(AUDIENCE_DATA[1].platform_name, "Facebook");
        assert!(state.logo(0).is_none());
        assert!(state.logo(1).is_some());
        assert!(state.logo(99).is_none());
    }
}
