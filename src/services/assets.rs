use std::path::PathBuf;

/// Filesystem-backed store of representative menu images
///
/// Lookup is by menu name; a missing image is not an error, it simply
/// suppresses the illustration for that menu.
#[derive(Debug, Clone)]
pub struct AssetStore {
    images_dir: PathBuf,
}

impl AssetStore {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    /// Returns the path to the menu's representative image, if one exists
    pub fn image_for(&self, menu: &str) -> Option<String> {
        let path = self.images_dir.join(format!("{menu}.jpg"));
        path.exists()
            .then(|| path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_image_is_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("제육볶음.jpg"), b"jpeg").unwrap();
        let store = AssetStore::new(dir.path());

        let image = store.image_for("제육볶음");
        assert!(image.is_some());
        assert!(image.unwrap().ends_with("제육볶음.jpg"));
    }

    #[test]
    fn test_missing_image_is_none_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        assert_eq!(store.image_for("갈비탕"), None);
    }
}
