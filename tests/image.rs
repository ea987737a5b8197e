#[cfg(test)]
mod tests {
    use fieldlog::libs::image::{read_data_url, ImageError, MAX_IMAGE_BYTES};
    use fieldlog::libs::profile::{ImageSlot, UserProfile};
    use fieldlog::libs::storage::{Journal, MemoryStore, StorageError};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    #[derive(Debug, thiserror::Error)]
    enum UploadError {
        #[error(transparent)]
        Image(#[from] ImageError),
        #[error(transparent)]
        Storage(#[from] StorageError),
    }

    struct ImageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ImageTestContext {
        fn setup() -> Self {
            ImageTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ImageTestContext {
        fn file(&self, name: &str, size: usize) -> PathBuf {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, vec![0u8; size]).unwrap();
            path
        }
    }

    #[test_context(ImageTestContext)]
    #[test]
    fn test_small_image_becomes_data_url(ctx: &mut ImageTestContext) {
        let path = ctx.file("me.png", 3);

        let data_url = read_data_url(&path).unwrap();
        assert_eq!(data_url, "data:image/png;base64,AAAA");
    }

    #[test_context(ImageTestContext)]
    #[test]
    fn test_oversized_image_leaves_profile_unchanged(ctx: &mut ImageTestContext) {
        let path = ctx.file("cover.jpg", 3 * 1024 * 1024);
        let mut journal = Journal::open(MemoryStore::new()).unwrap();

        let result = journal.update_profile(|profile| -> Result<(), UploadError> {
            *profile.image_mut(ImageSlot::Cover) = Some(read_data_url(&path)?);
            Ok(())
        });

        assert!(matches!(result, Err(UploadError::Image(ImageError::TooLarge { size, limit })) if size == 3 * 1024 * 1024 && limit == MAX_IMAGE_BYTES));
        assert_eq!(journal.profile(), &UserProfile::default());
        assert!(journal.store().is_empty());
    }

    #[test_context(ImageTestContext)]
    #[test]
    fn test_accepted_image_is_stored_in_profile(ctx: &mut ImageTestContext) {
        let path = ctx.file("me.webp", 16);
        let mut journal = Journal::open(MemoryStore::new()).unwrap();

        journal
            .update_profile(|profile| -> Result<(), UploadError> {
                *profile.image_mut(ImageSlot::Picture) = Some(read_data_url(&path)?);
                Ok(())
            })
            .unwrap();

        let picture = journal.profile().profile_picture.as_deref().unwrap();
        assert!(picture.starts_with("data:image/webp;base64,"));
    }

    #[test_context(ImageTestContext)]
    #[test]
    fn test_non_image_is_rejected(ctx: &mut ImageTestContext) {
        let path = ctx.file("notes.txt", 10);
        assert!(matches!(read_data_url(&path), Err(ImageError::UnsupportedType(_))));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        assert!(matches!(read_data_url(&PathBuf::from("/definitely/missing.png")), Err(ImageError::Read { .. })));
    }
}
