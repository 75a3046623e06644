//! Persistence of synthesized samples.

mod store;

pub use store::{AudioStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_is_lowercased_label() {
        assert_eq!(AudioStore::file_name("Matilda").unwrap(), "test_matilda.mp3");
    }

    #[test]
    fn test_file_name_ignores_surrounding_whitespace() {
        assert_eq!(AudioStore::file_name(" Sarah ").unwrap(), "test_sarah.mp3");
    }

    #[test]
    fn test_save_with_padded_label_uses_trimmed_name() {
        let temp_dir = TempDir::new().unwrap();
        let store = AudioStore::with_dir(temp_dir.path().to_path_buf());

        let path = store.save("  George\t", b"audio").unwrap();

        assert_eq!(path, temp_dir.path().join("test_george.mp3"));
    }

    #[test]
    fn test_save_writes_exact_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let store = AudioStore::with_dir(temp_dir.path().to_path_buf());

        let path = store.save("Sarah", b"ID3 fake mpeg").unwrap();

        assert_eq!(path, temp_dir.path().join("test_sarah.mp3"));
        assert_eq!(std::fs::read(&path).unwrap(), b"ID3 fake mpeg");
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = AudioStore::with_dir(temp_dir.path().to_path_buf());

        store.save("Eric", b"first run, longer payload").unwrap();
        let path = store.save("Eric", b"second").unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("samples").join("turbo");
        let store = AudioStore::with_dir(nested.clone());

        store.save("Lily", b"audio").unwrap();

        assert!(nested.join("test_lily.mp3").exists());
    }

    #[test]
    fn test_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let store = AudioStore::with_dir(temp_dir.path().to_path_buf());

        for label in ["../evil", "a/b", "a\\b", "  "] {
            assert!(matches!(
                store.save(label, b"x"),
                Err(StoreError::InvalidLabel(_))
            ));
        }
    }
}
