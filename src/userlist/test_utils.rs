use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Kept so the directory outlives the test
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
    pub path: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// A store pointing at a file that does not exist yet.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let path = root.join("users.json");
        let store = FileStore::new(&path);
        Self {
            _temp_dir: temp_dir,
            store,
            root,
            path,
        }
    }

    /// A store whose file already holds `content`.
    pub fn with_content(content: &str) -> Self {
        let env = Self::new();
        std::fs::write(&env.path, content).expect("failed to seed store file");
        env
    }

    pub fn content(&self) -> String {
        std::fs::read_to_string(&self.path).expect("failed to read store file")
    }
}
