//! # Filesystem-backed session storage
//!
//! [`FileStorage`] is the [`SessionStorage`] used when the client runs outside
//! a browser (native dev builds). Each key is one file:
//!
//! ```text
//! <base_dir>/
//! └── auth-storage      # the persisted session record
//! ```
//!
//! The caller picks the base directory; the ui crate uses `dirs::data_dir()`.
//! I/O errors are logged and swallowed, like the browser backend does.

use std::fs;
use std::path::PathBuf;

use crate::session::SessionStorage;

#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.base.join(key.replace(['/', '\\'], "_"))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.base) {
            tracing::warn!("Cannot create {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = fs::write(self.path(key), value) {
            tracing::warn!("Cannot write {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                tracing::warn!("Cannot remove {key}: {e}");
            }
        }
    }
}
