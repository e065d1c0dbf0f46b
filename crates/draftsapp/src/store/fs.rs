use super::fs_backend::FsBackend;
use super::slot_store::SlotStore;
use std::path::PathBuf;

pub type FileStore = SlotStore<FsBackend>;

impl FileStore {
    /// A store keeping its slot files under `data_dir`.
    pub fn new(data_dir: PathBuf) -> Self {
        SlotStore::with_backend(FsBackend::new(data_dir))
    }
}
