//! Storage layer for the HostelNexus assistant
//!
//! Provides:
//! - The complaint store the dialogue engine submits to
//! - The student directory used for identity lookup
//! - The weekly mess menu
//!
//! Complaints live in an in-memory collection, optionally mirrored to a
//! JSON file on every mutation. The student roster and menu are seeded
//! demo data.

pub mod complaints;
pub mod error;
pub mod menu;
pub mod students;

pub use complaints::{ComplaintStore, JsonFileComplaintStore, MemoryComplaintStore};
pub use error::PersistenceError;
pub use menu::MessMenuService;
pub use students::{MemoryStudentDirectory, StudentDirectory};

use std::path::PathBuf;
use std::sync::Arc;

/// Combined storage layer with all services
pub struct PersistenceLayer {
    pub complaints: Arc<dyn ComplaintStore>,
    pub students: Arc<dyn StudentDirectory>,
    pub menu: MessMenuService,
}

/// Initialize the storage layer
///
/// With a data directory the complaint store is mirrored to
/// `<data_dir>/complaints.json`; without one everything is in-memory.
pub fn init(data_dir: Option<PathBuf>) -> Result<PersistenceLayer, PersistenceError> {
    let complaints: Arc<dyn ComplaintStore> = match data_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let path = dir.join("complaints.json");
            tracing::info!(path = %path.display(), "Using file-backed complaint store");
            Arc::new(JsonFileComplaintStore::open(path)?)
        }
        None => {
            tracing::info!("Using in-memory complaint store");
            Arc::new(MemoryComplaintStore::with_sample_data())
        }
    };

    Ok(PersistenceLayer {
        complaints,
        students: Arc::new(MemoryStudentDirectory::with_sample_data()),
        menu: MessMenuService::default(),
    })
}
