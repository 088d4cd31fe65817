use crate::visit::CardId;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CARDLINK_DIR: &str = ".cardlink";
pub const CARDS_DIR: &str = ".cardlink/cards";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn cards_dir(root: &Path) -> PathBuf {
    root.join(CARDS_DIR)
}

pub fn card_path(root: &Path, id: &CardId) -> PathBuf {
    cards_dir(root).join(format!("{id}.yaml"))
}
