//! Corpus access: walking scope roots, enumerating scope files and
//! reporting the most recent modification across the corpus.

mod enumerator;
mod metadata;
mod walker;

pub use enumerator::list_files;
pub use metadata::last_updated;
pub use walker::FileWalker;
