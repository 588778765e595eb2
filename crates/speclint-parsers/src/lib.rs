pub mod loader;
pub mod references;
pub mod walker;
