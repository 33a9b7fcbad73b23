//! Project and technology detection.

pub mod framework;
pub mod package_manager;

pub use framework::{detect_frameworks, frameworks_from_manifest, FRAMEWORK_PACKAGES};
pub use package_manager::PackageManager;
