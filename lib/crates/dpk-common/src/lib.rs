pub mod env;
pub mod manifest;
pub mod types;

pub use env::{PlatformEnv, UnknownEnv};
pub use manifest::{ManifestError, PackageManifest};
pub use types::*;
