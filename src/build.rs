mod assets;
mod breadcrumb;
mod builder;
mod eggs;
mod paths;
mod render;
pub mod source;
mod template;

pub use assets::DirMirror;
pub use builder::{BuildResult, Builder, IndexStatus};
pub use paths::{base_path_from_config, resolve_path};
