mod defaults;
mod filesystem;
mod levels;
mod loader;
mod model;

pub use defaults::{DEFAULT_CONFIG, DEFAULT_CONFIG_FILE};
pub use filesystem::{FileSystem, RealFileSystem};
pub use levels::{FALLBACK_COLOR, Level, Levels};
pub use loader::{ConfigResolver, LoadResult, OverrideSource};
pub use model::{Config, ConfigDocument};
