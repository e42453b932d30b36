/// Data access module
///
/// Everything that touches the filesystem lives here:
/// - Feed loading and parsing (loader.rs)
/// - Image dimension probing for portrait detection (probe.rs)
/// - Screenshot existence verification (assets.rs)

pub mod assets;
pub mod loader;
pub mod probe;
