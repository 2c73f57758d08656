// modport/src/lib.rs
pub mod candidates;
pub mod env;
pub mod error;
pub mod importer;
pub mod resolver;

// Re-export key types
pub use candidates::candidate_names;
pub use env::{PackageManager, ResolverEnv, StaticEnv};
pub use error::{ImportError, ResolveError, Result};
pub use importer::{ManifestImporter, ModuleImporter, PluginManifest, MANIFEST_FILE};
pub use resolver::{ResolveOptions, Resolver};
