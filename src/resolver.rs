// modport/src/resolver.rs
use std::path::Path;

use tracing::debug;

use crate::candidates::candidate_names;
use crate::env::{PackageManager, ResolverEnv};
use crate::error::{ImportError, ResolveError, Result};
use crate::importer::ModuleImporter;

/// Per-call resolution settings. Defaults match the common host setup:
/// no prefixes, linked packages honored, no forced global fallback.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Name prefixes to try after the unprefixed name, in order.
    pub prefix: Vec<String>,
    /// Whether a development-linked candidate may be imported globally
    /// even when the application itself is not globally installed.
    pub linked: bool,
    /// Attempt global fallback unconditionally.
    pub force: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            prefix: Vec::new(),
            linked: true,
            force: false,
        }
    }
}

impl ResolveOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: vec![prefix.into()],
            ..Self::default()
        }
    }

    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefixes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn linked(mut self, linked: bool) -> Self {
        self.linked = linked;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Resolves a module name to its export, trying prefixed variants and
/// falling back to globally installed packages.
///
/// Candidates are attempted strictly in order, one at a time, and the
/// local phase is fully exhausted before any global attempt: a prefixed
/// variant found locally wins over the unprefixed name found globally.
pub struct Resolver<I, E> {
    importer: I,
    env: E,
}

impl<I: ModuleImporter, E: ResolverEnv> Resolver<I, E> {
    pub fn new(importer: I, env: E) -> Self {
        Self { importer, env }
    }

    /// Imports `module` or one of its prefixed variants.
    ///
    /// Fails with [`ResolveError::Exhausted`] when no candidate exists
    /// in either phase, or with [`ResolveError::Import`] as soon as a
    /// candidate exists but fails to load.
    pub async fn resolve(&self, module: &str, options: &ResolveOptions) -> Result<I::Export> {
        let candidates = candidate_names(module, &options.prefix);

        debug!(
            "Local phase for '{}': {} candidate(s)",
            module,
            candidates.len()
        );
        for candidate in &candidates {
            if let Some(export) = self.import_local(candidate).await? {
                return Ok(export);
            }
        }

        debug!(
            "Local phase exhausted for '{}', trying global package roots",
            module
        );
        for candidate in &candidates {
            if let Some(export) = self.import_global(candidate, options).await? {
                return Ok(export);
            }
        }

        Err(ResolveError::Exhausted { candidates })
    }

    /// Attempts one candidate in the ordinary local context. `NotFound`
    /// becomes `Ok(None)` so the caller moves on; anything else aborts.
    async fn import_local(&self, candidate: &str) -> Result<Option<I::Export>> {
        match self.importer.import(Path::new(candidate)).await {
            Ok(export) => {
                debug!("Resolved '{}' locally", candidate);
                Ok(Some(export))
            }
            Err(ImportError::NotFound(_)) => {
                debug!("'{}' not found locally", candidate);
                Ok(None)
            }
            Err(err) => Err(ResolveError::Import(err)),
        }
    }

    /// Attempts one candidate under the global roots, npm before yarn.
    ///
    /// Skipped entirely unless the fallback is forced, the application
    /// is itself globally installed, or the candidate is a linked
    /// package (and `linked` is enabled) — a stray global package must
    /// not be picked up when nothing indicates the user wants it.
    async fn import_global(
        &self,
        candidate: &str,
        options: &ResolveOptions,
    ) -> Result<Option<I::Export>> {
        let allow_linked = options.linked && self.env.is_linked(candidate).await?;
        if !options.force && !self.env.is_installed_globally() && !allow_linked {
            debug!(
                "Skipping global lookup for '{}': not globally installed, not linked, not forced",
                candidate
            );
            return Ok(None);
        }

        match self.import_from(PackageManager::Npm, candidate).await? {
            Some(export) => Ok(Some(export)),
            None => self.import_from(PackageManager::Yarn, candidate).await,
        }
    }

    async fn import_from(
        &self,
        manager: PackageManager,
        candidate: &str,
    ) -> Result<Option<I::Export>> {
        let target = self.env.global_root(manager).join(candidate);
        match self.importer.import(&target).await {
            Ok(export) => {
                debug!(
                    "Resolved '{}' from {:?} global root at {}",
                    candidate,
                    manager,
                    target.display()
                );
                Ok(Some(export))
            }
            Err(ImportError::NotFound(_)) => Ok(None),
            Err(err) => Err(ResolveError::Import(err)),
        }
    }
}
