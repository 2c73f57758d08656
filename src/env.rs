// modport/src/env.rs
use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::Result;

/// The two global package layouts the resolver knows how to search.
/// The npm layout is always consulted before the yarn layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

/// Facts about the host environment that the resolver consumes but does
/// not compute: where each package manager keeps its globally installed
/// packages, whether the running application was itself installed
/// globally, and whether a package name is currently set up as a
/// development link.
///
/// Hosts wire in whatever detection they already have; [`StaticEnv`]
/// covers the common case where all three facts are known up front.
#[allow(async_fn_in_trait)]
pub trait ResolverEnv {
    fn global_root(&self, manager: PackageManager) -> PathBuf;

    fn is_installed_globally(&self) -> bool;

    async fn is_linked(&self, module: &str) -> Result<bool>;
}

/// Data-backed [`ResolverEnv`]: explicit global roots, an
/// installed-globally flag and a set of linked package names.
#[derive(Debug, Clone)]
pub struct StaticEnv {
    npm_root: PathBuf,
    yarn_root: PathBuf,
    installed_globally: bool,
    linked: HashSet<String>,
}

impl StaticEnv {
    pub fn new(npm_root: impl Into<PathBuf>, yarn_root: impl Into<PathBuf>) -> Self {
        Self {
            npm_root: npm_root.into(),
            yarn_root: yarn_root.into(),
            installed_globally: false,
            linked: HashSet::new(),
        }
    }

    /// Marks the running application as globally installed, enabling
    /// global fallback for every candidate.
    pub fn installed_globally(mut self, installed: bool) -> Self {
        self.installed_globally = installed;
        self
    }

    /// Registers a package name as development-linked.
    pub fn link(mut self, module: impl Into<String>) -> Self {
        self.linked.insert(module.into());
        self
    }
}

impl ResolverEnv for StaticEnv {
    fn global_root(&self, manager: PackageManager) -> PathBuf {
        match manager {
            PackageManager::Npm => self.npm_root.clone(),
            PackageManager::Yarn => self.yarn_root.clone(),
        }
    }

    fn is_installed_globally(&self) -> bool {
        self.installed_globally
    }

    async fn is_linked(&self, module: &str) -> Result<bool> {
        Ok(self.linked.contains(module))
    }
}
