use std::sync::OnceLock;

use crate::source::CgroupSource;

use super::{Identity, Mode, resolve};

/// A process-lifetime [`Identity`], resolved at most once.
///
/// Cgroup membership does not change for a running process, so the first resolution is
/// kept and handed out to every later caller. Concurrent first callers block until the single
/// resolution finishes and then observe the same value.
#[derive(Debug)]
pub struct IdentityCache {
    mode: Mode,
    identity: OnceLock<Identity>,
}

impl IdentityCache {
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            identity: OnceLock::new(),
        }
    }

    /// Returns the cached identity, resolving it from `source` if this is the first call.
    ///
    /// The source of later calls is ignored.
    pub fn get_or_resolve(&self, source: &impl CgroupSource) -> &Identity {
        self.identity.get_or_init(|| {
            let identity = resolve(source, self.mode);
            log::debug!("Resolved {:?} cgroup identity: {:?}", self.mode, identity);
            identity
        })
    }

    /// Returns the cached identity, if it was resolved already.
    pub fn get(&self) -> Option<&Identity> {
        self.identity.get()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
