//! Resolution of the container and pod identity of a process from its cgroup membership.
//!
//! Two strategies are available, selected through [`Mode`]:
//!
//! - [`Mode::Fast`] scans raw lines with [`extract_container_id`] and stops at the first line
//!   that yields a container id. Pod ids are never resolved.
//! - [`Mode::Detailed`] parses every line with [`parse_cgroup_line`] and [`classify_path`].
//!   The last line yielding a container id (or pod id) wins.
//!
//! Neither strategy fails: a missing or unreadable source, malformed lines and read errors
//! all degrade to fewer or no identifiers.
//!
//! [`extract_container_id`]: crate::cgroup::extract_container_id
mod cache;
mod error;

pub use cache::IdentityCache;
pub use error::{Error, Result};

use crate::cgroup::{self, CgroupLine, classify_path, parse_cgroup_line};
use crate::container::{ContainerID, PodID};
use crate::error::ResultOkLogExt;
use crate::source::{CgroupSource, ProcFile};

static FAST_IDENTITY: IdentityCache = IdentityCache::new(Mode::Fast);
static DETAILED_IDENTITY: IdentityCache = IdentityCache::new(Mode::Detailed);

/// Strategy used to derive identifiers from cgroup lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Container id only, first match wins.
    Fast,
    /// Container and pod id, last match wins.
    Detailed,
}

/// Container and pod identity of a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Identity {
    pub container_id: Option<ContainerID>,
    pub pod_id: Option<PodID>,
}

impl Identity {
    /// Returns true if neither id is known.
    pub fn is_empty(&self) -> bool {
        self.container_id.is_none() && self.pod_id.is_none()
    }

    /// Overwrites each id that is present in the arguments and keeps the others.
    fn update(&mut self, container_id: Option<&ContainerID>, pod_id: Option<&PodID>) {
        if let Some(container_id) = container_id {
            self.container_id = Some(container_id.clone());
        }
        if let Some(pod_id) = pod_id {
            self.pod_id = Some(pod_id.clone());
        }
    }
}

/// A single parsed cgroup line together with the ids found in its path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CgroupRecord {
    pub hierarchy_id: u64,
    pub path: String,
    pub controllers: Vec<String>,
    pub container_id: Option<ContainerID>,
    pub pod_id: Option<PodID>,
}

impl From<CgroupLine<'_>> for CgroupRecord {
    fn from(line: CgroupLine<'_>) -> Self {
        let (container_id, pod_id) = classify_path(line.path);
        Self {
            hierarchy_id: line.hierarchy_id,
            path: line.path.to_owned(),
            controllers: line.controllers.into_iter().map(str::to_owned).collect(),
            container_id,
            pod_id,
        }
    }
}

/// The resolved [`Identity`] along with every cgroup line it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct CgroupInfo {
    #[serde(flatten)]
    pub identity: Identity,
    pub cgroups: Vec<CgroupRecord>,
}

impl CgroupInfo {
    /// Parses the full content of a cgroup file, failing on the first malformed line.
    ///
    /// Blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with the 1-based line number of the first malformed line.
    ///
    /// # Example
    ///
    /// ```
    /// use cgroup_identity::resolver::CgroupInfo;
    ///
    /// let content = "\
    /// 2:cpu:/docker/3601745b3bd54d9780436faa5f0e4f72bb46231663bb99a6bb892764917832c2
    /// 0::/docker/3601745b3bd54d9780436faa5f0e4f72bb46231663bb99a6bb892764917832c2
    /// ";
    /// let info = CgroupInfo::parse(content).unwrap();
    /// assert_eq!(info.cgroups.len(), 2);
    /// assert!(info.identity.container_id.is_some());
    ///
    /// assert!(CgroupInfo::parse("not a cgroup line").is_err());
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let mut info = Self::default();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let parsed = parse_cgroup_line(line).map_err(|source| Error::Parse {
                line: idx + 1,
                source,
            })?;
            info.push(parsed.into());
        }

        Ok(info)
    }

    /// Parses the full content of a cgroup file, skipping malformed lines.
    pub fn parse_lenient<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut info = Self::default();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match parse_cgroup_line(line) {
                Ok(parsed) => info.push(parsed.into()),
                Err(err) => log::debug!("Skipping cgroup line: {}", err),
            }
        }

        info
    }

    fn push(&mut self, record: CgroupRecord) {
        self.identity
            .update(record.container_id.as_ref(), record.pod_id.as_ref());
        self.cgroups.push(record);
    }
}

/// Resolves the identity described by `source` using the given strategy.
///
/// In [`Mode::Fast`] the resulting identity never carries a pod id.
pub fn resolve(source: &impl CgroupSource, mode: Mode) -> Identity {
    match mode {
        Mode::Fast => Identity {
            container_id: resolve_container_id_from(source),
            pod_id: None,
        },
        Mode::Detailed => resolve_identity_from(source),
    }
}

/// Resolves the container id from `source`, returning the first one found.
///
/// Not cached; see [`resolve_container_id`] for the process-wide value.
pub fn resolve_container_id_from(source: &impl CgroupSource) -> Option<ContainerID> {
    let lines = open_lines(source)?;
    cgroup::first_container_id(lines)
}

/// Resolves the container and pod id from `source`.
///
/// Not cached; see [`resolve_identity`] for the process-wide value.
pub fn resolve_identity_from(source: &impl CgroupSource) -> Identity {
    resolve_cgroup_info(source).identity
}

/// Resolves the identity from `source` and returns it with all parsed cgroup lines.
pub fn resolve_cgroup_info(source: &impl CgroupSource) -> CgroupInfo {
    match open_lines(source) {
        Some(lines) => CgroupInfo::parse_lenient(lines),
        None => CgroupInfo::default(),
    }
}

/// Returns the container id of the current process, resolved once per process.
///
/// # Example
///
/// ```no_run
/// match cgroup_identity::resolve_container_id() {
///     Some(id) => println!("container: {id}"),
///     None => println!("not running in a container"),
/// }
/// ```
pub fn resolve_container_id() -> Option<&'static ContainerID> {
    FAST_IDENTITY
        .get_or_resolve(&ProcFile::default())
        .container_id
        .as_ref()
}

/// Returns the container and pod id of the current process, resolved once per process.
pub fn resolve_identity() -> &'static Identity {
    DETAILED_IDENTITY.get_or_resolve(&ProcFile::default())
}

/// Returns true if the cgroup membership of the current process can be inspected.
pub fn is_running_in_container() -> bool {
    let source = ProcFile::default();
    source.exists() && source.is_readable()
}

/// Opens the lines of `source`. Reading stops at the first I/O error, so callers see
/// everything up to that point.
///
/// The source is opened once; failing to open it counts as unreadable.
fn open_lines<S: CgroupSource>(source: &S) -> Option<impl Iterator<Item = String>> {
    if !source.exists() {
        log::debug!("No cgroup source, skipping identity resolution");
        return None;
    }

    let lines = match source.lines() {
        Ok(lines) => lines,
        Err(err) => {
            log::debug!("Unreadable cgroup source, skipping identity resolution: {err}");
            return None;
        }
    };
    Some(lines.map_while(|line| line.ok_log("failed to read cgroup line")))
}
