//! cgroup-identity: resolves the container and Kubernetes pod a process runs in from its
//! cgroup membership.
//!
//! This library reads `/proc/self/cgroup`, understands the path conventions of the common
//! container runtimes and cgroup drivers, and returns best-effort identifiers. Hosts without
//! containerization simply yield no identifiers.
//!
//! ```no_run
//! let identity = cgroup_identity::resolve_identity();
//! if let Some(pod_id) = &identity.pod_id {
//!     println!("running in pod {pod_id}");
//! }
//! ```
pub mod cgroup;
pub mod container;
pub mod error;
pub mod fsutil;
pub mod resolver;
pub mod source;

// Typical /proc/self/cgroup content inside a container:
//  cgroup v1: one line per hierarchy, e.g. `4:cpu,cpuacct:/kubepods/besteffort/pod<uid>/<id>`
//  cgroup v2: a single `0::<path>` line
//  with cgroup namespaces the path may be just `/`, which yields no ids

pub use container::{ContainerID, PodID};
pub use resolver::{
    CgroupInfo, CgroupRecord, Identity, IdentityCache, Mode, is_running_in_container, resolve,
    resolve_cgroup_info, resolve_container_id, resolve_container_id_from, resolve_identity,
    resolve_identity_from,
};
pub use source::{CgroupSource, DEFAULT_CGROUP_PATH, ProcFile, StaticSource};
