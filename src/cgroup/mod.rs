//! Parsing of cgroup membership data into container and pod identifiers.
//!
//! Each line of `/proc/<pid>/cgroup` has the format
//! `<hierarchy-id>:<controller-list>:<cgroup-path>`:
//!
//! - `<hierarchy-id>`: arbitrary number for cgroup v1, always `0` for v2.
//! - `<controller-list>`: comma-separated controllers for v1 (e.g. `cpu,cpuacct`), empty for v2.
//! - `<cgroup-path>`: path of the process relative to the hierarchy root.
//!
//! Container runtimes encode their ids into the cgroup path in different ways depending on
//! the cgroup driver:
//!
//! - cgroupfs: `/docker/<id>`, `/kubepods/besteffort/pod<uid>/<id>`
//! - systemd: `/system.slice/docker-<id>.scope`,
//!   `/kubepods.slice/kubepods-burstable.slice/kubepods-burstable-pod<uid>.slice/cri-containerd-<id>.scope`
//! - containerd >= 1.5 with the systemd driver: `.../cri-containerd:<id>`
//!
//! # Key Components
//!
//! - [`parse_cgroup_line`] — Splits a line into a [`CgroupLine`].
//! - [`classify_path`] — Strict extraction of container and pod ids from a cgroup path.
//! - [`extract_container_id`] — Lenient extraction of a container id from a raw line.
mod classify;
mod fallback;
mod line;

pub use classify::classify_path;
pub use fallback::{extract_container_id, first_container_id};
pub use line::{CgroupLine, ParseError, parse_cgroup_line};
