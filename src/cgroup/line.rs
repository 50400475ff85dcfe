//! Cgroup membership line parser for Linux systems.
//!
//! Parses lines in `/proc/[pid]/cgroup` format. See
//! [`cgroups(7)`](https://man7.org/linux/man-pages/man7/cgroups.7.html) for details on the
//! structure.

/// Represents a parsed cgroup membership line.
#[derive(Debug, PartialEq, Eq)]
pub struct CgroupLine<'a> {
    /// Hierarchy ID field. Always `0` for the cgroup v2 unified hierarchy.
    pub hierarchy_id: u64,
    /// Controllers bound to the hierarchy. Empty for cgroup v2.
    pub controllers: Vec<&'a str>,
    /// Path of the process within the hierarchy, relative to its mount point.
    pub path: &'a str,
}

/// Errors that may occur when parsing a cgroup line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed cgroup line: `{0}`")]
    MalformedLine(String),
}

/// Parses a single line of cgroup membership data.
///
/// The line must have the shape `<hierarchy-id>:<controller-list>:<cgroup-path>`, where the
/// hierarchy id is all digits, the controller list contains no `:` and the path is non-empty.
/// The path is the whole remainder of the line and may itself contain `:`.
///
/// # Errors
///
/// Returns [`ParseError::MalformedLine`] if the line does not have that shape.
///
/// # Example
///
/// ```
/// use cgroup_identity::cgroup::parse_cgroup_line;
///
/// let line = parse_cgroup_line("4:cpu,cpuacct:/docker/abc").unwrap();
/// assert_eq!(line.hierarchy_id, 4);
/// assert_eq!(line.controllers, vec!["cpu", "cpuacct"]);
/// assert_eq!(line.path, "/docker/abc");
/// ```
pub fn parse_cgroup_line(line: &str) -> Result<CgroupLine<'_>, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let malformed = || ParseError::MalformedLine(line.to_owned());

    let (hierarchy_id, rest) = line.split_once(':').ok_or_else(malformed)?;
    let (controllers, path) = rest.split_once(':').ok_or_else(malformed)?;

    if hierarchy_id.is_empty() || !hierarchy_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if path.is_empty() {
        return Err(malformed());
    }
    let hierarchy_id = hierarchy_id.parse::<u64>().map_err(|_| malformed())?;

    let controllers = if controllers.is_empty() {
        Vec::new()
    } else {
        controllers.split(',').collect()
    };

    Ok(CgroupLine {
        hierarchy_id,
        controllers,
        path,
    })
}
