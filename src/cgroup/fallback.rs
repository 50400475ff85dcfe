use crate::container::{ContainerID, is_non_empty_hex_string};

/// Extracts a container id from the last `/` separated section of a raw cgroup line.
///
/// The section may carry metadata around the id: a runtime prefix ending in `-` and a unit
/// suffix starting with `.`, as in `docker-<id>.scope`. Since containerd 1.5 with the systemd
/// cgroup driver the id instead follows the last `:`, as in `cri-containerd:<id>`. When the
/// section contains a `:` that form is used, even if the `-`/`.` bounded text would be a
/// valid id.
///
/// Any non-empty base-16 candidate is accepted, regardless of its length.
///
/// # Example
///
/// ```
/// use cgroup_identity::cgroup::extract_container_id;
///
/// let id = extract_container_id("1:name=systemd:/system.slice/docker-deadbeef.scope");
/// assert_eq!(id.unwrap().as_ref(), "deadbeef");
/// assert!(extract_container_id("0::/init.scope").is_none());
/// ```
pub fn extract_container_id(line: &str) -> Option<ContainerID> {
    let last_section = line
        .rsplit_once('/')
        .map_or(line, |(_, section)| section);

    let candidate = match last_section.rsplit_once(':') {
        Some((_, id)) => id,
        None => {
            let start = last_section.rfind('-').map_or(0, |idx| idx + 1);
            let end = last_section.rfind('.').unwrap_or(last_section.len());
            if start > end {
                return None;
            }
            &last_section[start..end]
        }
    };

    if !is_non_empty_hex_string(candidate) {
        return None;
    }

    ContainerID::new(candidate).ok()
}

/// Returns the container id of the first line, in order, that yields one.
///
/// Blank lines are skipped. The iterator is not consumed past the first match.
pub fn first_container_id<I>(lines: I) -> Option<ContainerID>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| !line.as_ref().is_empty())
        .find_map(|line| extract_container_id(line.as_ref()))
}
