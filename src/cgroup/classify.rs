use std::sync::LazyLock;

use regex::Regex;

use crate::container::{ContainerID, PodID};

/// A 32 hex digit id, optionally grouped 8-4-4-4-12 with `-` or `_`.
const UUID_PATTERN: &str =
    "[0-9a-f]{8}[-_]?[0-9a-f]{4}[-_]?[0-9a-f]{4}[-_]?[0-9a-f]{4}[-_]?[0-9a-f]{12}";
/// A UUID whose groups are always separated, as used in pod slice names.
const SEPARATED_UUID_PATTERN: &str =
    "[0-9a-f]{8}[-_][0-9a-f]{4}[-_][0-9a-f]{4}[-_][0-9a-f]{4}[-_][0-9a-f]{12}";

static CONTAINER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?:^|[^0-9a-f])({UUID_PATTERN}|[0-9a-f]{{64}})$"
    ))
    .expect("invalid container id regex")
});

static POD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("pod({SEPARATED_UUID_PATTERN})$")).expect("invalid pod id regex")
});

/// Derives the container and pod ids from a cgroup path.
///
/// Only the two most specific segments take part: the leaf names the container and the
/// segment above it names the pod slice. For example
/// `/kubepods.slice/kubepods-besteffort-pod<uid>.slice/cri-containerd-<id>.scope`
/// yields both ids, `/docker/<id>` only a container id.
///
/// A container id matched in UUID form is returned without its separators; a pod id keeps
/// them.
///
/// # Example
///
/// ```
/// use cgroup_identity::cgroup::classify_path;
///
/// let path = "/kubepods/besteffort/pod12345678-1234-1234-1234-1234567890ab/\
///             0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
/// let (container_id, pod_id) = classify_path(path);
/// assert_eq!(
///     container_id.unwrap().as_ref(),
///     "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"
/// );
/// assert_eq!(pod_id.unwrap().as_ref(), "12345678-1234-1234-1234-1234567890ab");
/// ```
pub fn classify_path(path: &str) -> (Option<ContainerID>, Option<PodID>) {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty()).rev();

    let container_id = segments.next().and_then(container_id_from_segment);
    let pod_id = segments.next().and_then(pod_id_from_segment);

    (container_id, pod_id)
}

fn container_id_from_segment(segment: &str) -> Option<ContainerID> {
    let segment = segment
        .strip_suffix(".scope")
        .or_else(|| segment.strip_suffix(".slice"))
        .unwrap_or(segment);

    let captures = CONTAINER_PATTERN.captures(segment)?;
    let raw: String = captures[1]
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .collect();

    ContainerID::new(raw).ok()
}

fn pod_id_from_segment(segment: &str) -> Option<PodID> {
    let segment = segment.strip_suffix(".slice").unwrap_or(segment);
    let captures = POD_PATTERN.captures(segment)?;

    PodID::new(&captures[1]).ok()
}
