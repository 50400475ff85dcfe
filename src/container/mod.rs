use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

mod error;
mod utils;

pub use error::{Error, Result};
pub use utils::is_non_empty_hex_string;

/// A validated container identifier.
///
/// Container ids are base-16 strings of any length. They are stored case-folded to lowercase,
/// so ids taken from differently formatted cgroup paths compare equal.
///
/// # Examples
///
/// ```
/// # use cgroup_identity::container::ContainerID;
/// let raw_id = "ABC123abc123abc123abc123abc123abc123abc123abc123abc123abc123abcd";
/// let container_id = ContainerID::new(raw_id).unwrap();
/// assert_eq!(container_id.as_ref(), "abc123abc123abc123abc123abc123abc123abc123abc123abc123abc123abcd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerID(Arc<str>);

impl ContainerID {
    /// Creates a new `ContainerID` from the given raw id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContainerID`] if the input is empty or is not made of hex digits
    /// only.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cgroup_identity::container::ContainerID;
    /// assert!(ContainerID::new("deadbeef").is_ok());
    /// assert!(ContainerID::new("not-hex").is_err());
    /// assert!(ContainerID::new("").is_err());
    /// ```
    pub fn new(src: impl AsRef<str>) -> Result<Self> {
        let src = src.as_ref();
        if !is_non_empty_hex_string(src) {
            return Err(Error::InvalidContainerID(src.to_owned()));
        }

        Ok(Self(src.to_ascii_lowercase().into()))
    }
}

impl FromStr for ContainerID {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ContainerID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContainerID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for ContainerID {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// A validated Kubernetes pod UID as it appears in a pod slice name.
///
/// The original separators are kept: cgroupfs paths use `-`, the systemd driver
/// rewrites them to `_`.
///
/// # Examples
///
/// ```
/// # use cgroup_identity::container::PodID;
/// let pod_id = PodID::new("12345678_1234_1234_1234_1234567890ab").unwrap();
/// assert_eq!(pod_id.as_ref(), "12345678_1234_1234_1234_1234567890ab");
/// assert!(PodID::new("1234567812341234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PodID(Arc<str>);

impl PodID {
    /// Creates a new `PodID` from the given raw UID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPodID`] if the input is not a lowercase UUID with `-` or `_`
    /// separated groups.
    pub fn new(src: impl AsRef<str>) -> Result<Self> {
        let src = src.as_ref();
        if !utils::is_separated_uuid(src) {
            return Err(Error::InvalidPodID(src.to_owned()));
        }

        Ok(Self(src.into()))
    }
}

impl FromStr for PodID {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PodID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PodID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for PodID {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_id_has_no_length_limit() {
        let raw = "a".repeat(1024);
        let id = ContainerID::new(&raw).unwrap();
        assert_eq!(id.as_ref(), raw);
    }

    #[test]
    fn test_container_id_rejects_non_hex() {
        match ContainerID::new("abcxyz") {
            Err(Error::InvalidContainerID(id)) => assert_eq!(id, "abcxyz"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_container_id_is_case_folded() {
        let upper = ContainerID::new("DEADBEEF").unwrap();
        let lower = ContainerID::new("deadbeef").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "deadbeef");
    }

    #[test]
    fn test_pod_id_rejects_uppercase() {
        assert!(matches!(
            PodID::new("12345678-1234-1234-1234-1234567890AB"),
            Err(Error::InvalidPodID(_))
        ));
    }

    #[test]
    fn test_ids_serialize_as_strings() {
        let container_id: ContainerID = "abc123".parse().unwrap();
        let pod_id: PodID = "12345678-1234-1234-1234-1234567890ab".parse().unwrap();

        assert_eq!(
            serde_json::to_string(&container_id).unwrap(),
            "\"abc123\""
        );
        assert_eq!(
            serde_json::to_string(&pod_id).unwrap(),
            "\"12345678-1234-1234-1234-1234567890ab\""
        );
    }
}
