/// Converts a `Result` into an `Option`, logging the error instead of propagating it.
///
/// Used where a failure only means that less information is available, e.g. a cgroup file
/// that vanished while being read.
pub trait ResultOkLogExt<T, E> {
    fn ok_log(self, context: &str) -> Option<T>;
}

impl<T, E> ResultOkLogExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn ok_log(self, context: &str) -> Option<T> {
        match self {
            Ok(ok) => Some(ok),
            Err(err) => {
                log::warn!("{context}: {err}");
                None
            }
        }
    }
}
