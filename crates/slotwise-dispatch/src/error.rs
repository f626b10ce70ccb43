#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Index out of range [index: {index}; len: {len}]")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown no-match policy: {:?}", _0)]
    UnknownPolicy(String),
}
