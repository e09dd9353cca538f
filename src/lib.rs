//! Short random display names built from sea words, e.g. "CuteRedWalrus".

pub mod error;
pub mod format;
pub mod names;
pub mod words;

pub use error::{Result, UsernameError};
pub use names::{
    combine_username, generate, generate_with_max_size, Generator, IndexSource, MaxSize,
};
pub use words::WordLists;
