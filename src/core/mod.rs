pub mod error;
pub mod timestamp;

pub use error::{GENERIC_ERROR_MESSAGE, RemoteError, Result, StoreError, ValidationError};
pub use timestamp::{newest_first, now_iso_string, parse_created_at, to_iso_string};
