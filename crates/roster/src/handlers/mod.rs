pub mod dispatch;
pub mod error;

pub use error::ApiError;
