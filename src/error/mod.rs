mod app_error;
mod upstream_error;

pub use app_error::AppError;
pub use upstream_error::UpstreamError;

pub type Result<T> = std::result::Result<T, AppError>;
