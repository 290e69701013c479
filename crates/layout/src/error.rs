use simplepdf_render::RenderError;
use simplepdf_traits::MetricsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Render error: {0}")]
    Render(#[source] RenderError),
    #[error("Text metrics unavailable: {0}")]
    MetricsUnavailable(#[from] MetricsError),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

/// Measurement failures raised while drawing an underline are reported the same way as
/// those raised while wrapping.
impl From<RenderError> for LayoutError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Metrics(e) => LayoutError::MetricsUnavailable(e),
            other => LayoutError::Render(other),
        }
    }
}
