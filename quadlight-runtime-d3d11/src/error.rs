//! Direct3D 11 renderer errors.
use quadlight_common::image::ImageError;
use quadlight_preprocess::PreprocessError;
use quadlight_runtime::options::OptionsError;
use thiserror::Error;

/// Cumulative error type for the Direct3D 11 renderer.
#[derive(Error, Debug)]
pub enum D3D11Error {
    #[error("direct3d driver error: {0}")]
    Direct3DError(#[from] windows::core::Error),
    #[error("{0} succeeded but did not return an object")]
    NullInitialization(&'static str),
    #[error("failed to compile {entry}: {message}")]
    ShaderCompileError { entry: String, message: String },
    #[error("shader source error: {0}")]
    ShaderSourceError(#[from] PreprocessError),
    #[error("texture loading error: {0}")]
    ImageError(#[from] ImageError),
    #[error("invalid options: {0}")]
    OptionsError(#[from] OptionsError),
}

/// Result type for the Direct3D 11 renderer.
pub type Result<T> = std::result::Result<T, D3D11Error>;

/// Unwrap the out-parameter of a successful create call, or fail with the
/// name of the call.
macro_rules! assume_d3d11_init {
    ($value:ident, $call:literal) => {
        let $value = $value.ok_or($crate::error::D3D11Error::NullInitialization($call))?;
    };
}

pub(crate) use assume_d3d11_init;
