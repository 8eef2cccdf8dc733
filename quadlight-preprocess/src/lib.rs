//! Loading of the demo's HLSL shader sources.
//!
//! Each pipeline stage lives in its own file. Sources may `#include` shared
//! declarations; includes are spliced in before the source is handed to the
//! shader compiler, so the compiler never needs an include handler.
mod error;
mod include;

use std::ffi::CStr;
use std::path::Path;

pub use error::*;
pub use include::{read_source, FileSystem, SourceProvider};

static BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("common.hlsl", include_str!("../shaders/common.hlsl")),
    ("vertex.hlsl", include_str!("../shaders/vertex.hlsl")),
    ("geometry.hlsl", include_str!("../shaders/geometry.hlsl")),
    ("fragment.hlsl", include_str!("../shaders/fragment.hlsl")),
];

/// The shader sources compiled into the binary.
pub struct Builtin;

impl SourceProvider for Builtin {
    fn read(&self, path: &Path) -> Result<String, PreprocessError> {
        let name = path.to_string_lossy();
        BUILTIN_SOURCES
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, source)| source.to_string())
            .ok_or_else(|| PreprocessError::MissingBuiltin(name.into_owned()))
    }
}

/// A programmable stage of the pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Geometry,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 3] = [
        ShaderStage::Vertex,
        ShaderStage::Geometry,
        ShaderStage::Fragment,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex.hlsl",
            ShaderStage::Geometry => "geometry.hlsl",
            ShaderStage::Fragment => "fragment.hlsl",
        }
    }

    pub fn entry_point(&self) -> &'static CStr {
        match self {
            ShaderStage::Vertex => c"VS_main",
            ShaderStage::Geometry => c"GS_main",
            ShaderStage::Fragment => c"PS_main",
        }
    }

    /// The shader model target passed to the compiler.
    pub fn profile(&self) -> &'static CStr {
        match self {
            ShaderStage::Vertex => c"vs_5_0",
            ShaderStage::Geometry => c"gs_5_0",
            ShaderStage::Fragment => c"ps_5_0",
        }
    }
}

/// Fully included sources for every stage.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub vertex: String,
    pub geometry: String,
    pub fragment: String,
}

impl ShaderSource {
    /// Load the stage sources from a directory.
    pub fn load(dir: impl AsRef<Path>) -> Result<ShaderSource, PreprocessError> {
        let dir = dir.as_ref();
        log::debug!("loading shader sources from {}", dir.display());
        Self::load_from(&FileSystem::new(dir))
    }

    /// Load the sources compiled into the binary.
    pub fn builtin() -> Result<ShaderSource, PreprocessError> {
        Self::load_from(&Builtin)
    }

    fn load_from(provider: &impl SourceProvider) -> Result<ShaderSource, PreprocessError> {
        Ok(ShaderSource {
            vertex: read_source(provider, ShaderStage::Vertex.file_name())?,
            geometry: read_source(provider, ShaderStage::Geometry.file_name())?,
            fragment: read_source(provider, ShaderStage::Fragment.file_name())?,
        })
    }

    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Geometry => &self.geometry,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}
