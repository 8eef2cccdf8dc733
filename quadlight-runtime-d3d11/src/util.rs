use crate::error::{assume_d3d11_init, D3D11Error, Result};
use quadlight_preprocess::ShaderStage;
use std::slice;
use windows::core::PCSTR;
use windows::Win32::Graphics::Direct3D::Fxc::{
    D3DCompile, D3DCOMPILE_DEBUG, D3DCOMPILE_ENABLE_STRICTNESS, D3DCOMPILE_OPTIMIZATION_LEVEL3,
    D3DCOMPILE_SKIP_OPTIMIZATION,
};
use windows::Win32::Graphics::Direct3D::ID3DBlob;
use windows::Win32::Graphics::Direct3D11::{
    ID3D11Device, ID3D11GeometryShader, ID3D11InputLayout, ID3D11PixelShader,
    ID3D11VertexShader, D3D11_INPUT_ELEMENT_DESC,
};

/// View the contents of a blob.
pub fn blob_bytes(blob: &ID3DBlob) -> &[u8] {
    unsafe {
        // SAFETY: the slice is valid for as long as the blob is alive.
        slice::from_raw_parts(blob.GetBufferPointer().cast::<u8>(), blob.GetBufferSize())
    }
}

pub fn d3d_compile_shader(source: &str, stage: ShaderStage) -> Result<ID3DBlob> {
    let flags = D3DCOMPILE_ENABLE_STRICTNESS
        | if cfg!(debug_assertions) {
            D3DCOMPILE_DEBUG | D3DCOMPILE_SKIP_OPTIMIZATION
        } else {
            D3DCOMPILE_OPTIMIZATION_LEVEL3
        };

    let mut blob = None;
    let mut errors = None;
    let compiled = unsafe {
        D3DCompile(
            source.as_ptr().cast(),
            source.len(),
            PCSTR::null(),
            None,
            None,
            PCSTR(stage.entry_point().as_ptr().cast()),
            PCSTR(stage.profile().as_ptr().cast()),
            flags,
            0,
            &mut blob,
            Some(&mut errors),
        )
    };

    if let Err(error) = compiled {
        let message = errors
            .as_ref()
            .map(|errors| String::from_utf8_lossy(blob_bytes(errors)).trim_end_matches('\0').trim().to_string())
            .unwrap_or_else(|| error.message());
        return Err(D3D11Error::ShaderCompileError {
            entry: stage.entry_point().to_string_lossy().into_owned(),
            message,
        });
    }

    if let Some(warnings) = &errors {
        log::warn!(
            "{}: {}",
            stage.file_name(),
            String::from_utf8_lossy(blob_bytes(warnings)).trim_end_matches('\0')
        );
    }

    assume_d3d11_init!(blob, "D3DCompile");
    Ok(blob)
}

/// A shader object that can be created from compiled bytecode.
pub trait ShaderObject: Sized {
    unsafe fn create(device: &ID3D11Device, bytecode: &[u8]) -> Result<Self>;
}

impl ShaderObject for ID3D11VertexShader {
    unsafe fn create(device: &ID3D11Device, bytecode: &[u8]) -> Result<Self> {
        let mut shader = None;
        device.CreateVertexShader(bytecode, None, Some(&mut shader))?;
        assume_d3d11_init!(shader, "CreateVertexShader");
        Ok(shader)
    }
}

impl ShaderObject for ID3D11GeometryShader {
    unsafe fn create(device: &ID3D11Device, bytecode: &[u8]) -> Result<Self> {
        let mut shader = None;
        device.CreateGeometryShader(bytecode, None, Some(&mut shader))?;
        assume_d3d11_init!(shader, "CreateGeometryShader");
        Ok(shader)
    }
}

impl ShaderObject for ID3D11PixelShader {
    unsafe fn create(device: &ID3D11Device, bytecode: &[u8]) -> Result<Self> {
        let mut shader = None;
        device.CreatePixelShader(bytecode, None, Some(&mut shader))?;
        assume_d3d11_init!(shader, "CreatePixelShader");
        Ok(shader)
    }
}

pub fn d3d11_create_shader<T: ShaderObject>(device: &ID3D11Device, blob: &ID3DBlob) -> Result<T> {
    unsafe { T::create(device, blob_bytes(blob)) }
}

pub fn d3d11_create_input_layout(
    device: &ID3D11Device,
    desc: &[D3D11_INPUT_ELEMENT_DESC],
    blob: &ID3DBlob,
) -> Result<ID3D11InputLayout> {
    let mut layout = None;
    unsafe {
        device.CreateInputLayout(desc, blob_bytes(blob), Some(&mut layout))?;
    }
    assume_d3d11_init!(layout, "CreateInputLayout");
    Ok(layout)
}
