use crate::error::{assume_d3d11_init, Result};
use quadlight_common::image::Image;
use quadlight_common::{ImageFormat, Size};
use windows::Win32::Graphics::Direct3D::D3D_SRV_DIMENSION_TEXTURE2D;
use windows::Win32::Graphics::Direct3D11::{
    ID3D11Device, ID3D11ShaderResourceView, ID3D11Texture2D, D3D11_BIND_SHADER_RESOURCE,
    D3D11_SHADER_RESOURCE_VIEW_DESC, D3D11_SHADER_RESOURCE_VIEW_DESC_0, D3D11_SUBRESOURCE_DATA,
    D3D11_TEX2D_SRV, D3D11_TEXTURE2D_DESC, D3D11_USAGE_IMMUTABLE,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_SAMPLE_DESC;

/// An immutable texture and the view the pixel shader samples it through.
#[derive(Debug, Clone)]
pub struct OwnedTexture {
    pub view: ID3D11ShaderResourceView,
    pub handle: ID3D11Texture2D,
    pub size: Size<u32>,
}

impl OwnedTexture {
    pub fn new(device: &ID3D11Device, source: &Image, format: ImageFormat) -> Result<OwnedTexture> {
        let desc = D3D11_TEXTURE2D_DESC {
            Width: source.size.width,
            Height: source.size.height,
            MipLevels: 1,
            ArraySize: 1,
            Format: format.into(),
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: 1,
                Quality: 0,
            },
            Usage: D3D11_USAGE_IMMUTABLE,
            BindFlags: D3D11_BIND_SHADER_RESOURCE.0 as u32,
            CPUAccessFlags: 0,
            MiscFlags: 0,
        };

        let mut handle = None;
        let mut view = None;
        unsafe {
            device.CreateTexture2D(
                &desc,
                Some(&D3D11_SUBRESOURCE_DATA {
                    pSysMem: source.bytes.as_ptr().cast(),
                    SysMemPitch: source.pitch as u32,
                    SysMemSlicePitch: 0,
                }),
                Some(&mut handle),
            )?;
            assume_d3d11_init!(handle, "CreateTexture2D");

            device.CreateShaderResourceView(
                &handle,
                Some(&D3D11_SHADER_RESOURCE_VIEW_DESC {
                    Format: desc.Format,
                    ViewDimension: D3D_SRV_DIMENSION_TEXTURE2D,
                    Anonymous: D3D11_SHADER_RESOURCE_VIEW_DESC_0 {
                        Texture2D: D3D11_TEX2D_SRV {
                            MostDetailedMip: 0,
                            MipLevels: desc.MipLevels,
                        },
                    },
                }),
                Some(&mut view),
            )?;
            assume_d3d11_init!(view, "CreateShaderResourceView");

            Ok(OwnedTexture {
                view,
                handle,
                size: source.size,
            })
        }
    }
}
