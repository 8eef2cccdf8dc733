use crate::error::{assume_d3d11_init, Result};
use quadlight_common::{FilterMode, WrapMode};
use windows::Win32::Graphics::Direct3D11::{
    ID3D11Device, ID3D11SamplerState, D3D11_COMPARISON_NEVER, D3D11_FLOAT32_MAX,
    D3D11_SAMPLER_DESC, D3D11_TEXTURE_ADDRESS_MODE,
};

pub fn create_sampler(
    device: &ID3D11Device,
    filter: FilterMode,
    wrap_mode: WrapMode,
) -> Result<ID3D11SamplerState> {
    let address = D3D11_TEXTURE_ADDRESS_MODE::from(wrap_mode);
    let mut sampler = None;
    unsafe {
        device.CreateSamplerState(
            &D3D11_SAMPLER_DESC {
                Filter: filter.into(),
                AddressU: address,
                AddressV: address,
                AddressW: address,
                MipLODBias: 0.0,
                MaxAnisotropy: 1,
                ComparisonFunc: D3D11_COMPARISON_NEVER,
                BorderColor: [0.0, 0.0, 0.0, 0.0],
                MinLOD: 0.0,
                MaxLOD: D3D11_FLOAT32_MAX,
            },
            Some(&mut sampler),
        )?;
    }
    assume_d3d11_init!(sampler, "CreateSamplerState");
    Ok(sampler)
}
