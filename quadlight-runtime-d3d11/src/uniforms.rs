use crate::error::{assume_d3d11_init, Result};
use quadlight_runtime::uniforms::UniformBlock;
use std::marker::PhantomData;
use windows::Win32::Graphics::Direct3D11::{
    ID3D11Buffer, ID3D11Device, ID3D11DeviceContext, D3D11_BIND_CONSTANT_BUFFER,
    D3D11_BUFFER_DESC, D3D11_CPU_ACCESS_WRITE, D3D11_MAPPED_SUBRESOURCE, D3D11_MAP_WRITE_DISCARD,
    D3D11_USAGE_DYNAMIC,
};

/// A dynamic constant buffer holding one `T`.
pub(crate) struct ConstantBuffer<T: UniformBlock> {
    buffer: ID3D11Buffer,
    _block: PhantomData<T>,
}

impl<T: UniformBlock> ConstantBuffer<T> {
    pub fn new(device: &ID3D11Device) -> Result<Self> {
        let mut buffer = None;
        unsafe {
            device.CreateBuffer(
                &D3D11_BUFFER_DESC {
                    ByteWidth: T::SIZE,
                    Usage: D3D11_USAGE_DYNAMIC,
                    BindFlags: D3D11_BIND_CONSTANT_BUFFER.0 as u32,
                    CPUAccessFlags: D3D11_CPU_ACCESS_WRITE.0 as u32,
                    MiscFlags: 0,
                    StructureByteStride: 0,
                },
                None,
                Some(&mut buffer),
            )?;
        }
        assume_d3d11_init!(buffer, "CreateBuffer");
        Ok(ConstantBuffer {
            buffer,
            _block: PhantomData,
        })
    }

    /// Replace the contents of the buffer with `block`.
    pub fn write(&self, context: &ID3D11DeviceContext, block: &T) -> Result<()> {
        let bytes = block.as_bytes();
        unsafe {
            let mut mapped = D3D11_MAPPED_SUBRESOURCE::default();
            context.Map(&self.buffer, 0, D3D11_MAP_WRITE_DISCARD, 0, Some(&mut mapped))?;
            // SAFETY: a mapped constant buffer is at least T::SIZE bytes.
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), mapped.pData.cast::<u8>(), bytes.len());
            context.Unmap(&self.buffer, 0);
        }
        Ok(())
    }

    pub fn buffer(&self) -> &ID3D11Buffer {
        &self.buffer
    }
}
