use crate::error::{assume_d3d11_init, Result};
use quadlight_runtime::geometry::{Vertex, QUAD_VERTEX_COUNT, QUAD_VERTICES};
use windows::core::s;
use windows::Win32::Graphics::Direct3D::D3D11_PRIMITIVE_TOPOLOGY_TRIANGLELIST;
use windows::Win32::Graphics::Direct3D11::{
    ID3D11Buffer, ID3D11Device, ID3D11DeviceContext, D3D11_BIND_VERTEX_BUFFER, D3D11_BUFFER_DESC,
    D3D11_INPUT_ELEMENT_DESC, D3D11_INPUT_PER_VERTEX_DATA, D3D11_SUBRESOURCE_DATA,
    D3D11_USAGE_IMMUTABLE,
};
use windows::Win32::Graphics::Dxgi::Common::{DXGI_FORMAT_R32G32B32_FLOAT, DXGI_FORMAT_R32G32_FLOAT};

/// The quad's vertex buffer.
pub(crate) struct DrawQuad {
    buffer: ID3D11Buffer,
    offset: u32,
    stride: u32,
}

impl DrawQuad {
    pub fn new(device: &ID3D11Device) -> Result<DrawQuad> {
        let vertices: &[u8] = bytemuck::cast_slice(QUAD_VERTICES);
        let mut buffer = None;
        unsafe {
            device.CreateBuffer(
                &D3D11_BUFFER_DESC {
                    ByteWidth: vertices.len() as u32,
                    Usage: D3D11_USAGE_IMMUTABLE,
                    BindFlags: D3D11_BIND_VERTEX_BUFFER.0 as u32,
                    CPUAccessFlags: 0,
                    MiscFlags: 0,
                    StructureByteStride: 0,
                },
                Some(&D3D11_SUBRESOURCE_DATA {
                    pSysMem: vertices.as_ptr().cast(),
                    SysMemPitch: 0,
                    SysMemSlicePitch: 0,
                }),
                Some(&mut buffer),
            )?;
        }
        assume_d3d11_init!(buffer, "CreateBuffer");

        Ok(DrawQuad {
            buffer,
            offset: 0,
            stride: Vertex::STRIDE,
        })
    }

    pub fn bind_vertices(&self, context: &ID3D11DeviceContext) {
        unsafe {
            context.IASetPrimitiveTopology(D3D11_PRIMITIVE_TOPOLOGY_TRIANGLELIST);
            context.IASetVertexBuffers(
                0,
                1,
                Some(&Some(self.buffer.clone())),
                Some(&self.stride),
                Some(&self.offset),
            );
        }
    }

    /// Issue the single draw call of a frame.
    pub fn draw(&self, context: &ID3D11DeviceContext) {
        unsafe { context.Draw(QUAD_VERTEX_COUNT, 0) }
    }

    pub fn input_layout_desc() -> [D3D11_INPUT_ELEMENT_DESC; 2] {
        [
            D3D11_INPUT_ELEMENT_DESC {
                SemanticName: s!("POSITION"),
                SemanticIndex: 0,
                Format: DXGI_FORMAT_R32G32B32_FLOAT,
                InputSlot: 0,
                AlignedByteOffset: Vertex::POSITION_OFFSET,
                InputSlotClass: D3D11_INPUT_PER_VERTEX_DATA,
                InstanceDataStepRate: 0,
            },
            D3D11_INPUT_ELEMENT_DESC {
                SemanticName: s!("TEXCOORD"),
                SemanticIndex: 0,
                Format: DXGI_FORMAT_R32G32_FLOAT,
                InputSlot: 0,
                AlignedByteOffset: Vertex::TEXCOORD_OFFSET,
                InputSlotClass: D3D11_INPUT_PER_VERTEX_DATA,
                InstanceDataStepRate: 0,
            },
        ]
    }
}
