use crate::error::Result;
use crate::quad_render::DrawQuad;
use crate::samplers::create_sampler;
use crate::texture::OwnedTexture;
use crate::uniforms::ConstantBuffer;
use crate::util::{d3d11_create_input_layout, d3d11_create_shader, d3d_compile_shader};
use quadlight_common::ImageFormat;
use quadlight_preprocess::{ShaderSource, ShaderStage};
use quadlight_runtime::options::DemoOptions;
use quadlight_runtime::uniforms::{Light, Matrices};
use windows::Win32::Graphics::Direct3D11::{
    ID3D11Device, ID3D11DeviceContext, ID3D11GeometryShader, ID3D11InputLayout,
    ID3D11PixelShader, ID3D11SamplerState, ID3D11VertexShader,
};

/// Every object needed to draw the quad.
///
/// Fields drop in declaration order.
pub(crate) struct PipelineHandler {
    quad: DrawQuad,
    input_layout: ID3D11InputLayout,
    vertex_shader: ID3D11VertexShader,
    geometry_shader: ID3D11GeometryShader,
    pixel_shader: ID3D11PixelShader,
    texture: OwnedTexture,
    sampler: ID3D11SamplerState,
    matrices: ConstantBuffer<Matrices>,
    light: ConstantBuffer<Light>,
}

impl PipelineHandler {
    pub fn setup_pipeline(device: &ID3D11Device, options: &DemoOptions) -> Result<Self> {
        let sources = match &options.shader_dir {
            Some(dir) => ShaderSource::load(dir)?,
            None => ShaderSource::builtin()?,
        };

        let vs_blob = d3d_compile_shader(sources.stage(ShaderStage::Vertex), ShaderStage::Vertex)?;
        let gs_blob =
            d3d_compile_shader(sources.stage(ShaderStage::Geometry), ShaderStage::Geometry)?;
        let ps_blob =
            d3d_compile_shader(sources.stage(ShaderStage::Fragment), ShaderStage::Fragment)?;
        log::debug!("compiled shaders");

        let vertex_shader = d3d11_create_shader(device, &vs_blob)?;
        let geometry_shader = d3d11_create_shader(device, &gs_blob)?;
        let pixel_shader = d3d11_create_shader(device, &ps_blob)?;

        let input_layout =
            d3d11_create_input_layout(device, &DrawQuad::input_layout_desc(), &vs_blob)?;
        let quad = DrawQuad::new(device)?;
        log::debug!("created vertex buffer and input layout");

        let image = options.texture.load()?;
        let texture = OwnedTexture::new(device, &image, ImageFormat::R8G8B8A8Unorm)?;
        let sampler = create_sampler(device, options.filter, options.wrap_mode)?;
        log::debug!(
            "created {}x{} texture",
            texture.size.width,
            texture.size.height
        );

        Ok(PipelineHandler {
            quad,
            input_layout,
            vertex_shader,
            geometry_shader,
            pixel_shader,
            texture,
            sampler,
            matrices: ConstantBuffer::new(device)?,
            light: ConstantBuffer::new(device)?,
        })
    }

    /// Upload this frame's transforms and light.
    pub fn update(
        &self,
        context: &ID3D11DeviceContext,
        matrices: &Matrices,
        light: &Light,
    ) -> Result<()> {
        self.matrices.write(context, matrices)?;
        self.light.write(context, light)?;
        Ok(())
    }

    pub fn bind(&self, context: &ID3D11DeviceContext) {
        unsafe {
            context.IASetInputLayout(&self.input_layout);
            self.quad.bind_vertices(context);

            context.VSSetShader(&self.vertex_shader, None);
            context.GSSetShader(&self.geometry_shader, None);
            context.PSSetShader(&self.pixel_shader, None);

            context.GSSetConstantBuffers(0, Some(&[Some(self.matrices.buffer().clone())]));
            context.PSSetConstantBuffers(0, Some(&[Some(self.light.buffer().clone())]));
            context.PSSetShaderResources(0, Some(&[Some(self.texture.view.clone())]));
            context.PSSetSamplers(0, Some(&[Some(self.sampler.clone())]));
        }
    }

    pub fn draw(&self, context: &ID3D11DeviceContext) {
        self.quad.draw(context);
    }
}
