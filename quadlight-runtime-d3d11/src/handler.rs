//! Device, swap chain and output views for a window.
use crate::error::{assume_d3d11_init, Result};
use crate::pipeline::PipelineHandler;
use quadlight_common::{ImageFormat, Size};
use quadlight_runtime::options::DemoOptions;
use quadlight_runtime::scene::Scene;
use windows::core::Interface;
use windows::Win32::Foundation::{BOOL, HMODULE, HWND};
use windows::Win32::Graphics::Direct3D::{
    D3D_DRIVER_TYPE_HARDWARE, D3D_FEATURE_LEVEL, D3D_FEATURE_LEVEL_11_0,
};
use windows::Win32::Graphics::Direct3D11::{
    D3D11CreateDeviceAndSwapChain, ID3D11DepthStencilState, ID3D11DepthStencilView,
    ID3D11Device, ID3D11DeviceContext, ID3D11RasterizerState, ID3D11RenderTargetView,
    ID3D11Texture2D, D3D11_BIND_DEPTH_STENCIL, D3D11_CLEAR_DEPTH, D3D11_CLEAR_STENCIL,
    D3D11_COMPARISON_ALWAYS, D3D11_COMPARISON_LESS, D3D11_CREATE_DEVICE_DEBUG,
    D3D11_CREATE_DEVICE_FLAG, D3D11_CULL_NONE, D3D11_DEPTH_STENCILOP_DESC,
    D3D11_DEPTH_STENCIL_DESC, D3D11_DEPTH_STENCIL_VIEW_DESC, D3D11_DEPTH_STENCIL_VIEW_DESC_0,
    D3D11_DEPTH_WRITE_MASK_ALL, D3D11_DSV_DIMENSION_TEXTURE2D, D3D11_DSV_DIMENSION_TEXTURE2DMS,
    D3D11_FILL_SOLID, D3D11_RASTERIZER_DESC, D3D11_SDK_VERSION, D3D11_STENCIL_OP_DECR,
    D3D11_STENCIL_OP_INCR, D3D11_STENCIL_OP_KEEP, D3D11_TEX2D_DSV, D3D11_TEXTURE2D_DESC,
    D3D11_USAGE_DEFAULT, D3D11_VIEWPORT,
};
use windows::Win32::Graphics::Dxgi::Common::{
    DXGI_MODE_DESC, DXGI_RATIONAL, DXGI_SAMPLE_DESC,
};
use windows::Win32::Graphics::Dxgi::{
    IDXGIDevice, IDXGISwapChain, DXGI_PRESENT, DXGI_SWAP_CHAIN_DESC, DXGI_SWAP_EFFECT_DISCARD,
    DXGI_USAGE_RENDER_TARGET_OUTPUT,
};

const BACK_BUFFER_FORMAT: ImageFormat = ImageFormat::R8G8B8A8Unorm;
const DEPTH_FORMAT: ImageFormat = ImageFormat::D24UnormS8Uint;

struct DepthStencil {
    state: ID3D11DepthStencilState,
    rasterizer: ID3D11RasterizerState,
    view: ID3D11DepthStencilView,
    texture: ID3D11Texture2D,
}

/// Owns every Direct3D object of the demo.
///
/// Fields drop in declaration order, so the pipeline goes first and the
/// device last.
pub struct D3DHandler {
    pipeline: PipelineHandler,
    depth_stencil: DepthStencil,
    render_target_view: ID3D11RenderTargetView,
    swapchain: IDXGISwapChain,
    context: ID3D11DeviceContext,
    device: ID3D11Device,
    viewport: D3D11_VIEWPORT,
    clear_color: [f32; 4],
    draw_calls: u64,
}

fn step<T>(name: &str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => log::debug!("{name} succeeded"),
        Err(_) => log::error!("{name} failed"),
    }
    result
}

impl D3DHandler {
    /// Create the device and everything needed to draw into `hwnd`.
    pub fn setup_direct3d(hwnd: HWND, options: &DemoOptions) -> Result<D3DHandler> {
        options.validate()?;

        let (device, context, swapchain) =
            step("create_interfaces", Self::create_interfaces(hwnd, options))?;
        let render_target_view = step("create_rtv", Self::create_rtv(&device, &swapchain))?;
        let depth_stencil = step(
            "create_depth_stencil",
            Self::create_depth_stencil(&device, &context, options),
        )?;
        let viewport = Self::set_viewport(&context, options.size);
        log::debug!("set_viewport succeeded");
        let pipeline = step(
            "setup_pipeline",
            PipelineHandler::setup_pipeline(&device, options),
        )?;

        Ok(D3DHandler {
            pipeline,
            depth_stencil,
            render_target_view,
            swapchain,
            context,
            device,
            viewport,
            clear_color: options.clear_color,
            draw_calls: 0,
        })
    }

    fn create_interfaces(
        hwnd: HWND,
        options: &DemoOptions,
    ) -> Result<(ID3D11Device, ID3D11DeviceContext, IDXGISwapChain)> {
        let desc = DXGI_SWAP_CHAIN_DESC {
            BufferDesc: DXGI_MODE_DESC {
                Width: options.size.width,
                Height: options.size.height,
                RefreshRate: DXGI_RATIONAL {
                    Numerator: 0,
                    Denominator: 1,
                },
                Format: BACK_BUFFER_FORMAT.into(),
                ..Default::default()
            },
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: options.sample_count,
                Quality: 0,
            },
            BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
            BufferCount: 1,
            OutputWindow: hwnd,
            Windowed: BOOL::from(true),
            SwapEffect: DXGI_SWAP_EFFECT_DISCARD,
            Flags: 0,
        };

        let flags = if options.debug_layer {
            D3D11_CREATE_DEVICE_DEBUG
        } else {
            D3D11_CREATE_DEVICE_FLAG(0)
        };

        let mut swapchain = None;
        let mut device = None;
        let mut context = None;
        let mut feature_level = D3D_FEATURE_LEVEL::default();
        unsafe {
            D3D11CreateDeviceAndSwapChain(
                None,
                D3D_DRIVER_TYPE_HARDWARE,
                HMODULE::default(),
                flags,
                Some(&[D3D_FEATURE_LEVEL_11_0]),
                D3D11_SDK_VERSION,
                Some(&desc),
                Some(&mut swapchain),
                Some(&mut device),
                Some(&mut feature_level),
                Some(&mut context),
            )?;
        }
        assume_d3d11_init!(swapchain, "D3D11CreateDeviceAndSwapChain");
        assume_d3d11_init!(device, "D3D11CreateDeviceAndSwapChain");
        assume_d3d11_init!(context, "D3D11CreateDeviceAndSwapChain");

        let adapter = unsafe { device.cast::<IDXGIDevice>()?.GetAdapter()?.GetDesc()? };
        let name_len = adapter
            .Description
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(adapter.Description.len());
        log::info!(
            "using {} (feature level {:#x}, {}x MSAA, debug layer {})",
            String::from_utf16_lossy(&adapter.Description[..name_len]),
            feature_level.0,
            options.sample_count,
            if options.debug_layer { "on" } else { "off" },
        );

        Ok((device, context, swapchain))
    }

    fn create_rtv(
        device: &ID3D11Device,
        swapchain: &IDXGISwapChain,
    ) -> Result<ID3D11RenderTargetView> {
        let mut rtv = None;
        unsafe {
            let backbuffer: ID3D11Texture2D = swapchain.GetBuffer(0)?;
            device.CreateRenderTargetView(&backbuffer, None, Some(&mut rtv))?;
        }
        assume_d3d11_init!(rtv, "CreateRenderTargetView");
        Ok(rtv)
    }

    fn create_depth_stencil(
        device: &ID3D11Device,
        context: &ID3D11DeviceContext,
        options: &DemoOptions,
    ) -> Result<DepthStencil> {
        let multisampled = options.sample_count > 1;

        let mut texture = None;
        let mut view = None;
        let mut state = None;
        let mut rasterizer = None;
        unsafe {
            device.CreateTexture2D(
                &D3D11_TEXTURE2D_DESC {
                    Width: options.size.width,
                    Height: options.size.height,
                    MipLevels: 1,
                    ArraySize: 1,
                    Format: DEPTH_FORMAT.into(),
                    SampleDesc: DXGI_SAMPLE_DESC {
                        Count: options.sample_count,
                        Quality: 0,
                    },
                    Usage: D3D11_USAGE_DEFAULT,
                    BindFlags: D3D11_BIND_DEPTH_STENCIL.0 as u32,
                    CPUAccessFlags: 0,
                    MiscFlags: 0,
                },
                None,
                Some(&mut texture),
            )?;
            assume_d3d11_init!(texture, "CreateTexture2D");

            device.CreateDepthStencilView(
                &texture,
                Some(&D3D11_DEPTH_STENCIL_VIEW_DESC {
                    Format: DEPTH_FORMAT.into(),
                    ViewDimension: if multisampled {
                        D3D11_DSV_DIMENSION_TEXTURE2DMS
                    } else {
                        D3D11_DSV_DIMENSION_TEXTURE2D
                    },
                    Flags: 0,
                    Anonymous: D3D11_DEPTH_STENCIL_VIEW_DESC_0 {
                        Texture2D: D3D11_TEX2D_DSV { MipSlice: 0 },
                    },
                }),
                Some(&mut view),
            )?;
            assume_d3d11_init!(view, "CreateDepthStencilView");

            device.CreateDepthStencilState(
                &D3D11_DEPTH_STENCIL_DESC {
                    DepthEnable: BOOL::from(true),
                    DepthWriteMask: D3D11_DEPTH_WRITE_MASK_ALL,
                    DepthFunc: D3D11_COMPARISON_LESS,
                    StencilEnable: BOOL::from(true),
                    StencilReadMask: 0xff,
                    StencilWriteMask: 0xff,
                    FrontFace: D3D11_DEPTH_STENCILOP_DESC {
                        StencilFailOp: D3D11_STENCIL_OP_KEEP,
                        StencilDepthFailOp: D3D11_STENCIL_OP_INCR,
                        StencilPassOp: D3D11_STENCIL_OP_KEEP,
                        StencilFunc: D3D11_COMPARISON_ALWAYS,
                    },
                    BackFace: D3D11_DEPTH_STENCILOP_DESC {
                        StencilFailOp: D3D11_STENCIL_OP_KEEP,
                        StencilDepthFailOp: D3D11_STENCIL_OP_DECR,
                        StencilPassOp: D3D11_STENCIL_OP_KEEP,
                        StencilFunc: D3D11_COMPARISON_ALWAYS,
                    },
                },
                Some(&mut state),
            )?;
            assume_d3d11_init!(state, "CreateDepthStencilState");

            // the quad is visible from both sides
            device.CreateRasterizerState(
                &D3D11_RASTERIZER_DESC {
                    FillMode: D3D11_FILL_SOLID,
                    CullMode: D3D11_CULL_NONE,
                    FrontCounterClockwise: BOOL::from(false),
                    DepthBias: 0,
                    DepthBiasClamp: 0.0,
                    SlopeScaledDepthBias: 0.0,
                    DepthClipEnable: BOOL::from(true),
                    ScissorEnable: BOOL::from(false),
                    MultisampleEnable: BOOL::from(multisampled),
                    AntialiasedLineEnable: BOOL::from(false),
                },
                Some(&mut rasterizer),
            )?;
            assume_d3d11_init!(rasterizer, "CreateRasterizerState");

            context.OMSetDepthStencilState(&state, 0);
            context.RSSetState(&rasterizer);
        }

        Ok(DepthStencil {
            state,
            rasterizer,
            view,
            texture,
        })
    }

    fn set_viewport(context: &ID3D11DeviceContext, size: Size<u32>) -> D3D11_VIEWPORT {
        let viewport = D3D11_VIEWPORT {
            TopLeftX: 0.0,
            TopLeftY: 0.0,
            Width: size.width as f32,
            Height: size.height as f32,
            MinDepth: 0.0,
            MaxDepth: 1.0,
        };
        unsafe { context.RSSetViewports(Some(&[viewport])) };
        viewport
    }

    /// Draw one frame of `scene` into the back buffer.
    pub fn render(&mut self, scene: &Scene) -> Result<()> {
        let context = &self.context;
        unsafe {
            context.ClearRenderTargetView(&self.render_target_view, &self.clear_color);
            context.ClearDepthStencilView(
                &self.depth_stencil.view,
                (D3D11_CLEAR_DEPTH.0 | D3D11_CLEAR_STENCIL.0) as u32,
                1.0,
                0,
            );
            context.OMSetRenderTargets(
                Some(&[Some(self.render_target_view.clone())]),
                &self.depth_stencil.view,
            );
            context.OMSetDepthStencilState(&self.depth_stencil.state, 0);
            context.RSSetState(&self.depth_stencil.rasterizer);
            context.RSSetViewports(Some(&[self.viewport]));
        }

        self.pipeline
            .update(context, &scene.matrices(), &scene.light())?;
        self.pipeline.bind(context);
        self.pipeline.draw(context);
        self.draw_calls += 1;
        Ok(())
    }

    pub fn present_back_buffer(&self, vsync: bool) -> Result<()> {
        unsafe {
            self.swapchain
                .Present(u32::from(vsync), DXGI_PRESENT(0))
                .ok()?;
        }
        Ok(())
    }

    /// Tear down every Direct3D object, pipeline first and device last.
    pub fn release(self) {
        log::debug!("releasing direct3d objects after {} draws", self.draw_calls);
        drop(self)
    }

    pub fn device(&self) -> &ID3D11Device {
        &self.device
    }

    pub fn context(&self) -> &ID3D11DeviceContext {
        &self.context
    }

    pub fn swapchain(&self) -> &IDXGISwapChain {
        &self.swapchain
    }

    pub fn render_target_view(&self) -> &ID3D11RenderTargetView {
        &self.render_target_view
    }

    pub fn depth_stencil_texture(&self) -> &ID3D11Texture2D {
        &self.depth_stencil.texture
    }

    pub fn depth_stencil_view(&self) -> &ID3D11DepthStencilView {
        &self.depth_stencil.view
    }

    pub fn viewport(&self) -> &D3D11_VIEWPORT {
        &self.viewport
    }

    /// Number of draw calls issued since setup.
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl Drop for D3DHandler {
    fn drop(&mut self) {
        unsafe {
            self.context.ClearState();
            self.context.Flush();
        }
    }
}
