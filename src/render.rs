use winit::{
    dpi::PhysicalSize,
    window::Window,
};
use thiserror::Error;

/// The connection to the gpu and the surface of the window
pub struct RenderState {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface,
    config: wgpu::SurfaceConfiguration,
}

impl RenderState {
    /// Connects to the gpu and configures the surface of the window
    ///
    /// # Parameters
    ///
    /// window: The window to draw in, must outlive the render state
    ///
    /// # Errors
    ///
    /// See NewRenderStateError for the possible errors
    pub async fn new(window: &Window) -> Result<Self, NewRenderStateError> {
        // Get the size of the window
        let size = window.inner_size();

        if size.width == 0 || size.height == 0 {
            return Err(NewRenderStateError::InvalidSize(size));
        }

        // Get a handle to the API
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            flags: wgpu::InstanceFlags::VALIDATION,
            dx12_shader_compiler: Default::default(),
            gles_minor_version: wgpu::Gles3MinorVersion::Automatic,
        });

        // Get a surface for the window
        let surface = unsafe { instance.create_surface(window) }?;

        // Get an adapter to the GPU
        let adapter = instance.request_adapter(
            &wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            },
        ).await.ok_or(NewRenderStateError::GetAdapter)?;
        log::info!("Rendering with {:?}", adapter.get_info());

        // Create a logical device and a command queue
        let (device, queue) = adapter.request_device(
            &wgpu::DeviceDescriptor {
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::downlevel_defaults(),
                label: None,
            },
            None,
        ).await?;

        // Get the capabilities of the surface
        let surface_caps = surface.get_capabilities(&adapter);

        // Get an sRGB texture format for the surface
        let surface_format = surface_caps.formats.iter()
            .copied()
            .find(|f| f.is_srgb())
            .ok_or(NewRenderStateError::IncompatibleSurface)?;

        // Setup the configurations and configure the surface
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Reconfigures the surface after the window has been resized
    ///
    /// # Parameters
    ///
    /// new_size: The new inner size of the window, must not be 0 along any axis
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Retrieves the size of the surface
    pub fn get_size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn get_device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn get_queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn get_surface(&self) -> &wgpu::Surface {
        &self.surface
    }

    pub fn get_config(&self) -> &wgpu::SurfaceConfiguration {
        &self.config
    }
}

#[derive(Error, Debug, Clone)]
pub enum NewRenderStateError {
    #[error("The width and height of the window must be larger than 0 but received {:?}", .0)]
    InvalidSize(PhysicalSize<u32>),
    #[error("Unable to create surface: {:?}", .0)]
    CreateSurface(wgpu::CreateSurfaceError),
    #[error("Unable to get adapter for gpu")]
    GetAdapter,
    #[error("Unable to retrieve logical device: {:?}", .0)]
    RequestDevice(wgpu::RequestDeviceError),
    #[error("No compatible surface found")]
    IncompatibleSurface,
}

impl From<wgpu::CreateSurfaceError> for NewRenderStateError {
    fn from(value: wgpu::CreateSurfaceError) -> Self {
        Self::CreateSurface(value)
    }
}

impl From<wgpu::RequestDeviceError> for NewRenderStateError {
    fn from(value: wgpu::RequestDeviceError) -> Self {
        Self::RequestDevice(value)
    }
}
