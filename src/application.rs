use winit::{
    window::{Window, WindowBuilder},
    event_loop::{EventLoop, ControlFlow},
    dpi::PhysicalSize,
    error::OsError,
    event::{Event, WindowEvent, KeyboardInput, ElementState, VirtualKeyCode},
};
use thiserror::Error;
use super::{
    BACKGROUND_COLOR,
    mesh::Mesh,
    render::{RenderState, NewRenderStateError},
    gpu_canvas::{GPUCanvas, NewGPUCanvasError, RenderError},
};

/// Opens a square window showing the drawn hexagons and blocks until the user dismisses it
/// by closing the window, clicking inside it or pressing escape. On success the process exits
/// together with the event loop.
///
/// # Parameters
///
/// mesh: The drawn hexagons
///
/// title: The title of the window
///
/// canvas_size: The width and height of the window in pixels
///
/// # Errors
///
/// See NewStateError for the possible errors
pub async fn run(mesh: Mesh, title: &str, canvas_size: u32) -> Result<(), NewStateError> {
    // Create the event loop
    let event_loop = EventLoop::new();

    // Create the window
    let size = PhysicalSize::new(canvas_size, canvas_size);
    let window = WindowBuilder::new()
        .with_inner_size(size)
        .with_title(title)
        .build(&event_loop)?;

    // Create the state
    let mut state = State::new(window, &mesh).await?;
    log::info!("Showing {} vertices, waiting for the window to be dismissed", mesh.len());

    // Run the event loop
    event_loop.run(move |event, _, control_flow| state.handle_event(&event, control_flow))
}

/// Holds the state of the application
struct State {
    /// The render state
    render_state: RenderState,
    /// The uploaded hexagons
    canvas: GPUCanvas,
    /// The inner size of the window
    size: PhysicalSize<u32>,
    /// The main window, dropped after the surface that draws in it
    window: Window,
}

impl State {
    /// Create a new state
    ///
    /// # Parameters
    ///
    /// window: The window to use for the application
    ///
    /// mesh: The hexagons to show
    ///
    /// # Errors
    ///
    /// See NewStateError for the possible errors
    async fn new(window: Window, mesh: &Mesh) -> Result<Self, NewStateError> {
        // Get the size of the window
        let size = window.inner_size();

        if size.width == 0 || size.height == 0 {
            return Err(NewStateError::InvalidSize(size));
        }

        // Initialize the render state
        let render_state = RenderState::new(&window).await?;

        // Upload the hexagons in one go
        let canvas = GPUCanvas::new(mesh, &BACKGROUND_COLOR, &render_state)?;

        Ok(Self {
            render_state,
            canvas,
            size,
            window,
        })
    }

    /// Handles all events from winit
    ///
    /// # Parameters
    ///
    /// event: The event to handle
    ///
    /// control_flow: The location to set the control flow
    fn handle_event(&mut self, event: &Event<'_, ()>, control_flow: &mut ControlFlow) {
        control_flow.set_wait();

        match event {
            // Run the window event handler
            Event::WindowEvent { window_id, event } => if *window_id == self.window.id() {
                self.handle_window_event(event, control_flow);
            }

            // Render the screen
            Event::RedrawRequested(window_id) => if *window_id == self.window.id() {
                match self.canvas.render(&self.render_state) {
                    Ok(_) => {}

                    // Reconfigure the surface if lost
                    Err(RenderError::SurfaceTexture(wgpu::SurfaceError::Lost)) => self.resize(self.size),

                    // The system is out of memory, we should probably quit
                    Err(RenderError::SurfaceTexture(wgpu::SurfaceError::OutOfMemory)) => {
                        log::error!("System is out of memory");
                        control_flow.set_exit_with_code(1);
                    }

                    // All other errors (Outdated, Timeout) should be resolved by the next frame
                    Err(e) => log::warn!("Error while rendering: {:?}", e),
                }
            }

            _ => ()
        }
    }

    /// Handle a window event
    ///
    /// # Parameters
    ///
    /// event: The event to handle
    ///
    /// control_flow: The location to set the control flow
    fn handle_window_event(&mut self, event: &WindowEvent<'_>, control_flow: &mut ControlFlow) {
        match event {
            // Close the window
            WindowEvent::CloseRequested => control_flow.set_exit(),

            // A click anywhere dismisses the canvas
            WindowEvent::MouseInput { state: ElementState::Pressed, .. } => {
                log::debug!("Canvas dismissed by click");
                control_flow.set_exit();
            }

            // The size of the window has changed
            WindowEvent::Resized(physical_size) => {
                self.resize(*physical_size);
            }

            // The window has been dragged into an area with a different scale factor
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                self.resize(**new_inner_size);
            }

            WindowEvent::KeyboardInput { input, .. } => {
                self.handle_keyboard_input(input, control_flow);
            }

            _ => (),
        }
    }

    /// Handle a keyboard input, escape dismisses the canvas
    ///
    /// # Parameters
    ///
    /// input: The input to handle
    ///
    /// control_flow: The location to set the control flow
    fn handle_keyboard_input(&mut self, input: &KeyboardInput, control_flow: &mut ControlFlow) {
        if input.state == ElementState::Pressed && input.virtual_keycode == Some(VirtualKeyCode::Escape) {
            control_flow.set_exit();
        }
    }

    /// Reconfigure if the window has been resized
    ///
    /// # Parameters
    ///
    /// new_size: The new size to set
    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        // Reconfigure the surface
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.render_state.resize(new_size);
            self.canvas.set_viewport(new_size, &self.render_state);
            self.window.request_redraw();
        }
    }
}

/// The error types for when creating a new state
#[derive(Error, Debug)]
pub enum NewStateError {
    /// The window could not be opened
    #[error("Unable to open window: {:?}", .0)]
    OpenWindow(OsError),
    /// The width or height of the window is too small
    #[error("The width and height of the window must be larger than 0 but received {:?}", .0)]
    InvalidSize(PhysicalSize<u32>),
    /// The render state could not be created
    #[error("Unable to initialize the render state: {:?}", .0)]
    RenderInitError(NewRenderStateError),
    /// The hexagons could not be uploaded
    #[error("Unable to upload the hexagons: {:?}", .0)]
    Upload(NewGPUCanvasError),
}

impl From<OsError> for NewStateError {
    fn from(value: OsError) -> Self {
        Self::OpenWindow(value)
    }
}

impl From<NewRenderStateError> for NewStateError {
    fn from(value: NewRenderStateError) -> Self {
        Self::RenderInitError(value)
    }
}

impl From<NewGPUCanvasError> for NewStateError {
    fn from(value: NewGPUCanvasError) -> Self {
        Self::Upload(value)
    }
}
