//! Screen region capture over X11.

use crate::{error::AppError, mapping::ScreenPoint, Result};
use image::RgbaImage;
use x11rb::{
    connection::Connection,
    protocol::xproto::{ConnectionExt, ImageFormat, Screen},
    rust_connection::RustConnection,
};

/// Root-window screen capture for the narration worker
pub struct ScreenCapture {
    connection: RustConnection,
    screen: Screen,
}

impl ScreenCapture {
    /// Open a dedicated X11 connection for capturing.
    ///
    /// The narration worker owns this connection; the control loop's cursor
    /// connection is never shared across threads.
    pub fn new() -> Result<Self> {
        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| AppError::Capture(format!("Failed to connect to X11: {e}")))?;

        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| AppError::Capture("Failed to get screen".to_string()))?
            .clone();

        Ok(Self { connection, screen })
    }

    /// Capture a square region centered on the given point, shifted as
    /// needed to stay within the screen bounds.
    pub fn capture_around(&self, center: ScreenPoint, size: u16) -> Result<RgbaImage> {
        let screen_width = i32::from(self.screen.width_in_pixels);
        let screen_height = i32::from(self.screen.height_in_pixels);

        let width = i32::from(size).min(screen_width);
        let height = i32::from(size).min(screen_height);

        let x = (center.x - width / 2).clamp(0, screen_width - width);
        let y = (center.y - height / 2).clamp(0, screen_height - height);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped above
        self.capture_region(x as i16, y as i16, width as u16, height as u16)
    }

    fn capture_region(&self, x: i16, y: i16, width: u16, height: u16) -> Result<RgbaImage> {
        let reply = self
            .connection
            .get_image(
                ImageFormat::Z_PIXMAP,
                self.screen.root,
                x,
                y,
                width,
                height,
                u32::MAX,
            )
            .map_err(|e| AppError::Capture(format!("Failed to send get_image: {e}")))?
            .reply()
            .map_err(|e| AppError::Capture(format!("Failed to capture screen region: {e}")))?;

        // Root window pixels arrive as 32-bit BGRX
        let expected = usize::from(width) * usize::from(height) * 4;
        if reply.data.len() < expected {
            return Err(AppError::Capture(format!(
                "Short image reply: {} bytes, expected {expected}",
                reply.data.len()
            )));
        }

        let mut region = RgbaImage::new(u32::from(width), u32::from(height));
        for (i, pixel) in region.pixels_mut().enumerate() {
            let offset = i * 4;
            let b = reply.data[offset];
            let g = reply.data[offset + 1];
            let r = reply.data[offset + 2];
            *pixel = image::Rgba([r, g, b, 255]);
        }

        Ok(region)
    }
}
