//! Cursor and click injection for X11-based systems.
//!
//! This module provides functionality to move the mouse cursor and inject
//! clicks using X11 protocols (`warp_pointer` for motion, the XTEST
//! extension for button events).

use crate::{
    error::{AppError, Result},
    mapping::ScreenPoint,
};
use log::{debug, info};
use x11rb::{
    connection::Connection,
    protocol::xproto::{ConnectionExt, Screen, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT},
    protocol::xtest::ConnectionExt as XTestConnectionExt,
    rust_connection::RustConnection,
};

/// XTEST detail value for the left mouse button
const LEFT_BUTTON: u8 = 1;

/// Cursor control implementation for X11
pub struct CursorController {
    connection: RustConnection,
    screen: Screen,
}

impl CursorController {
    /// Create a new cursor controller
    pub fn new() -> Result<Self> {
        info!("Initializing X11 cursor controller");

        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| AppError::CursorControl(format!("Failed to connect to X11: {e}")))?;

        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| AppError::CursorControl("Failed to get screen".to_string()))?
            .clone();

        info!(
            "Connected to X11 display, screen: {}x{}",
            screen.width_in_pixels, screen.height_in_pixels
        );

        Ok(Self { connection, screen })
    }

    /// Current screen dimensions, queried fresh from the root window.
    ///
    /// The reported size is authoritative and may change between calls, so
    /// it is never cached.
    pub fn screen_size(&self) -> Result<(u16, u16)> {
        let geometry = self
            .connection
            .get_geometry(self.screen.root)
            .map_err(|e| AppError::CursorControl(format!("Failed to send geometry request: {e}")))?
            .reply()
            .map_err(|e| AppError::CursorControl(format!("Failed to query screen geometry: {e}")))?;

        Ok((geometry.width, geometry.height))
    }

    /// Get current cursor position
    pub fn position(&self) -> Result<(i16, i16)> {
        let reply = self
            .connection
            .query_pointer(self.screen.root)
            .map_err(|e| AppError::CursorControl(format!("Failed to send query pointer: {e}")))?
            .reply()
            .map_err(|e| AppError::CursorControl(format!("Failed to query pointer: {e}")))?;

        Ok((reply.root_x, reply.root_y))
    }

    /// Move the cursor to an absolute position, clamped to screen bounds
    pub fn move_to(&self, point: ScreenPoint) -> Result<()> {
        let (width, height) = self.screen_size()?;

        let max_x = i32::from(width.saturating_sub(1));
        let max_y = i32::from(height.saturating_sub(1));
        let x = i16::try_from(point.x.clamp(0, max_x)).unwrap_or(i16::MAX);
        let y = i16::try_from(point.y.clamp(0, max_y)).unwrap_or(i16::MAX);

        debug!("Setting cursor position to ({x}, {y})");

        self.connection
            .warp_pointer(x11rb::NONE, self.screen.root, 0, 0, 0, 0, x, y)
            .map_err(|e| AppError::CursorControl(format!("Failed to warp pointer: {e}")))?;

        self.connection
            .flush()
            .map_err(|e| AppError::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    /// Inject a single left-button click at the current cursor position.
    ///
    /// No coordinate is supplied: the click lands wherever the cursor
    /// already sits, which tolerates camera jitter at the click gesture.
    pub fn click(&self) -> Result<()> {
        debug!("Injecting left click");

        self.connection
            .xtest_fake_input(BUTTON_PRESS_EVENT, LEFT_BUTTON, x11rb::CURRENT_TIME, x11rb::NONE, 0, 0, 0)
            .map_err(|e| AppError::CursorControl(format!("Failed to inject button press: {e}")))?;
        self.connection
            .xtest_fake_input(
                BUTTON_RELEASE_EVENT,
                LEFT_BUTTON,
                x11rb::CURRENT_TIME,
                x11rb::NONE,
                0,
                0,
                0,
            )
            .map_err(|e| AppError::CursorControl(format!("Failed to inject button release: {e}")))?;

        self.connection
            .flush()
            .map_err(|e| AppError::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }
}
