//! Main application module: the per-frame control loop.

use crate::{
    config::Config,
    cursor_control::CursorController,
    error::Result,
    gesture::{Action, GestureDispatcher},
    hand_detection::{HandDetection, HandDetector},
    mapping::ScreenMapper,
    narration::Narrator,
    smoothing::CursorSmoother,
    utils::safe_cast::f32_to_i32_clamp,
};
use log::{info, warn};
use opencv::{
    core::{Mat, Point, Scalar},
    highgui::{self, WINDOW_NORMAL},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE},
};
use std::time::{Duration, Instant};

const WINDOW_NAME: &str = "Hand Gesture Control";

/// Video source type
#[derive(Debug, Clone)]
pub enum VideoSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(String),
}

/// GUI display mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiMode {
    /// Show the camera window with the debug overlay
    Camera,
    /// No GUI (headless)
    None,
}

/// Application configuration assembled from CLI arguments and the optional
/// config file
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Camera index or video file path
    pub video_source: VideoSource,
    /// GUI display mode
    pub gui_mode: GuiMode,
    /// Enable cursor and click injection
    pub cursor_enabled: bool,
    /// Enable spoken narration
    pub narration_enabled: bool,
    /// Core configuration
    pub config: Config,
}

/// Main application struct
pub struct HandGestureApp {
    config: AppConfig,
    detector: HandDetector,
    dispatcher: GestureDispatcher,
    video_capture: VideoCapture,
}

impl HandGestureApp {
    /// Create a new hand gesture control application
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing hand gesture control application");

        let mut video_capture = match &config.video_source {
            VideoSource::Camera(index) => {
                info!("Opening camera {index}");
                let mut cap = VideoCapture::new(*index, videoio::CAP_ANY)?;

                // Reduce buffer size for lower latency (webcam only)
                cap.set(CAP_PROP_BUFFERSIZE, 1.0)?;

                cap
            }
            VideoSource::File(path) => {
                info!("Opening video file: {path}");
                VideoCapture::from_file(path, videoio::CAP_ANY)?
            }
        };
        if !video_capture.is_opened()? {
            warn!("Video source reported not opened; the first read will fail");
        }

        let detector = HandDetector::new(
            &config.config.detector.model,
            config.config.detector.min_detection_confidence,
            config.config.detector.min_tracking_confidence,
        )?;

        // Cursor control degrades to a dry run when X11 is unavailable
        let controller = if config.cursor_enabled {
            match CursorController::new() {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!("Failed to initialize cursor control: {e}");
                    None
                }
            }
        } else {
            None
        };

        // Narration degrades silently when Tesseract or TTS are missing
        let narrator = if config.narration_enabled {
            match Narrator::with_defaults(
                &config.config.narration.ocr_language,
                config.config.narration.capture_size,
            ) {
                Ok(n) => {
                    info!("Narration enabled");
                    Some(n)
                }
                Err(e) => {
                    warn!("Failed to initialize narration, continuing without it: {e}");
                    None
                }
            }
        } else {
            None
        };

        let dispatcher = GestureDispatcher::new(
            ScreenMapper::new(config.config.cursor.sensitivity),
            CursorSmoother::new(config.config.smoothing.alpha),
            controller,
            narrator,
        );

        if config.gui_mode != GuiMode::None {
            highgui::named_window(WINDOW_NAME, WINDOW_NORMAL)?;
        }

        Ok(Self {
            config,
            detector,
            dispatcher,
            video_capture,
        })
    }

    /// Run the main control loop
    pub fn run(&mut self) -> Result<()> {
        info!("Starting main control loop");

        let mut frame_count = 0u32;
        let start_time = Instant::now();
        let mut last_fps_update = Instant::now();
        let mut fps = 0.0;

        loop {
            let mut frame = Mat::default();
            if !self.video_capture.read(&mut frame)? || frame.empty() {
                // Frame source exhausted or inaccessible: the only fatal case
                info!("Frame acquisition ended, shutting down");
                break;
            }

            // Mirror so rightward hand motion maps to rightward cursor motion
            let mut mirrored = Mat::default();
            opencv::core::flip(&frame, &mut mirrored, 1)?;

            let (detection, action) = match self.detector.detect(&mirrored) {
                Ok(Some(detection)) => {
                    let action = self.dispatcher.dispatch(&detection.landmarks);
                    (Some(detection), action)
                }
                Ok(None) => (None, self.dispatcher.dispatch_no_hand()),
                Err(e) => {
                    warn!("Hand detection failed, skipping frame: {e}");
                    (None, self.dispatcher.dispatch_no_hand())
                }
            };

            frame_count += 1;
            if last_fps_update.elapsed() >= Duration::from_secs(1) {
                fps = f64::from(frame_count) / start_time.elapsed().as_secs_f64();
                last_fps_update = Instant::now();
            }

            if self.config.gui_mode != GuiMode::None {
                Self::draw_overlay(&mut mirrored, detection.as_ref(), action, fps)?;
                highgui::imshow(WINDOW_NAME, &mirrored)?;

                let key = highgui::wait_key(1)?;
                if key == 27 || key == i32::from(b'q') {
                    info!("Exit requested by user");
                    break;
                }
            }
        }

        info!("Releasing video and display resources");
        self.video_capture.release()?;
        if self.config.gui_mode != GuiMode::None {
            highgui::destroy_all_windows()?;
        }

        Ok(())
    }

    /// Draw the debug overlay: landmark dots, current action and FPS
    #[allow(clippy::cast_precision_loss)] // Frame dimensions fit f32
    fn draw_overlay(frame: &mut Mat, detection: Option<&HandDetection>, action: Action, fps: f64) -> Result<()> {
        let cols = frame.cols();
        let rows = frame.rows();

        if let Some(detection) = detection {
            for landmark in &detection.landmarks {
                let x = f32_to_i32_clamp(landmark.x * cols as f32, 0, cols.saturating_sub(1));
                let y = f32_to_i32_clamp(landmark.y * rows as f32, 0, rows.saturating_sub(1));
                imgproc::circle(
                    frame,
                    Point::new(x, y),
                    3,
                    Scalar::new(0.0, 255.0, 0.0, 0.0),
                    -1,
                    LINE_8,
                    0,
                )?;
            }

            let status = format!("{} ({:.2})", action.label(), detection.score);
            imgproc::put_text(
                frame,
                &status,
                Point::new(10, 60),
                FONT_HERSHEY_SIMPLEX,
                0.8,
                Scalar::new(0.0, 255.0, 255.0, 0.0),
                2,
                LINE_8,
                false,
            )?;
        }

        let fps_text = format!("FPS: {fps:.1}");
        imgproc::put_text(
            frame,
            &fps_text,
            Point::new(10, 30),
            FONT_HERSHEY_SIMPLEX,
            0.8,
            Scalar::new(0.0, 255.0, 0.0, 0.0),
            2,
            LINE_8,
            false,
        )?;

        Ok(())
    }
}
