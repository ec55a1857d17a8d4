//! Hand gesture cursor control with spoken context narration.

use anyhow::Result;
use clap::Parser;
use hand_gesture_control::app::{AppConfig, GuiMode, HandGestureApp, VideoSource};
use hand_gesture_control::config::Config;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value = "0")]
    cam: i32,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    video: Option<String>,

    /// Cursor sensitivity multiplier
    #[arg(short, long)]
    sensitivity: Option<f64>,

    /// Minimum hand detection confidence
    #[arg(long)]
    detection_confidence: Option<f32>,

    /// Minimum hand tracking confidence
    #[arg(long)]
    tracking_confidence: Option<f32>,

    /// Disable cursor and click injection (dry run)
    #[arg(long)]
    no_cursor: bool,

    /// Disable spoken narration
    #[arg(long)]
    no_narration: bool,

    /// GUI display mode (cam, none)
    #[arg(short, long, default_value = "cam")]
    gui: String,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Control");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Command line arguments override the config file
    if let Some(sensitivity) = args.sensitivity {
        config.cursor.sensitivity = sensitivity;
    }
    if let Some(confidence) = args.detection_confidence {
        config.detector.min_detection_confidence = confidence;
    }
    if let Some(confidence) = args.tracking_confidence {
        config.detector.min_tracking_confidence = confidence;
    }
    config.validate()?;

    // Build application configuration
    let app_config = AppConfig {
        video_source: if let Some(video_path) = args.video {
            VideoSource::File(video_path)
        } else {
            VideoSource::Camera(args.cam)
        },
        gui_mode: match args.gui.as_str() {
            "none" => GuiMode::None,
            _ => GuiMode::Camera,
        },
        cursor_enabled: !args.no_cursor && config.cursor.enabled,
        narration_enabled: !args.no_narration && config.narration.enabled,
        config,
    };

    // Create and run application
    let mut app = HandGestureApp::new(app_config)?;
    app.run()?;

    Ok(())
}
