use crate::constants::{LANDMARK_INPUT_SIZE, LANDMARK_OUTPUT_VALUES, NUM_HAND_LANDMARKS};
use crate::utils::safe_cast::usize_to_i32;
use crate::Result;
use ndarray::{Array1, Array4, CowArray};
use opencv::core::{Mat, Size, CV_32F};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use ort::{Environment, Session, Value};
use std::path::Path;
use std::sync::Arc;

/// A single normalized hand keypoint in [0,1] image space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One detected hand: 21 normalized landmarks plus the model's presence score
#[derive(Debug, Clone)]
pub struct HandDetection {
    pub landmarks: Vec<Landmark>,
    pub score: f32,
}

/// Hand landmark detector using `ONNX` Runtime
pub struct HandDetector {
    session: Session,
    input_size: i32,
    min_detection_confidence: f32,
    min_tracking_confidence: f32,
    tracking: bool,
}

impl HandDetector {
    /// Create a new hand detector from an `ONNX` model file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ONNX model file cannot be loaded
    /// - The model has no inputs or outputs
    /// - The ONNX runtime environment cannot be created
    pub fn new<P: AsRef<Path>>(
        model_path: P,
        min_detection_confidence: f32,
        min_tracking_confidence: f32,
    ) -> Result<Self> {
        log::info!(
            "Initializing HandDetector with model: {}",
            model_path.as_ref().display()
        );
        let environment = Arc::new(
            Environment::builder()
                .with_name("hand_detector")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        if session.inputs.is_empty() {
            return Err(crate::error::Error::ModelInputError("Model has no inputs".to_string()));
        }
        if session.outputs.is_empty() {
            return Err(crate::error::Error::ModelOutputError("Model has no outputs".to_string()));
        }

        Ok(Self {
            session,
            input_size: LANDMARK_INPUT_SIZE,
            min_detection_confidence,
            min_tracking_confidence,
            tracking: false,
        })
    }

    /// Detect hand landmarks in a video frame.
    ///
    /// Returns `None` when no hand clears the active confidence threshold.
    /// While a hand was present on the previous frame the (usually lower)
    /// tracking threshold applies; otherwise the detection threshold does.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Image preprocessing fails
    /// - The ONNX model inference fails
    /// - The output tensor has an unexpected shape
    pub fn detect(&mut self, frame: &Mat) -> Result<Option<HandDetection>> {
        let input = self.preprocess(frame)?;
        let (marks, score) = self.forward(input)?;

        if score < self.active_threshold() {
            self.tracking = false;
            return Ok(None);
        }
        self.tracking = true;

        let landmarks = Self::postprocess(&marks, self.input_size);
        if landmarks.len() != NUM_HAND_LANDMARKS {
            return Err(crate::error::Error::ModelOutputError(format!(
                "Expected {NUM_HAND_LANDMARKS} landmarks, got {}",
                landmarks.len()
            )));
        }

        Ok(Some(HandDetection { landmarks, score }))
    }

    /// The confidence threshold in effect for the next frame
    #[must_use]
    pub const fn active_threshold(&self) -> f32 {
        if self.tracking {
            self.min_tracking_confidence
        } else {
            self.min_detection_confidence
        }
    }

    /// Preprocess a frame for the model
    fn preprocess(&self, frame: &Mat) -> Result<Array4<f32>> {
        #[allow(clippy::cast_sign_loss)] // Model input size is positive
        let size = self.input_size as usize;
        let channels = 3;

        // Resize to model input resolution
        let mut resized = Mat::default();
        imgproc::resize(
            frame,
            &mut resized,
            Size::new(self.input_size, self.input_size),
            0.0,
            0.0,
            InterpolationFlags::INTER_LINEAR as i32,
        )?;

        // Convert BGR to RGB
        let mut rgb_image = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb_image, imgproc::COLOR_BGR2RGB, 0)?;

        // Convert to f32 and normalize to [0, 1]
        let mut float_image = Mat::default();
        rgb_image.convert_to(&mut float_image, CV_32F, 1.0 / 255.0, 0.0)?;

        let mut data = vec![0.0f32; size * size * channels];
        for row in 0..size {
            for col in 0..size {
                let pixel = float_image.at_2d::<opencv::core::Vec3f>(usize_to_i32(row)?, usize_to_i32(col)?)?;
                for ch in 0..channels {
                    data[(row * size + col) * channels + ch] = pixel[ch];
                }
            }
        }

        // The hand landmark model expects NHWC input
        Array4::from_shape_vec((1, size, size, channels), data)
            .map_err(|e| crate::error::Error::ModelDataFormatError(format!("Failed to create input array: {e}")))
    }

    /// Run forward pass through the model
    fn forward(&self, input: Array4<f32>) -> Result<(Array1<f32>, f32)> {
        let cow_array = CowArray::from(input.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        let outputs = self.session.run(vec![input_tensor])?;
        let mut outputs = outputs.into_iter();

        let marks_output = outputs
            .next()
            .ok_or_else(|| crate::error::Error::ModelOutputError("No landmark output from model".to_string()))?;
        let marks_tensor = marks_output.try_extract::<f32>()?;
        let marks_view = marks_tensor.view();
        let marks_data = marks_view
            .as_slice()
            .ok_or_else(|| crate::error::Error::ModelOutputError("Failed to get landmark data".to_string()))?;

        if marks_data.len() < LANDMARK_OUTPUT_VALUES {
            return Err(crate::error::Error::ModelOutputError(format!(
                "Expected {LANDMARK_OUTPUT_VALUES} landmark values, got {}",
                marks_data.len()
            )));
        }
        let marks = Array1::from(marks_data.to_vec());

        // Second output, when present, is the hand presence score
        let score = match outputs.next() {
            Some(value) => {
                let tensor = value.try_extract::<f32>()?;
                let view = tensor.view();
                view.as_slice().and_then(|s| s.first().copied()).unwrap_or(1.0)
            }
            None => 1.0,
        };

        Ok((marks, score))
    }

    /// Convert model output to normalized landmarks
    #[allow(clippy::cast_precision_loss)] // Input size fits f32 exactly
    fn postprocess(marks: &Array1<f32>, input_size: i32) -> Vec<Landmark> {
        // Model coordinates are in input-pixel units
        let scale = input_size as f32;
        (0..NUM_HAND_LANDMARKS)
            .map(|i| {
                let idx = i * 3;
                Landmark {
                    x: marks[idx] / scale,
                    y: marks[idx + 1] / scale,
                    z: marks[idx + 2] / scale,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_count() {
        assert_eq!(NUM_HAND_LANDMARKS, 21);
    }

    #[test]
    fn test_landmark_data_structure() {
        // Each landmark has 3 coordinates (x, y, z)
        assert_eq!(LANDMARK_OUTPUT_VALUES, NUM_HAND_LANDMARKS * 3);
    }

    #[test]
    fn test_postprocess_normalizes_to_unit_space() {
        let mut values = vec![0.0f32; LANDMARK_OUTPUT_VALUES];
        // Landmark 8 at input-pixel (112, 56, 0)
        values[24] = 112.0;
        values[25] = 56.0;
        let marks = Array1::from(values);

        let landmarks = HandDetector::postprocess(&marks, LANDMARK_INPUT_SIZE);
        assert_eq!(landmarks.len(), NUM_HAND_LANDMARKS);
        assert!((landmarks[8].x - 0.5).abs() < 1e-6);
        assert!((landmarks[8].y - 0.25).abs() < 1e-6);
        assert_eq!(landmarks[8].z, 0.0);
    }
}
