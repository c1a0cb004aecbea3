//! Spectral-centroid summary, independent of the voice-report pipeline.
//!
//! Frames the signal, computes the magnitude spectrum per frame, and
//! summarizes the magnitude-weighted mean frequency (the spectral
//! centroid) across frames.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use std::f32::consts::PI;

use crate::engine::Signal;
use crate::measures::{mean, median, population_std};

/// Analysis frame length in samples.
const FRAME_SIZE: usize = 2048;

/// Hop between frames (75% overlap).
const HOP_SIZE: usize = 512;

/// Frames with total spectral magnitude below this are skipped.
const MIN_FRAME_MAGNITUDE: f32 = 1e-10;

/// Summary of per-frame spectral centroids, in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentroidStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

/// Compute spectral-centroid statistics over the signal.
///
/// Returns `None` for signals shorter than one analysis frame, with an
/// unknown sample rate, or with no spectral energy in any frame.
pub fn centroid_statistics(signal: &Signal) -> Option<CentroidStats> {
    let samples = signal.samples();
    if samples.len() < FRAME_SIZE || signal.sample_rate() == 0 {
        return None;
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(FRAME_SIZE);
    let bin_hz = signal.sample_rate() as f64 / FRAME_SIZE as f64;

    // Hann window, reused across frames.
    let window: Vec<f32> = (0..FRAME_SIZE)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f32 / FRAME_SIZE as f32).cos())
        .collect();

    let mut centroids = Vec::new();
    let mut start = 0;
    while start + FRAME_SIZE <= samples.len() {
        let mut buffer: Vec<Complex<f32>> = samples[start..start + FRAME_SIZE]
            .iter()
            .zip(&window)
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();
        fft.process(&mut buffer);

        let mut weighted = 0.0f64;
        let mut total = 0.0f64;
        for (bin, value) in buffer.iter().take(FRAME_SIZE / 2 + 1).enumerate() {
            let magnitude = value.norm() as f64;
            weighted += bin as f64 * bin_hz * magnitude;
            total += magnitude;
        }
        if total > MIN_FRAME_MAGNITUDE as f64 {
            centroids.push(weighted / total);
        }

        start += HOP_SIZE;
    }

    if centroids.is_empty() {
        return None;
    }

    Some(CentroidStats {
        mean: mean(&centroids),
        median: median(&centroids),
        std: population_std(&centroids),
    })
}
