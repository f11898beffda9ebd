//! Wind dashboard frame rendering.
//!
//! A [`Dashboard`] owns a static background, drawn once at construction, and
//! a frame buffer that is reset from the background on every call. Each frame
//! shows:
//! - the compass with the direction arrow and the circular spread wedge
//! - the current direction and speed readout
//! - speed statistics and the speed-history strip
//!
//! A dashboard is not meant to be shared between threads; use one instance
//! per worker.

use std::path::Path;

use image::{GrayImage, Luma};
use serde::Serialize;
use tracing::{debug, info};
use wind_common::{DashboardConfig, DashboardResult, HistoryMode};
use wind_stats::{CircularStat, Sample, SeriesWindow, SpeedSummary};

use crate::fonts::FontSet;
use crate::geometry::{pie_wedge_bounds, ArrowStyle, CompassProjector};
use crate::layout::{DashboardLayout, Point};
use crate::png::encode_gray_image;
use crate::primitives::{DrawList, FontFace, Primitive, WHITE};
use crate::raster::rasterize;

// ============================================================================
// Styling
// ============================================================================

const LABEL_SIZE: f32 = 15.0;
const READOUT_SIZE: f32 = 50.0;
const UNIT_SIZE: f32 = 30.0;

const LEGEND_GRAY: u8 = 80;
const WEDGE_GRAY: u8 = 30;
const BAR_GRAY: u8 = 100;

const TICK_WIDTH: u32 = 3;
const ARROW_WIDTH: u32 = 3;
const BAR_WIDTH: u32 = 5;
const AGE_TICK_SIZE: i32 = 5;

/// Horizontal distance of the speed statistics from the history strip.
const STATS_OFFSET: i32 = 85;
const STATS_SPACING: i32 = 28;

/// Everything computed for one frame, independent of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSummary {
    /// Most recent reading, output convention.
    pub current: Sample,
    /// Circular statistics of the windowed directions, output convention.
    pub direction: CircularStat,
    /// Statistics of the windowed speeds.
    pub speed: SpeedSummary,
    /// Seconds covered by the window after clipping.
    pub timespan: f64,
    /// Samples in the window after clipping.
    pub samples: usize,
}

/// Primitives for one frame plus the values they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub summary: FrameSummary,
    pub primitives: DrawList,
}

/// Renders wind dashboard frames.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    layout: DashboardLayout,
    projector: CompassProjector,
    fonts: FontSet,
    background: GrayImage,
    frame: GrayImage,
}

impl Dashboard {
    /// Create a dashboard, loading the fonts named in the configuration.
    pub fn new(config: DashboardConfig) -> DashboardResult<Self> {
        let fonts = FontSet::load(&config.fonts)?;
        Self::with_fonts(config, fonts)
    }

    /// Create a dashboard with already loaded fonts.
    pub fn with_fonts(config: DashboardConfig, fonts: FontSet) -> DashboardResult<Self> {
        config.validate()?;

        let layout = DashboardLayout::default();
        let projector = CompassProjector::new(layout.compass_center(), layout.compass_radius());

        let mut background = GrayImage::from_pixel(layout.width, layout.height, Luma([0]));
        rasterize(
            &mut background,
            &background_primitives(&config, &layout, &projector),
            &fonts,
        );
        let frame = background.clone();

        info!(
            history_seconds = config.history_seconds,
            in_wind_dir = %config.in_wind_dir,
            out_wind_dir = %config.out_wind_dir,
            calibration = config.calibration_degrees,
            "Dashboard initialized"
        );

        Ok(Self {
            config,
            layout,
            projector,
            fonts,
            background,
            frame,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// The static background shared by all frames.
    pub fn background(&self) -> &GrayImage {
        &self.background
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &GrayImage {
        &self.frame
    }

    /// Compute the statistics and drawing primitives for one frame.
    ///
    /// Does not touch the frame buffer.
    pub fn compose(&self, speeds: &[f64], directions: &[f64], timespan: f64) -> DashboardResult<Frame> {
        let window = SeriesWindow::normalize(speeds, directions, timespan, &self.config)?;
        let direction = CircularStat::from_directions(window.directions())?;
        let speed = SpeedSummary::from_speeds(window.speeds())?;

        let summary = FrameSummary {
            current: window.current(),
            direction,
            speed,
            timespan: window.timespan(),
            samples: window.len(),
        };

        let mut primitives = DrawList::new();
        self.draw_readout(&mut primitives, &summary.current);
        self.draw_spread_wedge(&mut primitives, &summary.direction);
        self.draw_arrow(&mut primitives, &summary.current);
        self.draw_speed_history(&mut primitives, &window, &summary.speed);

        Ok(Frame {
            summary,
            primitives,
        })
    }

    /// Render a frame into the frame buffer.
    ///
    /// On error the previous frame is left untouched.
    pub fn render(
        &mut self,
        speeds: &[f64],
        directions: &[f64],
        timespan: f64,
    ) -> DashboardResult<FrameSummary> {
        let frame = self.compose(speeds, directions, timespan)?;

        self.frame.copy_from_slice(&self.background);
        rasterize(&mut self.frame, &frame.primitives, &self.fonts);

        debug!(
            samples = frame.summary.samples,
            timespan = frame.summary.timespan,
            direction = frame.summary.current.direction,
            speed = frame.summary.current.speed,
            mean = frame.summary.direction.mean_degrees,
            spread = frame.summary.direction.spread_degrees,
            "Rendered frame"
        );

        Ok(frame.summary)
    }

    /// Render a frame and write it as PNG to `path`.
    pub fn generate(
        &mut self,
        speeds: &[f64],
        directions: &[f64],
        timespan: f64,
        path: impl AsRef<Path>,
    ) -> DashboardResult<FrameSummary> {
        let summary = self.render(speeds, directions, timespan)?;
        std::fs::write(path.as_ref(), self.frame_png()?)?;
        Ok(summary)
    }

    /// PNG encoding of the current frame buffer.
    pub fn frame_png(&self) -> DashboardResult<Vec<u8>> {
        encode_gray_image(&self.frame)
    }

    fn calibration(&self) -> f64 {
        self.config.calibration_degrees as f64
    }

    fn draw_readout(&self, list: &mut DrawList, current: &Sample) {
        // Direction is already in [0, 360); show whole degrees only
        let direction = format!("{:3.0}\u{00B0}", current.direction.trunc());
        list.text(Point::new(260, 20), direction, FontFace::Bold, READOUT_SIZE, WHITE);

        let speed = format!("{:4.1}", current.speed);
        list.text(Point::new(400, 20), speed, FontFace::Bold, READOUT_SIZE, WHITE);
        list.text(Point::new(500, 40), "m/s", FontFace::Regular, UNIT_SIZE, WHITE);
    }

    fn draw_spread_wedge(&self, list: &mut DrawList, stat: &CircularStat) {
        let (start_degrees, end_degrees) =
            pie_wedge_bounds(stat.mean_degrees - self.calibration(), stat.spread_degrees);

        list.push(Primitive::PieSlice {
            bounds: self.layout.wedge_bounds(),
            start_degrees,
            end_degrees,
            gray: WEDGE_GRAY,
        });
    }

    fn draw_arrow(&self, list: &mut DrawList, current: &Sample) {
        let style = ArrowStyle::from(self.config.out_wind_dir);
        let arrow = self
            .projector
            .arrow(current.direction, self.calibration(), style);

        list.line(arrow.center, arrow.shaft_end, ARROW_WIDTH, WHITE);
        list.line(arrow.wing_left, arrow.wing_anchor, ARROW_WIDTH, WHITE);
        list.line(arrow.wing_right, arrow.wing_anchor, ARROW_WIDTH, WHITE);
    }

    fn draw_speed_history(&self, list: &mut DrawList, window: &SeriesWindow, speed: &SpeedSummary) {
        let panel = self.layout.speed_panel;

        let stats = [
            format!("Max: {:3.1}", speed.max),
            format!("Mean: {:3.1}", speed.mean),
            format!("1\u{03C3}: {:3.1}", speed.std_dev),
            format!("Min: {:3.1}", speed.min),
        ];
        for (i, text) in stats.into_iter().enumerate() {
            let anchor = Point::new(
                panel.left() - STATS_OFFSET,
                panel.top() + STATS_SPACING * i as i32,
            );
            list.text(anchor, text, FontFace::Regular, LABEL_SIZE, WHITE);
        }

        let baseline = panel.bottom() - 2;
        let bar_range = (panel.height() - 4) as f64;
        let history = self.config.history();

        match self.config.history_mode {
            HistoryMode::Binned { bins } => {
                let x_range = panel.width() + 9;
                let values = window.resample(history, bins);
                let covered = window.covered_bins(history, bins);

                for (b, value) in values.iter().enumerate().take(covered) {
                    let x = panel.left() + 2 + (b as i32 * x_range) / bins as i32;
                    let height = (speed.scale(*value) * bar_range).round() as i32;
                    list.line(
                        Point::new(x, baseline),
                        Point::new(x, baseline - height),
                        BAR_WIDTH,
                        BAR_GRAY,
                    );
                }
            }
            HistoryMode::PerSample => {
                let x_range = (panel.width() - 4) as f64;

                for (i, value) in window.speeds().iter().enumerate() {
                    let x = panel.left() + 2 + (window.age_of(i) / history * x_range).round() as i32;
                    let height = (speed.scale(*value) * bar_range).round() as i32;
                    list.line(
                        Point::new(x, baseline),
                        Point::new(x, baseline - height),
                        1,
                        BAR_GRAY,
                    );
                }
            }
        }
    }
}

/// Primitives of the static background: compass ring, ticks and labels.
pub fn background_primitives(
    config: &DashboardConfig,
    layout: &DashboardLayout,
    projector: &CompassProjector,
) -> DrawList {
    let mut list = DrawList::new();
    let calibration = config.calibration_degrees as f64;

    // Ticks run from the center; the filled circle hides their inner part
    for tick in projector.ticks(calibration) {
        list.line(projector.center, tick.tick_end, TICK_WIDTH, WHITE);
        list.text(
            tick.label_anchor.offset(-5, -7),
            tick.label,
            FontFace::Regular,
            LABEL_SIZE,
            WHITE,
        );
    }

    list.push(Primitive::Ellipse {
        bounds: layout.compass,
        fill: Some(0),
        outline: Some(WHITE),
    });

    list.text(
        Point::new(3, 3),
        format!("Up={}\u{00B0}", config.calibration_degrees),
        FontFace::Regular,
        LABEL_SIZE,
        WHITE,
    );

    // Speed-history strip frame and age axis
    let panel = layout.speed_panel;
    list.line(panel.top_left, Point::new(panel.right(), panel.top()), 0, WHITE);
    list.line(Point::new(panel.left(), panel.bottom()), panel.bottom_right, 0, WHITE);

    let ticks = config.history_ticks as i32;
    for a in 0..ticks {
        let x = panel.left() + a * panel.width() / (ticks - 1);
        let top = Point::new(x, panel.bottom());
        let bottom = top.offset(0, AGE_TICK_SIZE);
        list.line(top, bottom, 0, WHITE);

        let age = a as u64 * config.history_seconds as u64 / (ticks as u64 - 1);
        list.text(
            bottom.offset(-5, 3),
            age.to_string(),
            FontFace::Regular,
            LABEL_SIZE,
            WHITE,
        );
    }

    list.text(
        panel.top_left.offset(0, -20),
        format!("Speed history last {} seconds", config.history_seconds),
        FontFace::Regular,
        LABEL_SIZE,
        WHITE,
    );
    list.text(
        Point::new(panel.left() - 40, panel.bottom() + 8),
        "Age",
        FontFace::Regular,
        LABEL_SIZE,
        WHITE,
    );

    // Divider between the direction and speed readouts
    list.line(Point::new(380, 10), Point::new(380, 75), 0, WHITE);

    list.text(
        Point::new(260, 5),
        config.out_wind_dir.label(),
        FontFace::Regular,
        LABEL_SIZE,
        WHITE,
    );
    list.text(Point::new(400, 5), "Speed", FontFace::Regular, LABEL_SIZE, WHITE);

    list.text(Point::new(3, 210), "Gray pie", FontFace::Regular, LABEL_SIZE, LEGEND_GRAY);
    list.text(
        Point::new(3, 230),
        "1\u{03C3} (68%)",
        FontFace::Regular,
        LABEL_SIZE,
        LEGEND_GRAY,
    );

    list
}
