//! Status screen layout and widgets
//!
//! The 128x64 status screen has four independently redrawn fields:
//!
//! ```text
//! +--------------------------------------+
//! | OFF / ON #                      .:|| |  switch, signal
//! | [|]                                  |
//! | [|]     21.5C                        |  gauge, temperature
//! | [|]                                  |
//! |         SET 21.0                     |  setpoint
//! +--------------------------------------+
//! ```
//!
//! Every widget erases its own region before drawing, so a field can be
//! redrawn without touching its neighbours.

use core::fmt::Write;

use heapless::String;

use crate::config::TrackerConfig;
use crate::traits::{Canvas, CanvasError, CanvasExt, Color, Region, TextStyle};

/// Switch label and marker
pub const SWITCH_REGION: Region = Region::new(0, 0, 40, 12);

/// Filled square shown next to "ON"
pub const SWITCH_MARKER: Region = Region::new(16, 1, 8, 8);

/// Signal-strength bars
pub const SIGNAL_REGION: Region = Region::new(108, 0, 20, 12);

/// Thermometer gauge
pub const GAUGE_REGION: Region = Region::new(2, 14, 10, 36);

/// Large temperature reading
pub const TEMPERATURE_REGION: Region = Region::new(24, 22, 104, 20);

/// Setpoint line
pub const SETPOINT_REGION: Region = Region::new(24, 52, 104, 12);

/// Number of bars in the signal icon
pub const SIGNAL_MAX_BARS: u8 = 4;

/// RSSI thresholds (dBm) for 4, 3, 2 and 1 bars
const SIGNAL_THRESHOLDS: [i32; 4] = [-55, -65, -75, -85];

type Label = String<16>;

/// Distance from a whole bucket, in buckets, treated as rounding noise
const BUCKET_EPSILON: f32 = 1e-3;

/// Map a reading to its display bucket: `floor(value / step)`
///
/// Two readings in the same bucket look identical on screen. `step` must
/// be positive; configuration validation guarantees it. A quotient within
/// [`BUCKET_EPSILON`] of a whole number snaps to it, so 21.3 at a 0.1
/// step lands in bucket 213 even though `21.3 / 0.1` is 212.99998.
pub fn quantize(value: f32, step: f32) -> i32 {
    let scaled = value / step;
    let nearest = floor(scaled + 0.5);
    let offset = scaled - nearest as f32;
    if (-BUCKET_EPSILON..=BUCKET_EPSILON).contains(&offset) {
        nearest
    } else {
        floor(scaled)
    }
}

fn floor(value: f32) -> i32 {
    let truncated = value as i32;
    if (truncated as f32) > value {
        truncated - 1
    } else {
        truncated
    }
}

/// Value shown for a bucket, in tenths of a degree
pub fn bucket_tenths(bucket: i32, step: f32) -> i32 {
    let tenths = bucket as f32 * step * 10.0;
    if tenths >= 0.0 {
        (tenths + 0.5) as i32
    } else {
        (tenths - 0.5) as i32
    }
}

/// Bars shown for a signal strength
///
/// Non-negative readings mean "not associated" and show no bars.
pub fn signal_bars(rssi: i32) -> u8 {
    if rssi >= 0 {
        return 0;
    }
    let weaker = SIGNAL_THRESHOLDS
        .iter()
        .take_while(|&&threshold| rssi < threshold)
        .count();
    SIGNAL_MAX_BARS - weaker as u8
}

/// Gauge fill in pixels for a bucket
pub fn gauge_level(bucket: i32, config: &TrackerConfig, inner_height: u16) -> u16 {
    let value = bucket as f32 * config.temperature_step;
    let span = config.gauge_max_c - config.gauge_min_c;
    let ratio = ((value - config.gauge_min_c) / span).clamp(0.0, 1.0);
    (ratio * inner_height as f32 + 0.5) as u16
}

fn write_tenths(label: &mut Label, tenths: i32) {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    let _ = write!(label, "{}{}.{}", sign, abs / 10, abs % 10);
}

/// Temperature text, e.g. "21.5C"
pub fn temperature_label(bucket: i32, step: f32) -> Label {
    let mut label = Label::new();
    write_tenths(&mut label, bucket_tenths(bucket, step));
    let _ = label.push('C');
    label
}

/// Setpoint text, e.g. "SET 21.0"
pub fn setpoint_label(bucket: i32, step: f32) -> Label {
    let mut label = Label::new();
    let _ = label.push_str("SET ");
    write_tenths(&mut label, bucket_tenths(bucket, step));
    label
}

/// Draw the heating output state
pub fn draw_switch<C: Canvas + ?Sized>(canvas: &mut C, on: bool) -> Result<(), CanvasError> {
    let text = if on { "ON" } else { "OFF" };
    canvas.draw_field(SWITCH_REGION, text, TextStyle::Small)?;
    if on {
        canvas.fill_rect(
            SWITCH_MARKER.x,
            SWITCH_MARKER.y,
            SWITCH_MARKER.width,
            SWITCH_MARKER.height,
            Color::White,
        )?;
    }
    Ok(())
}

/// Draw the signal-strength icon
pub fn draw_signal<C: Canvas + ?Sized>(canvas: &mut C, bars: u8) -> Result<(), CanvasError> {
    canvas.draw_signal_bars(SIGNAL_REGION, bars, SIGNAL_MAX_BARS)
}

/// Draw the temperature reading and the thermometer gauge
pub fn draw_temperature<C: Canvas + ?Sized>(
    canvas: &mut C,
    bucket: i32,
    config: &TrackerConfig,
) -> Result<(), CanvasError> {
    let inner = GAUGE_REGION.height.saturating_sub(2);
    canvas.draw_vgauge(GAUGE_REGION, gauge_level(bucket, config, inner))?;
    let label = temperature_label(bucket, config.temperature_step);
    canvas.draw_field(TEMPERATURE_REGION, &label, TextStyle::Large)
}

/// Draw the setpoint line
pub fn draw_setpoint<C: Canvas + ?Sized>(
    canvas: &mut C,
    bucket: i32,
    step: f32,
) -> Result<(), CanvasError> {
    let label = setpoint_label(bucket, step);
    canvas.draw_field(SETPOINT_REGION, &label, TextStyle::Small)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CanvasOp, RecordingCanvas};

    #[test]
    fn test_quantize_floors() {
        assert_eq!(quantize(21.0, 0.5), 42);
        assert_eq!(quantize(21.4, 0.5), 42);
        assert_eq!(quantize(21.6, 0.5), 43);
        assert_eq!(quantize(-0.2, 0.5), -1);
        assert_eq!(quantize(-0.5, 0.5), -1);
        assert_eq!(quantize(0.0, 0.5), 0);
    }

    #[test]
    fn test_quantize_tenth_step() {
        assert_eq!(quantize(21.3, 0.1), 213);
        assert_eq!(quantize(22.3, 0.1), 223);
        assert_eq!(quantize(21.35, 0.1), 213);
        assert_eq!(quantize(-0.3, 0.1), -3);
        assert_eq!(quantize(0.7, 0.1), 7);
    }

    #[test]
    fn test_labels() {
        assert_eq!(temperature_label(43, 0.5).as_str(), "21.5C");
        assert_eq!(temperature_label(-1, 0.5).as_str(), "-0.5C");
        assert_eq!(setpoint_label(42, 0.5).as_str(), "SET 21.0");
        assert_eq!(setpoint_label(215, 0.1).as_str(), "SET 21.5");
    }

    #[test]
    fn test_signal_buckets() {
        assert_eq!(signal_bars(-40), 4);
        assert_eq!(signal_bars(-55), 4);
        assert_eq!(signal_bars(-56), 3);
        assert_eq!(signal_bars(-65), 3);
        assert_eq!(signal_bars(-70), 2);
        assert_eq!(signal_bars(-85), 1);
        assert_eq!(signal_bars(-86), 0);
        assert_eq!(signal_bars(0), 0);
        assert_eq!(signal_bars(12), 0);
    }

    #[test]
    fn test_gauge_level() {
        let config = TrackerConfig::default();
        assert_eq!(gauge_level(quantize(10.0, 0.5), &config, 34), 0);
        assert_eq!(gauge_level(quantize(20.0, 0.5), &config, 34), 17);
        assert_eq!(gauge_level(quantize(30.0, 0.5), &config, 34), 34);
        assert_eq!(gauge_level(quantize(-5.0, 0.5), &config, 34), 0);
        assert_eq!(gauge_level(quantize(45.0, 0.5), &config, 34), 34);
    }

    #[test]
    fn test_switch_marker_only_when_on() {
        let mut canvas = RecordingCanvas::new();
        draw_switch(&mut canvas, false).unwrap();
        assert_eq!(canvas.texts(), ["OFF"]);
        assert_eq!(canvas.ops().len(), 2);

        let mut canvas = RecordingCanvas::new();
        draw_switch(&mut canvas, true).unwrap();
        assert_eq!(canvas.texts(), ["ON"]);
        assert!(matches!(
            canvas.ops().last(),
            Some(CanvasOp::FillRect {
                color: Color::White,
                ..
            })
        ));
    }

    #[test]
    fn test_temperature_uses_large_font() {
        let mut canvas = RecordingCanvas::new();
        draw_temperature(&mut canvas, 43, &TrackerConfig::default()).unwrap();
        assert!(canvas.ops().contains(&CanvasOp::Text {
            x: TEMPERATURE_REGION.x,
            y: TEMPERATURE_REGION.y,
            text: "21.5C".into(),
            style: TextStyle::Large,
        }));
    }

    #[test]
    fn test_regions_fit_panel() {
        for region in [
            SWITCH_REGION,
            SWITCH_MARKER,
            SIGNAL_REGION,
            GAUGE_REGION,
            TEMPERATURE_REGION,
            SETPOINT_REGION,
        ] {
            assert!(region.x >= 0 && region.y >= 0);
            assert!(region.x as u16 + region.width <= 128);
            assert!(region.y as u16 + region.height <= 64);
        }
    }
}
