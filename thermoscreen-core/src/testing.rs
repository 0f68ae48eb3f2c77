//! Test doubles shared by the unit tests

use std::string::String;
use std::vec::Vec;

use crate::traits::{Canvas, CanvasError, Color, TextStyle};

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasOp {
    Clear,
    Bitmap { x: i16, y: i16, width: u16, height: u16 },
    Text { x: i16, y: i16, text: String, style: TextStyle },
    FillRect { x: i16, y: i16, width: u16, height: u16, color: Color },
    Rect { x: i16, y: i16, width: u16, height: u16, color: Color },
    Present,
}

/// Canvas that records every successful call
///
/// Failures can be injected; a failed call is not recorded.
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    fail_next: Option<CanvasError>,
    fail_present: bool,
    fail_text: Option<&'static str>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_next: None,
            fail_present: false,
            fail_text: None,
        }
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Return and forget everything recorded so far
    pub fn take(&mut self) -> Vec<CanvasOp> {
        core::mem::take(&mut self.ops)
    }

    /// Fail the next call, whatever it is
    pub fn fail_next(&mut self, err: CanvasError) {
        self.fail_next = Some(err);
    }

    /// Fail every `present()` until cleared
    pub fn set_fail_present(&mut self, fail: bool) {
        self.fail_present = fail;
    }

    /// Fail every text draw containing `needle` until cleared
    pub fn set_fail_text(&mut self, needle: Option<&'static str>) {
        self.fail_text = needle;
    }

    pub fn count(&self, pred: impl Fn(&CanvasOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, op: CanvasOp) -> Result<(), CanvasError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.ops.push(op);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) -> Result<(), CanvasError> {
        self.record(CanvasOp::Clear)
    }

    fn draw_bitmap_masked(
        &mut self,
        x: i16,
        y: i16,
        image: &[u8],
        mask: &[u8],
        width: u16,
        height: u16,
    ) -> Result<(), CanvasError> {
        let expected = ((width as usize + 7) / 8) * height as usize;
        if image.len() != expected || mask.len() != expected {
            return Err(CanvasError::InvalidDimensions);
        }
        self.record(CanvasOp::Bitmap {
            x,
            y,
            width,
            height,
        })
    }

    fn draw_text(
        &mut self,
        x: i16,
        y: i16,
        text: &str,
        style: TextStyle,
    ) -> Result<(), CanvasError> {
        if let Some(needle) = self.fail_text {
            if text.contains(needle) {
                return Err(CanvasError::Communication);
            }
        }
        self.record(CanvasOp::Text {
            x,
            y,
            text: String::from(text),
            style,
        })
    }

    fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.record(CanvasOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        })
    }

    fn draw_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.record(CanvasOp::Rect {
            x,
            y,
            width,
            height,
            color,
        })
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        if self.fail_present {
            return Err(CanvasError::Communication);
        }
        self.record(CanvasOp::Present)
    }

    fn dimensions(&self) -> (u16, u16) {
        (128, 64)
    }
}
