//! SSD1306 OLED transport
//!
//! Command/data framing for 128x64 SSD1306 panels on a blocking I2C bus.
//! Pixels live in a [`FrameBuffer`]; [`Ssd1306::flush`] pushes one.

use embedded_hal::i2c::I2c;

use crate::frame::{FrameBuffer, PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: command stream follows
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: display data follows
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-on sequence for a 128x64 panel with internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x02, // Page addressing
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// Command bytes sent after one control byte in a single transfer
const MAX_COMMANDS: usize = 31;

// The power-on sequence goes out as one transfer
const _: () = assert!(INIT_SEQUENCE.len() <= MAX_COMMANDS);

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a driver; no bus traffic until [`init`](Self::init)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            initialized: false,
        }
    }

    /// Send the power-on sequence
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.commands(INIT_SEQUENCE)?;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Write a frame to panel memory, one page per transfer
    pub fn flush(&mut self, frame: &FrameBuffer) -> Result<(), I2C::Error> {
        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;

        for page in 0..PAGES {
            self.commands(&[
                cmd::SET_PAGE_ADDR | page as u8,
                cmd::SET_LOW_COLUMN,
                cmd::SET_HIGH_COLUMN,
            ])?;
            data[1..].copy_from_slice(frame.page(page));
            self.i2c.write(self.address, &data)?;
        }

        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.commands(&[cmd::SET_CONTRAST, contrast])
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.commands(&[cmd::DISPLAY_ON])
        } else {
            self.commands(&[cmd::DISPLAY_OFF])
        }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Send a command stream, [`MAX_COMMANDS`] bytes per transfer
    fn commands(&mut self, cmds: &[u8]) -> Result<(), I2C::Error> {
        let mut buf = [0u8; MAX_COMMANDS + 1];
        buf[0] = CONTROL_COMMAND;
        for chunk in cmds.chunks(MAX_COMMANDS) {
            buf[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &buf[..=chunk.len()])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeI2c;

    #[test]
    fn test_init_sequence() {
        let mut oled = Ssd1306::new(FakeI2c::new(), DEFAULT_ADDRESS);
        assert!(!oled.is_initialized());
        oled.init().unwrap();
        assert!(oled.is_initialized());

        let bus = oled.release();
        assert_eq!(bus.writes.len(), 1);
        let (address, bytes) = &bus.writes[0];
        assert_eq!(*address, DEFAULT_ADDRESS);
        assert_eq!(bytes[0], CONTROL_COMMAND);
        assert_eq!(&bytes[1..], INIT_SEQUENCE);
        assert_eq!(bytes.last(), Some(&cmd::DISPLAY_ON));
    }

    #[test]
    fn test_flush_writes_every_page() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(3, 17, true); // page 2, bit 1

        let mut oled = Ssd1306::new(FakeI2c::new(), 0x3D);
        oled.flush(&frame).unwrap();

        let bus = oled.release();
        let data: Vec<&Vec<u8>> = bus
            .writes
            .iter()
            .map(|(_, bytes)| bytes)
            .filter(|bytes| bytes[0] == CONTROL_DATA)
            .collect();
        assert_eq!(data.len(), PAGES);
        assert!(data.iter().all(|bytes| bytes.len() == WIDTH + 1));
        assert_eq!(data[2][1 + 3], 0b0000_0010);
        assert!(bus.writes.iter().all(|(address, _)| *address == 0x3D));

        // Each page transfer is preceded by its page address
        assert_eq!(bus.writes[4].1, [CONTROL_COMMAND, 0xB2, 0x00, 0x10]);
    }

    #[test]
    fn test_bus_error_propagates() {
        let mut bus = FakeI2c::new();
        bus.fail = true;
        let mut oled = Ssd1306::new(bus, DEFAULT_ADDRESS);
        assert!(oled.init().is_err());
        assert!(!oled.is_initialized());
    }

    #[test]
    fn test_long_command_stream_is_split() {
        let stream: Vec<u8> = (0..40).collect();
        let mut oled = Ssd1306::new(FakeI2c::new(), DEFAULT_ADDRESS);
        oled.commands(&stream).unwrap();

        let bus = oled.release();
        assert_eq!(bus.writes.len(), 2);
        assert!(bus.writes.iter().all(|(_, bytes)| bytes[0] == CONTROL_COMMAND));
        assert_eq!(bus.writes[0].1.len(), MAX_COMMANDS + 1);
        let sent: Vec<u8> = bus
            .writes
            .iter()
            .flat_map(|(_, bytes)| bytes[1..].iter().copied())
            .collect();
        assert_eq!(sent, stream);
    }

    #[test]
    fn test_contrast() {
        let mut oled = Ssd1306::new(FakeI2c::new(), DEFAULT_ADDRESS);
        oled.set_contrast(0x10).unwrap();
        oled.set_display_on(false).unwrap();
        let bus = oled.release();
        assert_eq!(bus.writes[0].1, [CONTROL_COMMAND, cmd::SET_CONTRAST, 0x10]);
        assert_eq!(bus.writes[1].1, [CONTROL_COMMAND, cmd::DISPLAY_OFF]);
    }
}
