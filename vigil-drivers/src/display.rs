//! I2C character display
//!
//! HD44780-class 16x2 panel behind a PCF8574 I/O expander, driven in
//! 4-bit mode. Messages are padded to the full line width so a shorter
//! message fully replaces a longer one.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use vigil_core::traits::{DisplayError, StatusDisplay};

/// Default PCF8574 bus address
pub const DEFAULT_ADDR: u8 = 0x27;

const COLS: usize = 16;
const ROWS: u8 = 2;

// PCF8574 bit assignments (common backpack wiring)
const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

// HD44780 commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // increment, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5x8 font
const CMD_SET_DDRAM: u8 = 0x80;

const LINE_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// 16x2 character LCD on an I2C expander
pub struct Lcd1602<I, D> {
    i2c: I,
    delay: D,
    addr: u8,
    backlight: bool,
}

impl<I: I2c, D: DelayNs> Lcd1602<I, D> {
    /// Create the driver; call [`init`](Self::init) before use
    pub fn new(i2c: I, delay: D, addr: u8) -> Self {
        Self {
            i2c,
            delay,
            addr,
            backlight: true,
        }
    }

    /// Run the HD44780 4-bit initialization sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Power-on settle
        self.delay.delay_ms(50);

        // Three times 8-bit function set, then switch to 4-bit
        self.write_nibble(0x30, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x30, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x30, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, false)?;
        self.delay.delay_us(150);

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear_panel()?;
        self.command(CMD_ENTRY_MODE)?;
        Ok(())
    }

    fn clear_panel(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        // Clear is the one slow instruction
        self.delay.delay_ms(2);
        Ok(())
    }

    fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_byte(byte, false)
    }

    fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_byte(byte, true)
    }

    fn write_byte(&mut self, byte: u8, rs: bool) -> Result<(), DisplayError> {
        self.write_nibble(byte & 0xF0, rs)?;
        self.write_nibble(byte << 4, rs)?;
        Ok(())
    }

    /// Clock the high nibble of `bits` out with an enable pulse
    fn write_nibble(&mut self, bits: u8, rs: bool) -> Result<(), DisplayError> {
        let mut byte = bits & 0xF0;
        if rs {
            byte |= RS;
        }
        if self.backlight {
            byte |= BACKLIGHT;
        }
        self.bus_write(byte | EN)?;
        self.delay.delay_us(1);
        self.bus_write(byte)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn bus_write(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.addr, &[byte])
            .map_err(|_| DisplayError::Bus)
    }
}

impl<I: I2c, D: DelayNs> StatusDisplay for Lcd1602<I, D> {
    fn show_message(&mut self, line: u8, text: &str) -> Result<(), DisplayError> {
        if line >= ROWS {
            return Err(DisplayError::OutOfRange);
        }
        self.command(CMD_SET_DDRAM | LINE_OFFSETS[line as usize])?;
        let mut written = 0;
        for byte in text.bytes().take(COLS) {
            // The panel has no codepage beyond ASCII
            let byte = if byte.is_ascii() { byte } else { b'?' };
            self.data(byte)?;
            written += 1;
        }
        for _ in written..COLS {
            self.data(b' ')?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.clear_panel()
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        // Flush the backlight bit without touching the controller
        self.bus_write(if on { BACKLIGHT } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;
    use vigil_core::controller::DisplayAction;

    #[derive(Default)]
    struct FakeI2c {
        written: Vec<u8>,
        fail: bool,
    }

    #[derive(Debug)]
    struct FakeBusError;

    impl embedded_hal::i2c::Error for FakeBusError {
        fn kind(&self) -> embedded_hal::i2c::ErrorKind {
            embedded_hal::i2c::ErrorKind::Other
        }
    }

    impl embedded_hal::i2c::ErrorType for FakeI2c {
        type Error = FakeBusError;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [embedded_hal::i2c::Operation<'_>],
        ) -> Result<(), FakeBusError> {
            if self.fail {
                return Err(FakeBusError);
            }
            for op in operations {
                if let embedded_hal::i2c::Operation::Write(bytes) = op {
                    self.written.extend_from_slice(bytes);
                }
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn lcd() -> Lcd1602<FakeI2c, NoDelay> {
        let mut lcd = Lcd1602::new(FakeI2c::default(), NoDelay, DEFAULT_ADDR);
        lcd.init().unwrap();
        lcd.i2c.written.clear();
        lcd
    }

    /// Reassemble data bytes from the captured nibble stream
    fn data_bytes(written: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        // Each nibble is two bus writes (EN high, EN low); data writes
        // carry RS. Take the falling-edge write of each nibble pair.
        let nibbles: Vec<u8> = written
            .iter()
            .filter(|b| **b & EN == 0 && **b & RS != 0)
            .map(|b| b & 0xF0)
            .collect();
        for pair in nibbles.chunks(2) {
            if let [high, low] = pair {
                out.push(high | (low >> 4));
            }
        }
        out
    }

    #[test]
    fn test_message_padded_to_line_width() {
        let mut lcd = lcd();
        lcd.show_message(0, "Sustav aktivan").unwrap();
        let text = data_bytes(&lcd.i2c.written);
        assert_eq!(text.len(), COLS);
        assert_eq!(&text[..14], b"Sustav aktivan");
        assert_eq!(&text[14..], b"  ");
    }

    #[test]
    fn test_line_addressing() {
        let mut lcd = lcd();
        lcd.show_message(1, "x").unwrap();
        // First command write sets DDRAM to the second line
        let first = lcd.i2c.written[0];
        assert_eq!(first & 0xF0, (CMD_SET_DDRAM | LINE_OFFSETS[1]) & 0xF0);
        assert_eq!(first & RS, 0);
    }

    #[test]
    fn test_line_out_of_range() {
        let mut lcd = lcd();
        assert_eq!(lcd.show_message(2, "x"), Err(DisplayError::OutOfRange));
    }

    #[test]
    fn test_backlight_bit_follows_state() {
        let mut lcd = lcd();
        lcd.set_backlight(false).unwrap();
        assert_eq!(*lcd.i2c.written.last().unwrap() & BACKLIGHT, 0);

        lcd.i2c.written.clear();
        lcd.show_message(0, "a").unwrap();
        assert!(lcd.i2c.written.iter().all(|b| b & BACKLIGHT == 0));

        lcd.set_backlight(true).unwrap();
        assert_eq!(*lcd.i2c.written.last().unwrap() & BACKLIGHT, BACKLIGHT);
    }

    #[test]
    fn test_bus_failure_reported() {
        let mut lcd = lcd();
        lcd.i2c.fail = true;
        assert_eq!(lcd.clear(), Err(DisplayError::Bus));
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut lcd = lcd();
        lcd.apply(DisplayAction::Backlight(false)).unwrap();
        lcd.apply(DisplayAction::Show { line: 0, text: "ok" }).unwrap();
        lcd.apply(DisplayAction::Clear).unwrap();
        assert!(!lcd.i2c.written.is_empty());
    }
}
