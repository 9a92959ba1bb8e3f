//! FT6336U capacitive touch controller driver (async I2C).
//!
//! Polls the touch-point registers and synthesizes the press/drag/release
//! event stream consumed by the screen manager. Only the registers this
//! product reads are kept: touch count, point 1 coordinates, and the chip
//! id for the boot-time probe.

use embedded_hal_async::i2c::I2c;
use log::debug;

use velo_core::ui::{TouchEvent, TouchPhase, TouchPoint};

/// FT6336U I2C address
pub const I2C_ADDR: u8 = 0x38;

/// Expected CHIP_ID register value for the FT6336U
pub const CHIP_ID: u8 = 0x64;

// Register addresses
const ADDR_TD_STATUS: u8 = 0x02;
const ADDR_TOUCH1_X: u8 = 0x03;
const ADDR_TOUCH1_Y: u8 = 0x05;
const ADDR_CHIP_ID: u8 = 0xA3;

/// Errors that can occur during FT6336U operations
#[derive(Debug)]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
    /// Unexpected chip id during the probe
    WrongChip(u8),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Self::I2c(e)
    }
}

/// FT6336U driver with edge synthesis.
///
/// The controller reports instantaneous touch state; this driver remembers
/// whether a finger was down on the previous poll and emits `Press` on the
/// down edge, `Drag` while held, and `Release` (at the last known point)
/// on the up edge.
pub struct Ft6336u<I2C> {
    i2c: I2C,
    down: bool,
    last_point: TouchPoint,
}

impl<I2C> Ft6336u<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            down: false,
            last_point: TouchPoint::new(0, 0),
        }
    }

    async fn read_byte(&mut self, addr: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(I2C_ADDR, &[addr], &mut buf).await?;
        Ok(buf[0])
    }

    /// Read a 12-bit coordinate register pair.
    async fn read_coord(&mut self, addr: u8) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(I2C_ADDR, &[addr], &mut buf).await?;
        Ok((((buf[0] & 0x0F) as u16) << 8) | (buf[1] as u16))
    }

    /// Verify the chip id responds and matches the FT6336U.
    pub async fn probe(&mut self) -> Result<(), Error<I2C::Error>> {
        let id = self.read_byte(ADDR_CHIP_ID).await?;
        if id != CHIP_ID {
            return Err(Error::WrongChip(id));
        }
        Ok(())
    }

    /// Number of active touch points (0-2).
    async fn touch_count(&mut self) -> Result<u8, Error<I2C::Error>> {
        let val = self.read_byte(ADDR_TD_STATUS).await?;
        Ok(val & 0x0F)
    }

    /// Poll the controller once.
    ///
    /// Returns at most one event per poll. Additional fingers beyond the
    /// first are ignored (single-touch product).
    pub async fn poll(&mut self, now_ms: u64) -> Result<Option<TouchEvent>, Error<I2C::Error>> {
        let count = self.touch_count().await?;

        if count == 0 {
            if self.down {
                self.down = false;
                debug!("touch: release at {:?}", self.last_point);
                return Ok(Some(TouchEvent::new(
                    TouchPhase::Release,
                    self.last_point,
                    now_ms,
                )));
            }
            return Ok(None);
        }

        let x = self.read_coord(ADDR_TOUCH1_X).await?;
        let y = self.read_coord(ADDR_TOUCH1_Y).await?;
        self.last_point = TouchPoint::new(x, y);

        let phase = if self.down {
            TouchPhase::Drag
        } else {
            self.down = true;
            debug!("touch: press at {:?}", self.last_point);
            TouchPhase::Press
        };

        Ok(Some(TouchEvent::new(phase, self.last_point, now_ms)))
    }
}
