//! In-memory I2C bus for the driver tests

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

impl embedded_hal::i2c::Error for BusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Records every write as (address, bytes)
#[derive(Default)]
pub struct FakeI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Reject every transaction
    pub fail: bool,
}

impl FakeI2c {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorType for FakeI2c {
    type Error = BusError;
}

impl I2c for FakeI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(BusError);
        }
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}
