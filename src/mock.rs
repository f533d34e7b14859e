//! Recording display interface and delay for tests

use std::vec::Vec;

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::delay::DelayNs;

/// One call made on the interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transfer {
    Commands(Vec<u8>),
    Data(Vec<u8>),
}

/// Records every transfer, optionally failing once `fail_after` transfers went through
#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    pub transfers: Vec<Transfer>,
    fail_after: Option<usize>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(transfers: usize) -> Self {
        Self {
            transfers: Vec::new(),
            fail_after: Some(transfers),
        }
    }

    /// All command bytes in the order they were sent
    pub fn commands(&self) -> Vec<u8> {
        self.transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Commands(bytes) => Some(bytes.as_slice()),
                Transfer::Data(_) => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Payload of every data transfer
    pub fn data(&self) -> Vec<Vec<u8>> {
        self.transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Data(bytes) => Some(bytes.clone()),
                Transfer::Commands(_) => None,
            })
            .collect()
    }

    /// Length of every data transfer
    pub fn data_transfers(&self) -> Vec<usize> {
        self.data().iter().map(Vec::len).collect()
    }

    fn record(&mut self, transfer: Transfer) -> Result<(), DisplayError> {
        if self.fail_after == Some(self.transfers.len()) {
            return Err(DisplayError::BusWriteError);
        }
        self.transfers.push(transfer);
        Ok(())
    }
}

fn collect(format: DataFormat<'_>) -> Result<Vec<u8>, DisplayError> {
    match format {
        DataFormat::U8(bytes) => Ok(bytes.to_vec()),
        DataFormat::U8Iter(iter) => Ok(iter.collect()),
        _ => Err(DisplayError::DataFormatNotImplemented),
    }
}

impl WriteOnlyDataCommand for MockInterface {
    fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        let bytes = collect(cmd)?;
        self.record(Transfer::Commands(bytes))
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        let bytes = collect(buf)?;
        self.record(Transfer::Data(bytes))
    }
}

/// Delay that returns immediately and remembers the requested waits
#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}
