//! Accumulation of contiguous selected lines into one block.

use crate::constants::PACK_SEPARATOR;
use crate::error::OverflowError;
use crate::zone::Unit;

#[derive(Debug, Clone)]
pub(crate) struct Packer {
    pending: Option<String>,
    limit: usize,
}

impl Packer {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            pending: None,
            limit,
        }
    }

    /// Add a line to the pending block.
    pub(crate) fn append(&mut self, line: &str) -> Result<(), OverflowError> {
        let current = self.pending.as_ref().map_or(0, |block| block.len() + 1);
        let needed = current + line.len();
        if needed > self.limit {
            return Err(OverflowError {
                needed,
                limit: self.limit,
            });
        }
        match &mut self.pending {
            Some(block) => {
                block.push(PACK_SEPARATOR);
                block.push_str(line);
            }
            None => self.pending = Some(line.to_string()),
        }
        Ok(())
    }

    /// Hand out the pending block as a selected unit, if there is one.
    pub(crate) fn flush(&mut self) -> Option<Unit> {
        self.pending.take().map(|block| Unit::new(block, true))
    }

    pub(crate) fn clear(&mut self) {
        self.pending = None;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
