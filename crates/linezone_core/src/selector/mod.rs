//! Line selection: boundary state machine, inversion, blank filtering and
//! block packing.
//!
//! [`Selector::advance`] is fed every line of a source followed by one
//! `None` for end of source. It reports which units are ready to be written:
//! a flushed packed block (always selected) and the current line.

mod pack;
mod spec;
mod state;


pub use spec::{Boundary, SelectorSpec};
pub use state::SelectorState;

use crate::error::OverflowError;
use crate::text::is_blank;
use crate::zone::Unit;
use pack::Packer;

/// Units made ready by one call to [`Selector::advance`], in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advance {
    /// Exposed selection flag of the line (after inversion).
    pub selected: bool,
    /// A packed block closed by this line or by end of source.
    pub flushed: Option<Unit>,
    /// The line itself, unless it was packed or filtered out.
    pub current: Option<Unit>,
}

impl Advance {
    /// Ready units in the order they must be written.
    pub fn into_units(self) -> impl Iterator<Item = Unit> {
        self.flushed.into_iter().chain(self.current)
    }
}

#[derive(Debug, Clone)]
pub struct Selector {
    spec: SelectorSpec,
    state: SelectorState,
    packer: Packer,
}

impl Selector {
    /// `limit` bounds the size of a packed block in bytes.
    pub fn new(spec: SelectorSpec, limit: usize) -> Self {
        Self {
            spec,
            state: SelectorState::default(),
            packer: Packer::new(limit),
        }
    }

    pub fn spec(&self) -> &SelectorSpec {
        &self.spec
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Forget boundary state and any pending block.
    pub fn reset(&mut self) {
        self.state = SelectorState::default();
        self.packer.clear();
    }

    /// Feed the next line, or `None` at end of source.
    ///
    /// # Errors
    /// Returns [`OverflowError`] when a packed block outgrows the limit.
    pub fn advance(&mut self, line: Option<&str>) -> Result<Advance, OverflowError> {
        let raw = self.state.advance(line, &self.spec);
        let selected = raw ^ self.spec.invert;

        let Some(line) = line else {
            return Ok(Advance {
                selected: false,
                flushed: self.packer.flush(),
                current: None,
            });
        };

        let blank = self.spec.skip_blank && is_blank(line);
        tracing::trace!(
            line = self.state.total_count,
            selected,
            blank,
            in_boundary = self.state.in_boundary,
            shift = self.state.shift,
            "selector decision"
        );

        if !self.spec.pack {
            return Ok(Advance {
                selected,
                flushed: None,
                current: (!blank).then(|| Unit::new(line, selected)),
            });
        }

        if selected && !blank {
            self.packer.append(line)?;
            return Ok(Advance {
                selected,
                flushed: None,
                current: None,
            });
        }

        // Unselected and blank lines both end a run.
        Ok(Advance {
            selected,
            flushed: self.packer.flush(),
            current: (!blank).then(|| Unit::new(line, selected)),
        })
    }

    /// Whether a packed block is waiting for its run to end.
    pub fn has_pending(&self) -> bool {
        self.packer.is_pending()
    }
}
