//! Selector descriptor and token classification.

use crate::constants::MAX_SELECTOR_BOUNDARIES;
use crate::error::{ConfigError, LineZoneError};
use crate::pattern::{Pattern, PatternCache};

/// One end of a selection run.
#[derive(Debug, Clone, Default)]
pub enum Boundary {
    #[default]
    None,
    /// 1-based line number within the current source (start), or number of
    /// selected lines after which the run ends (stop).
    Count(i64),
    Pattern(Pattern),
}

impl Boundary {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }
}

/// Start/stop boundaries plus the per-line selection options.
#[derive(Debug, Clone, Default)]
pub struct SelectorSpec {
    pub start: Boundary,
    pub stop: Boundary,
    /// Lines to skip after a pattern start matches (`+n`).
    pub shift: Option<usize>,
    pub invert: bool,
    pub pack: bool,
    pub skip_blank: bool,
}

impl SelectorSpec {
    /// Classify selector tokens into start, stop and shift.
    ///
    /// `+digits` anywhere after a pattern start is the shift; a later shift
    /// token replaces an earlier one. Any other token that parses as an
    /// integer is a count boundary; everything else is a pattern. The first
    /// boundary is the start, the second the stop.
    ///
    /// # Errors
    /// - [`ConfigError::TooManySelectors`] for a third boundary token.
    /// - [`LineZoneError::Pattern`] when a pattern token fails to compile.
    pub fn from_tokens<S: AsRef<str>>(
        tokens: &[S],
        patterns: &mut PatternCache,
    ) -> Result<Self, LineZoneError> {
        let mut spec = Self::default();
        let mut boundaries = 0usize;
        for token in tokens {
            let token = token.as_ref();
            if spec.start.is_pattern() {
                if let Some(shift) = parse_shift(token) {
                    if let Some(previous) = spec.shift.replace(shift) {
                        tracing::debug!(previous, shift, "selector shift replaced");
                    }
                    continue;
                }
            }

            let boundary = match token.parse::<i64>() {
                Ok(count) => Boundary::Count(count),
                Err(_) => Boundary::Pattern(patterns.compile(token)?),
            };
            match boundaries {
                0 => spec.start = boundary,
                1 => spec.stop = boundary,
                _ => {
                    return Err(ConfigError::TooManySelectors {
                        token: token.to_string(),
                        max: MAX_SELECTOR_BOUNDARIES,
                    }
                    .into())
                }
            }
            boundaries += 1;
        }
        tracing::debug!(
            start = ?spec.start,
            stop = ?spec.stop,
            shift = ?spec.shift,
            "configured selector"
        );
        Ok(spec)
    }

    pub fn with_options(mut self, invert: bool, pack: bool, skip_blank: bool) -> Self {
        self.invert = invert;
        self.pack = pack;
        self.skip_blank = skip_blank;
        self
    }

    /// A stop of `None` after a shifted pattern start ends the run after one
    /// line.
    pub(crate) fn auto_stops(&self) -> bool {
        self.stop.is_none() && self.start.is_pattern() && self.shift.is_some()
    }
}

fn parse_shift(token: &str) -> Option<usize> {
    let digits = token.strip_prefix('+')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
