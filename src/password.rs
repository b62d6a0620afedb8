use crate::errors::RequestError;
use crate::generators::{ generate_letter, generate_number, generate_special };

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{ debug, trace, warn };

pub const DEFAULT_LENGTH: i64 = 20;
pub const DEFAULT_MIN_NUMERIC: i64 = 1;
pub const DEFAULT_MAX_NUMERIC: i64 = 6;
pub const DEFAULT_MIN_SPECIAL: i64 = 1;
pub const DEFAULT_MAX_SPECIAL: i64 = 6;

/// Bounds as the user typed them. Nothing is checked until `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: i64,
    pub min_numeric: i64,
    pub max_numeric: i64,
    pub min_special: i64,
    pub max_special: i64,
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            min_numeric: DEFAULT_MIN_NUMERIC,
            max_numeric: DEFAULT_MAX_NUMERIC,
            min_special: DEFAULT_MIN_SPECIAL,
            max_special: DEFAULT_MAX_SPECIAL,
        }
    }
}

impl PasswordRequest {
    /// Applies the input rules in order; the first broken rule wins.
    pub fn validate(&self) -> Result<GenerationRequest, RequestError> {
        if self.length < 1 {
            return Err(RequestError::LengthTooShort);
        }

        let bounds = [self.min_numeric, self.max_numeric, self.min_special, self.max_special];
        if bounds.iter().any(|bound| *bound < 0) {
            return Err(RequestError::NegativeBound);
        }

        if self.min_numeric > self.max_numeric {
            return Err(RequestError::NumericBoundsInverted);
        }

        if self.min_special > self.max_special {
            return Err(RequestError::SpecialBoundsInverted);
        }

        if self.min_numeric.saturating_add(self.min_special) > self.length {
            return Err(RequestError::MinimumsExceedLength);
        }

        Ok(GenerationRequest {
            length: to_count(self.length)?,
            min_numeric: to_count(self.min_numeric)?,
            max_numeric: to_count(self.max_numeric)?,
            min_special: to_count(self.min_special)?,
            max_special: to_count(self.max_special)?,
        })
    }
}

fn to_count(value: i64) -> Result<usize, RequestError> {
    usize::try_from(value).map_err(|_| RequestError::TooLarge(value))
}

/// A request that passed validation. The composer trusts it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub min_numeric: usize,
    pub max_numeric: usize,
    pub min_special: usize,
    pub max_special: usize,
}

impl GenerationRequest {
    /// Scales both maxima down so their sum equals `length` when it would
    /// otherwise overshoot. Returns whether anything changed.
    ///
    /// A scaled maximum may end up below its minimum; the composer then just
    /// uses the minimum.
    pub fn fit_maxima(&mut self) -> bool {
        let total = self.max_numeric as u128 + self.max_special as u128;
        let length = self.length as u128;

        if total <= length {
            return false;
        }

        warn!(
            max_total = %total,
            length = self.length,
            "sum of maximum allowed characters exceeds password length, adjusting maximum values to fit"
        );

        let scaled = self.max_numeric as u128 * length / total;
        self.max_numeric = usize::try_from(scaled).unwrap_or(self.length);
        self.max_special = self.length - self.max_numeric;

        debug!(max_numeric = self.max_numeric, max_special = self.max_special, "adjusted maxima");

        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCounts {
    pub numeric: usize,
    pub special: usize,
    pub letters: usize,
}

pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Never print the password itself in debug output.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Password({} chars)", self.0.len())
    }
}

/// Builds one password: letters, then digits, then specials, shuffled together.
pub fn compose<R: Rng>(rng: &mut R, request: &GenerationRequest) -> Password {
    let counts = resolve_counts(rng, request);
    debug!(
        numeric = counts.numeric,
        special = counts.special,
        letters = counts.letters,
        "resolved character counts"
    );

    let mut chars: Vec<char> = Vec::with_capacity(request.length);
    chars.extend((0..counts.letters).map(|_| generate_letter(rng)));
    chars.extend((0..counts.numeric).map(|_| generate_number(rng)));
    chars.extend((0..counts.special).map(|_| generate_special(rng)));

    chars.shuffle(rng);

    Password(chars.into_iter().collect())
}

pub fn resolve_counts<R: Rng>(rng: &mut R, request: &GenerationRequest) -> ResolvedCounts {
    let numeric = draw_count(rng, request.min_numeric, request.max_numeric);
    let special = draw_count(rng, request.min_special, request.max_special);

    reconcile(numeric, special, request)
}

fn draw_count<R: Rng>(rng: &mut R, min: usize, max: usize) -> usize {
    if max > min {
        rng.random_range(min..=max)
    } else {
        min
    }
}

/// Trims drawn counts that together overshoot the length. Numeric gives up
/// characters first, down to its minimum; special absorbs whatever is left.
pub fn reconcile(mut numeric: usize, mut special: usize, request: &GenerationRequest) -> ResolvedCounts {
    let total = numeric.saturating_add(special);

    if total > request.length {
        let mut excess = total - request.length;

        let reduction = numeric.saturating_sub(request.min_numeric).min(excess);
        numeric -= reduction;
        excess -= reduction;

        let reduction = special.saturating_sub(request.min_special).min(excess);
        special -= reduction;
        excess -= reduction;

        if excess > 0 {
            trace!(excess, "counts still exceed length after reconciliation");
        }
    }

    ResolvedCounts {
        numeric,
        special,
        letters: request.length.saturating_sub(numeric + special),
    }
}
