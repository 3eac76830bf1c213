//! Comic number validation.

/// A validated, strictly positive comic number.
///
/// # Examples
///
/// ```
/// use stripbot_core::ComicNumber;
///
/// let number = ComicNumber::parse("353").unwrap();
/// assert_eq!(number.get(), 353);
///
/// assert!(ComicNumber::parse("0").is_err());
/// assert!(ComicNumber::parse("").is_err());
/// assert!(ComicNumber::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct ComicNumber(u32);

/// Rejection marker for a comic number that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("not a valid comic number")]
pub struct InvalidComicNumber;

impl ComicNumber {
    /// Validate a raw string as a strictly positive comic number.
    ///
    /// Empty strings, non-digit strings, zero, and values that overflow a
    /// `u32` are all invalid. There is no upper bound check; a nonexistent
    /// id simply comes back absent from the lookup stage.
    pub fn parse(raw: &str) -> Result<Self, InvalidComicNumber> {
        // std integer parsing tolerates a leading '+', so screen for
        // digits explicitly before converting.
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidComicNumber);
        }
        let number: u32 = raw.parse().map_err(|_| InvalidComicNumber)?;
        if number == 0 {
            return Err(InvalidComicNumber);
        }
        Ok(Self(number))
    }

    /// The validated number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::str::FromStr for ComicNumber {
    type Err = InvalidComicNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
