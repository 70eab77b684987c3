//! Child numbers and derivation paths.

use crate::{Error, Result};
use alloc::vec::{self, Vec};
use core::{fmt, slice, str::FromStr};

/// Index of a particular child key for a given (extended) private key.
///
/// Values at or above `2^31` denote hardened children.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Hardened child keys use indices `2^31` through `2^32-1`.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Create a child number from an index below `2^31` and a hardened flag.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG != 0 {
            return Err(Error::BadPathSyntax);
        }

        Ok(Self(if hardened {
            index | Self::HARDENED_FLAG
        } else {
            index
        }))
    }

    /// Index without the hardened flag.
    pub fn index(self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    /// Is this a hardened child?
    pub fn is_hardened(self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }

    /// Big endian encoding used in derivation and serialization.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl fmt::Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            f.write_str("'")?;
        }

        Ok(())
    }
}

/// Accepts `'`, `h` or `H` as the hardened marker.
impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(segment: &str) -> Result<Self> {
        let (digits, hardened) = match segment.strip_suffix(['\'', 'h', 'H']) {
            Some(digits) => (digits, true),
            None => (segment, false),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::BadPathSyntax);
        }

        let index = digits.parse().map_err(|_| Error::BadPathSyntax)?;
        Self::new(index, hardened)
    }
}

/// Derivation path: a sequence of child numbers below the root `m`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DerivationPath(Vec<ChildNumber>);

impl DerivationPath {
    /// Iterate over the child numbers of this path.
    pub fn iter(&self) -> slice::Iter<'_, ChildNumber> {
        self.0.iter()
    }

    /// Number of derivation steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is this the root path `m`?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a child number.
    pub fn push(&mut self, child_number: ChildNumber) {
        self.0.push(child_number);
    }

    /// Child numbers of this path.
    pub fn as_slice(&self) -> &[ChildNumber] {
        &self.0
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        self.as_slice()
    }
}

impl From<Vec<ChildNumber>> for DerivationPath {
    fn from(path: Vec<ChildNumber>) -> Self {
        Self(path)
    }
}

impl FromIterator<ChildNumber> for DerivationPath {
    fn from_iter<I: IntoIterator<Item = ChildNumber>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for DerivationPath {
    type Item = ChildNumber;
    type IntoIter = vec::IntoIter<ChildNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildNumber;
    type IntoIter = slice::Iter<'a, ChildNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;

        for child_number in self.iter() {
            write!(f, "/{child_number}")?;
        }

        Ok(())
    }
}

/// Parses `m(/<index>['hH]?)*`; `"m"` alone is the empty path.
impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        let mut segments = path.split('/');

        if segments.next() != Some("m") {
            return Err(Error::BadPathSyntax);
        }

        segments.map(ChildNumber::from_str).collect()
    }
}
