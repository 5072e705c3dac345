//! Fixed-length character sequences.
//!
//! Lengths are part of the type (`FixedText<N>`) and checked when a value
//! is built from a string, so a payload or security code of the wrong
//! length cannot exist.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

use crate::error::{RegistryError, Result};

/// Number of characters in a message payload.
pub const PAYLOAD_LEN: usize = 12;

/// Number of characters in a security code.
pub const SECURITY_CODE_LEN: usize = 2;

/// Exactly `N` characters, stored as Unicode code points.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedText<const N: usize>([u32; N]);

impl<const N: usize> FixedText<N> {
    /// Build from a string that must contain exactly `N` characters.
    pub fn new(text: &str) -> Result<Self> {
        let actual = text.chars().count();
        if actual != N {
            return Err(RegistryError::InvalidTextLength {
                expected: N,
                actual,
            });
        }
        let mut points = [0u32; N];
        for (slot, ch) in points.iter_mut().zip(text.chars()) {
            *slot = u32::from(ch);
        }
        Ok(Self(points))
    }

    /// Build from a slice that must contain exactly `N` characters.
    pub fn from_chars(chars: &[char]) -> Result<Self> {
        if chars.len() != N {
            return Err(RegistryError::InvalidTextLength {
                expected: N,
                actual: chars.len(),
            });
        }
        let mut points = [0u32; N];
        for (slot, ch) in points.iter_mut().zip(chars) {
            *slot = u32::from(*ch);
        }
        Ok(Self(points))
    }

    /// The code points, in order. These are the symbols fed to the hasher.
    pub fn code_points(&self) -> &[u32; N] {
        &self.0
    }

    /// Iterate over the characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().filter_map(|&p| char::from_u32(p))
    }

    /// Fixed length of this text type.
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for the degenerate `FixedText<0>`.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Zeroize for FixedText<N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<const N: usize> std::fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl<const N: usize> std::fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FixedText<{N}>({:?})", self.to_string())
    }
}

impl<const N: usize> Serialize for FixedText<N> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedText<N> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(d)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}

/// Message payload.
pub type Payload = FixedText<PAYLOAD_LEN>;

/// An agent's secret security code.
///
/// Zeroized on drop. `Debug` never prints the characters.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityCode(FixedText<SECURITY_CODE_LEN>);

impl SecurityCode {
    /// Build from a string of exactly `SECURITY_CODE_LEN` characters.
    pub fn new(code: &str) -> Result<Self> {
        FixedText::new(code).map(Self)
    }

    /// Build from exactly `SECURITY_CODE_LEN` characters.
    pub fn from_chars(chars: &[char]) -> Result<Self> {
        FixedText::from_chars(chars).map(Self)
    }

    /// The code points fed to the hasher.
    pub fn code_points(&self) -> &[u32; SECURITY_CODE_LEN] {
        self.0.code_points()
    }
}

impl Zeroize for SecurityCode {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for SecurityCode {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl std::fmt::Debug for SecurityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecurityCode(<redacted>)")
    }
}
