//! Codepoint assignment: `BASE_CODEPOINT + ordinal`, no gaps, no reuse.

use crate::{
    config::{BASE_CODEPOINT, MAX_ICONS},
    error::{Error, Result},
};

/// Codepoint for the icon at `ordinal`, `None` past the private use area.
pub const fn codepoint(ordinal: usize) -> Option<u32> {
    if ordinal < MAX_ICONS { Some(BASE_CODEPOINT + ordinal as u32) } else { None }
}

/// Codepoints for a run of `len` icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointTable {
    len: usize,
}

impl CodepointTable {
    /// Fails with [`Error::TooManyIcons`] when the last codepoint would leave
    /// the private use area.
    pub fn new(len: usize) -> Result<Self> {
        if len > MAX_ICONS {
            return Err(Error::TooManyIcons { count: len, max: MAX_ICONS });
        }
        Ok(Self { len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn start(&self) -> u32 {
        BASE_CODEPOINT
    }

    pub fn get(&self, ordinal: usize) -> Option<u32> {
        if ordinal < self.len { codepoint(ordinal) } else { None }
    }

    /// `(ordinal, codepoint)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> {
        (0..self.len).filter_map(|ordinal| Some((ordinal, codepoint(ordinal)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PRIVATE_USE_AREA_END;

    #[test]
    fn test_codepoints_start_at_base() {
        let table = CodepointTable::new(3).unwrap();
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, [(0, 0xE900), (1, 0xE901), (2, 0xE902)]);
        assert_eq!(table.get(2), Some(0xE902));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn test_full_private_use_area_fits() {
        let table = CodepointTable::new(MAX_ICONS).unwrap();
        assert_eq!(table.get(MAX_ICONS - 1), Some(PRIVATE_USE_AREA_END));
    }

    #[test]
    fn test_codepoint_stops_at_private_use_area_end() {
        assert_eq!(codepoint(0), Some(BASE_CODEPOINT));
        assert_eq!(codepoint(MAX_ICONS - 1), Some(PRIVATE_USE_AREA_END));
        assert_eq!(codepoint(MAX_ICONS), None);
        assert_eq!(codepoint(usize::MAX), None);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let err = CodepointTable::new(MAX_ICONS + 1).unwrap_err();
        assert!(matches!(err, Error::TooManyIcons { count, max } if count == MAX_ICONS + 1 && max == 4096));
    }
}
