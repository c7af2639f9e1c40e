//! Hero Rotation
//!
//! The home hero cycles through the channels on a timer until the user picks
//! one; after that it stays where the user put it.

use crate::error::{ContentError, ContentResult};

pub const DEFAULT_ROTATION_MS: u32 = 6000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRotation {
    len: usize,
    active: usize,
    autoplay: bool,
}

impl HeroRotation {
    pub fn new(len: usize) -> ContentResult<Self> {
        if len == 0 {
            return Err(ContentError::invalid("len", "hero needs at least one slide"));
        }
        Ok(Self {
            len,
            active: 0,
            autoplay: true,
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    /// Timer tick: move to the next slide, wrapping around
    pub fn advance(&mut self) {
        if self.autoplay {
            self.active = (self.active + 1) % self.len;
        }
    }

    /// Manual selection. Stops autoplay for good.
    pub fn select(&mut self, index: usize) {
        if index >= self.len {
            log::warn!("hero select out of range: {} (len {})", index, self.len);
            return;
        }
        self.active = index;
        self.autoplay = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut hero = HeroRotation::new(3).unwrap();
        hero.advance();
        hero.advance();
        assert_eq!(hero.active(), 2);
        hero.advance();
        assert_eq!(hero.active(), 0);
    }

    #[test]
    fn test_select_pauses_autoplay() {
        let mut hero = HeroRotation::new(3).unwrap();
        hero.select(1);
        assert!(!hero.is_autoplaying());
        hero.advance();
        assert_eq!(hero.active(), 1);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut hero = HeroRotation::new(2).unwrap();
        hero.select(5);
        assert_eq!(hero.active(), 0);
        assert!(hero.is_autoplaying());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(HeroRotation::new(0).is_err());
    }
}
