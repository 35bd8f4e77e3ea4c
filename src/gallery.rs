//! Circular image gallery of the room cards.

use serde::{Deserialize, Serialize};

/// Gallery state of one visitor.
///
/// The index is kept when the gallery closes, so reopening the same room
/// resumes at the last image; opening another room starts at the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryState {
    pub open: bool,
    pub room: Option<u32>,
    pub index: usize,
}

impl GalleryState {
    /// Open the gallery for a room with `len` images. An empty gallery is
    /// never opened.
    pub fn open(&mut self, room: u32, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        if self.room == Some(room) {
            self.index %= len;
        } else {
            self.room = Some(room);
            self.index = 0;
        }
        self.open = true;
        true
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Image shown for `images`, when open.
    pub fn current<'a>(&self, images: &[&'a str]) -> Option<&'a str> {
        if !self.open {
            return None;
        }
        images.get(self.index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGES: [&str; 3] = ["a.jpg", "b.jpg", "c.jpg"];

    #[test]
    fn test_next_wraps_to_first() {
        let mut gallery = GalleryState::default();
        assert!(gallery.open(0, IMAGES.len()));
        gallery.next(IMAGES.len());
        gallery.next(IMAGES.len());
        assert_eq!(gallery.current(&IMAGES), Some("c.jpg"));
        gallery.next(IMAGES.len());
        assert_eq!(gallery.index, 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut gallery = GalleryState::default();
        gallery.open(0, IMAGES.len());
        gallery.previous(IMAGES.len());
        assert_eq!(gallery.index, 2);
        assert_eq!(gallery.current(&IMAGES), Some("c.jpg"));
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut gallery = GalleryState::default();
        gallery.open(1, 1);
        gallery.next(1);
        gallery.previous(1);
        assert_eq!(gallery.index, 0);
    }

    #[test]
    fn test_empty_gallery_never_opens() {
        let mut gallery = GalleryState::default();
        assert!(!gallery.open(3, 0));
        assert!(!gallery.open);
        assert_eq!(gallery.current(&[]), None);
    }

    #[test]
    fn test_reopen_same_room_keeps_index() {
        let mut gallery = GalleryState::default();
        gallery.open(2, 2);
        gallery.next(2);
        gallery.close();
        assert_eq!(gallery.current(&IMAGES), None);

        gallery.open(2, 2);
        assert_eq!(gallery.index, 1);
    }

    #[test]
    fn test_open_other_room_starts_at_first() {
        let mut gallery = GalleryState::default();
        gallery.open(0, 3);
        gallery.next(3);
        gallery.open(1, 2);
        assert_eq!(gallery.room, Some(1));
        assert_eq!(gallery.index, 0);
    }
}
