/// Photo slider state for a single room card
///
/// Each room owns one slider over its fixed, ordered photo list.
/// The current index always wraps modulo the list length, so there is
/// no "past the end" state to recover from.

/// Direction of an explicit prev/next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderDirection {
    Previous,
    Next,
}

/// State of one photo slider
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    /// Ordered photo locators, fixed for the lifetime of the slider
    images: Vec<String>,
    /// Index of the photo currently shown, in [0, images.len())
    current: usize,
}

impl SliderState {
    /// Create a slider over the given photos, starting at the first one
    pub fn new(images: Vec<String>) -> Self {
        Self { images, current: 0 }
    }

    /// Number of photos in the slider
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether prev/next and dot controls should be shown at all.
    /// With zero or one photo there is nothing to navigate.
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    /// Index of the photo currently shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The photo currently shown, or None for an empty slider
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Step one photo in the given direction, wrapping at both ends.
    /// No-op with zero or one photo.
    pub fn advance(&mut self, direction: SliderDirection) {
        if self.images.len() <= 1 {
            return;
        }

        self.current = match direction {
            SliderDirection::Next => (self.current + 1) % self.images.len(),
            SliderDirection::Previous => {
                if self.current == 0 {
                    self.images.len() - 1
                } else {
                    self.current - 1
                }
            }
        };
    }

    /// Jump directly to the photo at `index`.
    /// Callers only offer in-range indices (one dot per photo).
    pub fn select(&mut self, index: usize) {
        debug_assert!(index < self.images.len(), "slider index out of range");
        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(n: usize) -> SliderState {
        SliderState::new((0..n).map(|i| format!("photo-{}.jpg", i)).collect())
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut s = slider(3);
        s.select(2);
        s.advance(SliderDirection::Next);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut s = slider(4);
        s.advance(SliderDirection::Previous);
        assert_eq!(s.current_index(), 3);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut s = slider(5);
        s.select(2);
        for _ in 0..5 {
            s.advance(SliderDirection::Next);
        }
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn test_single_image_is_static() {
        let mut s = slider(1);
        assert!(!s.has_navigation());

        s.advance(SliderDirection::Next);
        assert_eq!(s.current_index(), 0);

        s.advance(SliderDirection::Previous);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_empty_slider_shows_nothing() {
        let mut s = slider(0);
        assert!(!s.has_navigation());
        assert_eq!(s.current_image(), None);

        // Advancing an empty slider must not panic
        s.advance(SliderDirection::Next);
        assert_eq!(s.current_image(), None);
    }

    #[test]
    fn test_select_shows_exact_image() {
        let mut s = slider(3);
        s.select(1);
        assert_eq!(s.current_image(), Some("photo-1.jpg"));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut s = slider(3);
        s.select(2);
        let before = s.clone();
        s.select(2);
        assert_eq!(s, before);
    }
}
