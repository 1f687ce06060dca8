/// Wrapping index over a fixed-length list of items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.current()
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.current()
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.index = index;
        }
        self.current()
    }

    /// Keeps the position unless it falls off the new end.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut c = Carousel::new(3);
        assert_eq!(c.current(), Some(0));
        assert_eq!(c.prev(), Some(2));
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.next(), Some(1));
        assert_eq!(c.next(), Some(2));
        assert_eq!(c.next(), Some(0));
    }

    #[test]
    fn empty_has_no_current() {
        let mut c = Carousel::new(0);
        assert_eq!(c.current(), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut c = Carousel::new(4);
        assert_eq!(c.select(2), Some(2));
        assert_eq!(c.select(9), Some(2));
    }

    #[test]
    fn resize_resets_when_index_falls_off() {
        let mut c = Carousel::new(5);
        c.select(4);
        c.resize(3);
        assert_eq!(c.current(), Some(0));
        c.select(1);
        c.resize(6);
        assert_eq!(c.current(), Some(1));
    }
}
