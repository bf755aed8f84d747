//! Carousel index over a hotel's images.

/// Current position in a list of `len` images; prev/next wrap around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arrows only make sense with more than one image.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = if self.index + 1 >= self.len { 0 } else { self.index + 1 };
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        }
    }

    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a String> {
        images.get(self.index)
    }
}
