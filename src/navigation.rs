/// Current question index within `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: usize,
}

impl Navigator {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves to `index`. Out-of-range requests are ignored. Returns the
    /// previous index when the position changed.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len || index == self.current {
            return None;
        }
        let from = self.current;
        self.current = index;
        Some(from)
    }

    pub fn step(&mut self, delta: isize) -> Option<usize> {
        let target = self.current.checked_add_signed(delta)?;
        self.go_to(target)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.len
    }

    pub fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }
}
