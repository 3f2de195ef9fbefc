/// Pair of equally-sized buffers whose "current" and "previous" roles swap
/// every frame via a single flag.
///
/// Keeping two fixed halves and flipping an index - instead of mutating one
/// buffer in place - is what lets a frame read last frame's reservoirs while
/// writing this frame's, without the two racing on shared storage.
#[derive(Debug)]
pub struct DoubleBuffered<T> {
    a: T,
    b: T,
}

impl<T> DoubleBuffered<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Returns the half currently designated as "current".
    pub fn get(&self, alternate: bool) -> &T {
        if alternate {
            &self.b
        } else {
            &self.a
        }
    }

    /// Returns the current half mutably, together with the previous half;
    /// this is the only way both halves are ever accessed within a frame.
    pub fn curr_and_past(&mut self, alternate: bool) -> (&mut T, &T) {
        if alternate {
            (&mut self.b, &self.a)
        } else {
            (&mut self.a, &self.b)
        }
    }
}
