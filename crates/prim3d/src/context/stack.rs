/// Push/pop stack of per-scope vertex state.
///
/// Invariant: never empty. The bottom entry is the default installed at
/// construction and cannot be popped.
#[derive(Debug, Clone)]
pub struct AttributeStack<T> {
    name: &'static str,
    entries: Vec<T>,
}

impl<T: Copy> AttributeStack<T> {
    pub fn new(name: &'static str, default: T) -> Self {
        Self { name, entries: vec![default] }
    }

    #[inline]
    pub fn top(&self) -> T {
        // Non-empty by construction.
        self.entries[self.entries.len() - 1]
    }

    #[inline]
    pub fn set_top(&mut self, value: T) {
        let last = self.entries.len() - 1;
        self.entries[last] = value;
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.entries.push(value);
    }

    /// Pushes a copy of the current top.
    #[inline]
    pub fn push_top(&mut self) {
        self.entries.push(self.top());
    }

    /// # Panics
    /// Panics if only the default entry remains.
    #[inline]
    pub fn pop(&mut self) {
        assert!(self.entries.len() > 1, "pop_{}() without matching push_{}()", self.name, self.name);
        self.entries.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// `true` when every push has been matched by a pop.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.entries.len() == 1
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}
