use prim3d_math::{Color, Mat4};

use super::{Context, Id};

/// Attribute stacks.
///
/// Every stack starts with one default entry (identity, white, alpha 1,
/// size 1, root id). `pop_*` on the default entry panics.
impl Context {
    // ── matrix ────────────────────────────────────────────────────────────

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.matrices.top()
    }

    #[inline]
    pub fn set_matrix(&mut self, m: Mat4) {
        self.matrices.set_top(m);
    }

    /// Post-multiplies the top: `top = top * m`.
    #[inline]
    pub fn mul_matrix(&mut self, m: Mat4) {
        let top = self.matrices.top();
        self.matrices.set_top(top * m);
    }

    #[inline]
    pub fn push_matrix(&mut self, m: Mat4) {
        self.matrices.push(m);
    }

    /// Pushes a copy of the current matrix.
    #[inline]
    pub fn push_matrix_copy(&mut self) {
        self.matrices.push_top();
    }

    #[inline]
    pub fn pop_matrix(&mut self) {
        self.matrices.pop();
    }

    // ── color ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn color(&self) -> Color {
        self.colors.top()
    }

    #[inline]
    pub fn set_color(&mut self, c: Color) {
        self.colors.set_top(c);
    }

    #[inline]
    pub fn push_color(&mut self, c: Color) {
        self.colors.push(c);
    }

    #[inline]
    pub fn pop_color(&mut self) {
        self.colors.pop();
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alphas.top()
    }

    #[inline]
    pub fn set_alpha(&mut self, a: f32) {
        self.alphas.set_top(a);
    }

    #[inline]
    pub fn push_alpha(&mut self, a: f32) {
        self.alphas.push(a);
    }

    #[inline]
    pub fn pop_alpha(&mut self) {
        self.alphas.pop();
    }

    // ── size ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> f32 {
        self.sizes.top()
    }

    #[inline]
    pub fn set_size(&mut self, s: f32) {
        self.sizes.set_top(s);
    }

    #[inline]
    pub fn push_size(&mut self, s: f32) {
        self.sizes.push(s);
    }

    #[inline]
    pub fn pop_size(&mut self) {
        self.sizes.pop();
    }

    // ── id ────────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> Id {
        self.ids.top()
    }

    #[inline]
    pub fn push_id(&mut self, id: Id) {
        self.ids.push(id);
    }

    /// Opens a named id scope nested in the current one.
    #[inline]
    pub fn push_id_str(&mut self, name: &str) {
        let id = self.make_id(name);
        self.ids.push(id);
    }

    #[inline]
    pub fn pop_id(&mut self) {
        self.ids.pop();
    }

    /// Id for `name` in the current id scope.
    #[inline]
    pub fn make_id(&self, name: &str) -> Id {
        self.ids.top().child(name)
    }

    /// `true` when every attribute stack is back to its default entry.
    pub fn is_balanced(&self) -> bool {
        self.unbalanced_stacks().next().is_none()
    }

    /// Names of the stacks holding more than their default entry.
    pub fn unbalanced_stacks(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.matrices.name(), self.matrices.is_balanced()),
            (self.colors.name(), self.colors.is_balanced()),
            (self.alphas.name(), self.alphas.is_balanced()),
            (self.sizes.name(), self.sizes.is_balanced()),
            (self.ids.name(), self.ids.is_balanced()),
        ]
        .into_iter()
        .filter_map(|(name, balanced)| (!balanced).then_some(name))
    }
}
