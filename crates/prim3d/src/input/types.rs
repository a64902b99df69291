use core::ops::Index;

/// Keys the context tracks between frames.
///
/// The set is small on purpose: only inputs that tools built on top of the
/// context (manipulators, toggles) react to. The application maps its own
/// key codes onto these.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Key {
    MouseLeft,
    /// Local/world space toggle.
    L,
    /// Translate mode.
    T,
    /// Rotate mode.
    R,
    /// Scale mode.
    S,
}

impl Key {
    pub const COUNT: usize = 5;
    pub const ALL: [Key; Key::COUNT] = [Key::MouseLeft, Key::L, Key::T, Key::R, Key::S];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Fixed-size key-down table, indexed by [`Key`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct KeyTable([bool; Key::COUNT]);

impl KeyTable {
    #[inline]
    pub fn set(&mut self, key: Key, down: bool) {
        self.0[key.index()] = down;
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.0[key.index()]
    }

    /// Keys currently held, in [`Key::ALL`] order.
    pub fn iter_down(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|&k| self.is_down(k))
    }
}

impl Index<Key> for KeyTable {
    type Output = bool;

    #[inline]
    fn index(&self, key: Key) -> &bool {
        &self.0[key.index()]
    }
}
