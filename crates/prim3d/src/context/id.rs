/// Hierarchical identifier for per-frame widgets.
///
/// Ids are 32-bit FNV-1a hashes seeded with the id scope active at the time
/// they are made, so the same name under different scopes yields different ids.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Id(pub u32);

const FNV1A_PRIME: u32 = 0x0100_0193;

impl Id {
    pub const INVALID: Id = Id(0);

    /// FNV-1a offset basis; the root scope of every context.
    pub const ROOT: Id = Id(0x811C_9DC5);

    /// Hashes the UTF-8 bytes of `name` into the scope `self`.
    pub fn child(self, name: &str) -> Id {
        let mut h = self.0;
        for b in name.bytes() {
            h ^= b as u32;
            h = h.wrapping_mul(FNV1A_PRIME);
        }
        Id(h)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Id::INVALID
    }
}
