use core::cmp::Ordering;

/// Stable sort key for primitives in the sorted pass.
///
/// Ordering rules:
/// 1) `distance_sq`: descending (farthest first, back-to-front)
/// 2) `order`: ascending (emission order for equal distance)
///
/// Distances compare with `f32::total_cmp`, so NaN keys still sort
/// deterministically instead of poisoning the sort.
#[derive(Debug, Copy, Clone)]
pub struct DepthKey {
    /// Squared distance from the view origin to the primitive centroid.
    pub distance_sq: f32,
    /// Index of the primitive within its buffer at emission time.
    pub order: u32,
}

impl DepthKey {
    #[inline]
    pub const fn new(distance_sq: f32, order: u32) -> Self {
        Self { distance_sq, order }
    }

    /// `true` if `self` must be drawn before `other`.
    #[inline]
    pub fn is_behind(&self, other: &DepthKey) -> bool {
        self.distance_sq.total_cmp(&other.distance_sq) == Ordering::Greater
    }
}

impl Ord for DepthKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match other.distance_sq.total_cmp(&self.distance_sq) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for DepthKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DepthKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DepthKey {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farther_sorts_first() {
        let mut keys = vec![DepthKey::new(1.0, 0), DepthKey::new(9.0, 1), DepthKey::new(4.0, 2)];
        keys.sort_unstable();
        let order: Vec<u32> = keys.iter().map(|k| k.order).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_keep_emission_order() {
        let mut keys = vec![DepthKey::new(2.0, 3), DepthKey::new(2.0, 1), DepthKey::new(2.0, 2)];
        keys.sort_unstable();
        let order: Vec<u32> = keys.iter().map(|k| k.order).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn is_behind_is_strict() {
        assert!(DepthKey::new(5.0, 0).is_behind(&DepthKey::new(4.0, 1)));
        assert!(!DepthKey::new(4.0, 0).is_behind(&DepthKey::new(4.0, 1)));
    }
}
