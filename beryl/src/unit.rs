use std::{fmt, ops::Deref};

use crate::norm::Normed;

/// Wrapper guaranteeing its value was normalized on construction.
#[repr(transparent)]
pub struct Unit<T> {
    value: T,
}

impl<T: Normed> Unit<T> {
    pub fn new_normalize(mut value: T) -> Self {
        value.normalize_mut();
        Self { value }
    }
}

impl<T> Unit<T> {
    /// The caller asserts that `value` already has unit length.
    pub fn new_unchecked(value: T) -> Self {
        Self { value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Unit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unit").field(&self.value).finish()
    }
}

impl<T: Clone> Clone for Unit<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T: Copy> Copy for Unit<T> {}

impl<T> Deref for Unit<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> AsRef<T> for Unit<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec3;

    #[test]
    fn unit_normalizes() {
        let unit = Unit::new_normalize(Vec3::new(0.0, 3.0, 4.0));
        assert!((unit.norm() - 1.0).abs() < 1e-6);
        assert!((unit.y - 0.6).abs() < 1e-6);
        assert!((unit.z - 0.8).abs() < 1e-6);
    }
}
