//! Opaque mask side-channel
//!
//! Acquired frames often come with a segmentation mask computed by the
//! instrument software. Geometry and color operations never look inside
//! it; they only forward it from input to output.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque payload attached to a [`Matrix`](super::Matrix).
///
/// The payload is shared, so cloning a `Mask` (and therefore cloning a
/// matrix that carries one) never copies the underlying data. Two masks
/// compare equal only when they hold the very same payload.
///
/// # Examples
///
/// ```
/// use ifc_core::Mask;
///
/// let mask = Mask::new(vec![0u8, 1, 1, 0]);
/// let forwarded = mask.clone();
/// assert_eq!(mask, forwarded);
/// assert_eq!(forwarded.downcast_ref::<Vec<u8>>(), Some(&vec![0, 1, 1, 0]));
///
/// // Same content, different payload
/// assert_ne!(mask, Mask::new(vec![0u8, 1, 1, 0]));
/// ```
#[derive(Clone)]
pub struct Mask {
    payload: Arc<dyn Any + Send + Sync>,
}

impl Mask {
    /// Wrap an arbitrary value as a mask payload.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            payload: Arc::new(value),
        }
    }

    /// Borrow the payload as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Returns `true` if both masks share the same payload.
    #[inline]
    pub fn ptr_eq(&self, other: &Mask) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl PartialEq for Mask {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mask")
            .field("payload", &Arc::as_ptr(&self.payload))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_clone_is_identical() {
        let mask = Mask::new(42u32);
        let copy = mask.clone();
        assert!(mask.ptr_eq(&copy));
        assert_eq!(mask, copy);
    }

    #[test]
    fn test_mask_distinct_payloads_differ() {
        let a = Mask::new(1i32);
        let b = Mask::new(1i32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_mask_downcast() {
        let mask = Mask::new(String::from("cell"));
        assert_eq!(mask.downcast_ref::<String>().map(String::as_str), Some("cell"));
        assert!(mask.downcast_ref::<u8>().is_none());
    }
}
