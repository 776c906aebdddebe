//! Centered margin computation shared by crop and expand

/// Split of a size change between the leading and trailing edge.
///
/// `leading` is `delta / 2` (floor); `trailing` receives the remainder,
/// so for odd deltas the trailing edge gets one element more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    /// Top rows or left columns
    pub leading: u32,
    /// Bottom rows or right columns
    pub trailing: u32,
}

impl Margins {
    /// Margins for moving from `source` to `target` elements along one axis.
    ///
    /// Direction does not matter: the same split is used for removing
    /// (crop) and adding (expand) elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ifc_transform::Margins;
    ///
    /// let m = Margins::centered(10, 5);
    /// assert_eq!((m.leading, m.trailing), (2, 3));
    /// ```
    pub fn centered(source: u32, target: u32) -> Self {
        let delta = source.abs_diff(target);
        let leading = delta >> 1;
        Margins {
            leading,
            trailing: delta - leading,
        }
    }

    /// Total change along the axis.
    #[inline]
    pub fn total(&self) -> u32 {
        self.leading + self.trailing
    }

    /// Returns `true` if the axis is left unchanged.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}
