//! Owned vs mirrored widget values.

/// Where a widget's value lives.
///
/// An `Owned` widget keeps its value internally and updates it on every user
/// edit. A `Mirrored` widget displays a value supplied by its owner: edits are
/// reported through the widget's change callback, but the displayed value
/// only moves when the owner calls [`ValueSource::sync`]. The variant is fixed
/// when the widget is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource<T> {
    Owned(T),
    Mirrored(T),
}

impl<T> ValueSource<T> {
    /// The value currently displayed.
    pub fn current(&self) -> &T {
        match self {
            ValueSource::Owned(value) | ValueSource::Mirrored(value) => value,
        }
    }

    pub fn is_mirrored(&self) -> bool {
        matches!(self, ValueSource::Mirrored(_))
    }

    /// Apply a value proposed by a user edit.
    ///
    /// Returns true when the displayed value changed, which only happens for
    /// `Owned`.
    pub fn propose(&mut self, value: T) -> bool
    where
        T: PartialEq,
    {
        match self {
            ValueSource::Owned(current) => {
                if *current == value {
                    false
                } else {
                    *current = value;
                    true
                }
            }
            ValueSource::Mirrored(_) => false,
        }
    }

    /// Push the owner's value into a `Mirrored` source.
    ///
    /// Returns false (and leaves the value alone) for `Owned`.
    pub fn sync(&mut self, value: T) -> bool {
        match self {
            ValueSource::Mirrored(current) => {
                *current = value;
                true
            }
            ValueSource::Owned(_) => {
                log::warn!("sync() called on an owned value; ignored");
                false
            }
        }
    }
}

impl<T: Default> Default for ValueSource<T> {
    fn default() -> Self {
        ValueSource::Owned(T::default())
    }
}
