use core::num::NonZeroU32;

/// Identifies a node slot in an [`Arena`](super::arena::Arena).
///
/// Slot `i` is stored as `i + 1` so that `Option<Handle>` costs no more than
/// the handle itself. Child links are `Option<Handle>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZeroU32);

impl Handle {
    /// The largest slot index a handle can name.
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    pub(crate) fn from_slot(slot: usize) -> Self {
        let raw = slot.checked_add(1).and_then(|raw| u32::try_from(raw).ok()).and_then(NonZeroU32::new);
        match raw {
            Some(raw) => Self(raw),
            None => panic!("`Handle::from_slot()` - `slot` > `Handle::MAX`!"),
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
