use std::rc::Rc;
use std::sync::Arc;

/// The view the traversal engine takes of an atom-like payload.
///
/// The engine never inspects chemistry. It only needs to know whether the bond leading
/// away from an atom may be treated as a free torsion. That decision combines two facts
/// owned by the chemistry layer: an activity index, which must be positive for the atom
/// to carry a torsion at all, and an eligibility flag that can switch rotation off.
pub trait RotationSite {
    /// Index of the torsion this atom drives; zero or negative means none.
    fn rotation_index(&self) -> i32;

    /// Whether rotation is currently enabled for this atom.
    fn is_rotation_active(&self) -> bool;

    /// Returns `true` when the atom starts a rotatable segment.
    fn is_rotatable(&self) -> bool {
        self.rotation_index() > 0 && self.is_rotation_active()
    }
}

impl<T: RotationSite + ?Sized> RotationSite for &T {
    fn rotation_index(&self) -> i32 {
        (**self).rotation_index()
    }

    fn is_rotation_active(&self) -> bool {
        (**self).is_rotation_active()
    }
}

impl<T: RotationSite + ?Sized> RotationSite for Box<T> {
    fn rotation_index(&self) -> i32 {
        (**self).rotation_index()
    }

    fn is_rotation_active(&self) -> bool {
        (**self).is_rotation_active()
    }
}

impl<T: RotationSite + ?Sized> RotationSite for Rc<T> {
    fn rotation_index(&self) -> i32 {
        (**self).rotation_index()
    }

    fn is_rotation_active(&self) -> bool {
        (**self).is_rotation_active()
    }
}

impl<T: RotationSite + ?Sized> RotationSite for Arc<T> {
    fn rotation_index(&self) -> i32 {
        (**self).rotation_index()
    }

    fn is_rotation_active(&self) -> bool {
        (**self).is_rotation_active()
    }
}

/// Minimal owned payload carrying just the two rotation facts.
///
/// Useful when the chemistry layer keeps its atoms elsewhere and only hands the engine a
/// snapshot of their rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationFlags {
    pub rotation_index: i32,
    pub rotation_active: bool,
}

impl RotationFlags {
    pub fn new(rotation_index: i32, rotation_active: bool) -> Self {
        Self {
            rotation_index,
            rotation_active,
        }
    }

    /// An atom driving torsion `rotation_index`, with rotation enabled.
    pub fn rotatable(rotation_index: i32) -> Self {
        Self::new(rotation_index, true)
    }

    /// An atom that drives no torsion.
    pub fn fixed() -> Self {
        Self::default()
    }
}

impl Default for RotationFlags {
    fn default() -> Self {
        Self {
            rotation_index: 0,
            rotation_active: true,
        }
    }
}

impl RotationSite for RotationFlags {
    fn rotation_index(&self) -> i32 {
        self.rotation_index
    }

    fn is_rotation_active(&self) -> bool {
        self.rotation_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotatable_requires_positive_index_and_active_flag() {
        assert!(RotationFlags::new(1, true).is_rotatable());
        assert!(!RotationFlags::new(0, true).is_rotatable());
        assert!(!RotationFlags::new(-3, true).is_rotatable());
        assert!(!RotationFlags::new(5, false).is_rotatable());
    }

    #[test]
    fn default_flags_are_active_but_not_rotatable() {
        let flags = RotationFlags::default();
        assert_eq!(flags.rotation_index, 0);
        assert!(flags.rotation_active);
        assert!(!flags.is_rotatable());
        assert_eq!(RotationFlags::fixed(), flags);
    }

    #[test]
    fn smart_pointer_payloads_delegate_to_the_pointee() {
        let flags = RotationFlags::rotatable(2);
        assert!((&flags).is_rotatable());
        assert!(Box::new(flags).is_rotatable());
        assert!(Rc::new(flags).is_rotatable());
        assert!(Arc::new(flags).is_rotatable());

        let boxed: Box<dyn RotationSite> = Box::new(RotationFlags::new(2, false));
        assert_eq!(boxed.rotation_index(), 2);
        assert!(!boxed.is_rotatable());
    }
}
