use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;

/// Extension resource attached to a style.
///
/// Engines are chosen by the concrete type of the attached resource, so every
/// implementation must return `self` from [`Resource::as_any`].
pub trait Resource: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// Concrete type of the resource behind a trait object.
    fn resource_type(&self) -> TypeId {
        self.as_any().type_id()
    }
}

/// Selects and configures a layout engine.
pub trait LayoutResource: Resource {}

/// Selects and configures a visual engine.
pub trait VisualResource: Resource {}

/// Selects and configures an input engine. Input handling lives in the host.
pub trait InputResource: Resource {}

pub type LayoutHandle = Rc<dyn LayoutResource>;
pub type VisualHandle = Rc<dyn VisualResource>;
pub type InputHandle = Rc<dyn InputResource>;

/// Identity comparison for optional resource handles.
pub(crate) fn same_handle<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Plain block layout, registered as the default engine's own resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockLayout;

impl Resource for BlockLayout {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl LayoutResource for BlockLayout {}

#[cfg(test)]
mod tests {
    use super::{BlockLayout, LayoutHandle, same_handle};
    use std::any::TypeId;
    use std::rc::Rc;

    #[test]
    fn resource_type_sees_through_trait_objects() {
        let handle: LayoutHandle = Rc::new(BlockLayout);
        assert_eq!(handle.resource_type(), TypeId::of::<BlockLayout>());
    }

    #[test]
    fn handles_compare_by_identity() {
        let a: Option<LayoutHandle> = Some(Rc::new(BlockLayout));
        let b: Option<LayoutHandle> = Some(Rc::new(BlockLayout));
        assert!(same_handle(&a, &a.clone()));
        assert!(!same_handle(&a, &b));
        assert!(same_handle::<BlockLayout>(&None, &None));
    }
}
