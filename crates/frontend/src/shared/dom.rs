//! Scoped document-level event listeners.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Where listener registrations land. Split out from the DOM so the
/// acquire/release pairing can be exercised without a browser.
pub(crate) trait ListenerRegistry {
    /// Register for `event`. Returns `false` when registration failed.
    fn add(&self, event: &'static str) -> bool;
    fn remove(&self, event: &'static str);
}

/// RAII pairing of one registration with one deregistration.
///
/// `acquire` registers exactly once; dropping the scope removes exactly that
/// registration. A failed `add` produces no scope, so nothing is left behind
/// on any exit path.
pub(crate) struct ListenerScope<R: ListenerRegistry> {
    registry: R,
    event: &'static str,
}

impl<R: ListenerRegistry> ListenerScope<R> {
    pub(crate) fn acquire(registry: R, event: &'static str) -> Option<Self> {
        if registry.add(event) {
            Some(Self { registry, event })
        } else {
            None
        }
    }
}

impl<R: ListenerRegistry> Drop for ListenerScope<R> {
    fn drop(&mut self) {
        self.registry.remove(self.event);
    }
}

/// Registry backed by the real `document`, owning the JS-side callback.
struct DomRegistry {
    document: Document,
    callback: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl ListenerRegistry for DomRegistry {
    fn add(&self, event: &'static str) -> bool {
        self.document
            .add_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            .is_ok()
    }

    fn remove(&self, event: &'static str) {
        let _ = self
            .document
            .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
    }
}

/// A document-level mouse event listener bound to a Rust scope.
///
/// `attach` registers the handler on `document`; dropping the guard removes
/// it again. Holding the listener as a value ties its lifetime to whatever
/// owns it (an effect, a component scope), so release happens on every exit
/// path and the same handler can never be registered twice.
pub struct DocumentListener {
    _scope: ListenerScope<DomRegistry>,
}

impl DocumentListener {
    /// Register `handler` for `event` on the document.
    ///
    /// Returns `None` outside a browser context (no window or document).
    pub fn attach(
        event: &'static str,
        handler: impl FnMut(web_sys::MouseEvent) + 'static,
    ) -> Option<Self> {
        let document = document()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::MouseEvent)>);

        let scope = ListenerScope::acquire(DomRegistry { document, callback }, event)?;
        Some(Self { _scope: scope })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingRegistry {
        active: Rc<Cell<usize>>,
        adds: Rc<Cell<usize>>,
        removes: Rc<Cell<usize>>,
        fail_add: bool,
    }

    impl ListenerRegistry for CountingRegistry {
        fn add(&self, _event: &'static str) -> bool {
            if self.fail_add {
                return false;
            }
            self.adds.set(self.adds.get() + 1);
            self.active.set(self.active.get() + 1);
            true
        }

        fn remove(&self, _event: &'static str) {
            self.removes.set(self.removes.get() + 1);
            self.active.set(self.active.get().saturating_sub(1));
        }
    }

    #[test]
    fn acquire_registers_exactly_once() {
        let registry = CountingRegistry::default();
        let scope = ListenerScope::acquire(registry.clone(), "mousedown");

        assert!(scope.is_some());
        assert_eq!(registry.adds.get(), 1);
        assert_eq!(registry.active.get(), 1);
    }

    #[test]
    fn drop_removes_exactly_that_registration() {
        let registry = CountingRegistry::default();
        let scope = ListenerScope::acquire(registry.clone(), "mousedown");

        drop(scope);
        assert_eq!(registry.adds.get(), 1);
        assert_eq!(registry.removes.get(), 1);
        assert_eq!(registry.active.get(), 0);
    }

    #[test]
    fn reacquire_after_drop_never_doubles_up() {
        let registry = CountingRegistry::default();

        let first = ListenerScope::acquire(registry.clone(), "mousedown");
        drop(first);
        let second = ListenerScope::acquire(registry.clone(), "mousedown");

        assert!(second.is_some());
        assert_eq!(registry.active.get(), 1);
    }

    #[test]
    fn failed_add_leaves_nothing_registered() {
        let registry = CountingRegistry {
            fail_add: true,
            ..CountingRegistry::default()
        };

        let scope = ListenerScope::acquire(registry.clone(), "mousedown");

        assert!(scope.is_none());
        assert_eq!(registry.active.get(), 0);
        assert_eq!(registry.removes.get(), 0);
    }
}
