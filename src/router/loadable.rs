// ============================================================================
// LOADABLE VIEW - Vista eager o diferida (lazy) con caché
// ============================================================================
// Lazy: Unresolved -> Loading -> Resolved, una sola vez por proceso.
// Mientras está Loading, todas las navegaciones comparten la misma carga.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::{AppError, AppResult};
use crate::views::View;

pub type ViewFuture = LocalBoxFuture<'static, AppResult<Rc<dyn View>>>;

/// Carga en curso, clonable por cada navegación que la espera
pub type PendingView = Shared<ViewFuture>;

type Loader = Rc<dyn Fn() -> ViewFuture>;

pub enum LoadableView {
    Eager(Rc<dyn View>),
    Lazy(LazyView),
}

pub struct LazyView {
    loader: Loader,
    slot: Rc<RefCell<LazySlot>>,
    loads: Rc<Cell<usize>>,
}

enum LazySlot {
    Unresolved,
    Loading(PendingView),
    Resolved(Rc<dyn View>),
}

/// Resultado de resolver una vista
pub enum ViewResolution {
    Ready(Rc<dyn View>),
    Pending(PendingView),
}

impl LoadableView {
    pub fn eager<V: View + 'static>(view: V) -> Self {
        LoadableView::Eager(Rc::new(view))
    }

    /// Vista diferida: `loader` se invoca en la primera navegación
    pub fn lazy<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = AppResult<Rc<dyn View>>> + 'static,
    {
        LoadableView::Lazy(LazyView {
            loader: Rc::new(move || loader().boxed_local()),
            slot: Rc::new(RefCell::new(LazySlot::Unresolved)),
            loads: Rc::new(Cell::new(0)),
        })
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, LoadableView::Lazy(_))
    }

    pub fn is_resolved(&self) -> bool {
        match self {
            LoadableView::Eager(_) => true,
            LoadableView::Lazy(lazy) => matches!(*lazy.slot.borrow(), LazySlot::Resolved(_)),
        }
    }

    /// Número de veces que se ha disparado la carga diferida
    pub fn load_count(&self) -> usize {
        match self {
            LoadableView::Eager(_) => 0,
            LoadableView::Lazy(lazy) => lazy.loads.get(),
        }
    }

    /// Resolver la vista; dispara la carga si aún no se ha hecho
    pub fn resolve(&self, path: &str) -> ViewResolution {
        match self {
            LoadableView::Eager(view) => ViewResolution::Ready(view.clone()),
            LoadableView::Lazy(lazy) => lazy.resolve(path),
        }
    }
}

impl LazyView {
    fn resolve(&self, path: &str) -> ViewResolution {
        let mut slot = self.slot.borrow_mut();
        match &*slot {
            LazySlot::Resolved(view) => return ViewResolution::Ready(view.clone()),
            LazySlot::Loading(pending) => return ViewResolution::Pending(pending.clone()),
            LazySlot::Unresolved => {}
        }

        self.loads.set(self.loads.get() + 1);
        log::debug!("📦 [ROUTER] Carga diferida de la vista para {}", path);

        let load = (self.loader)();
        let slot_ref = self.slot.clone();
        let path = path.to_string();
        let pending = async move {
            let result = load.await.map_err(|e| match e {
                AppError::ViewLoad { .. } => e,
                other => AppError::ViewLoad { path: path.clone(), message: other.to_string() },
            });
            match &result {
                Ok(view) => {
                    log::debug!("✅ [ROUTER] Vista {} resuelta para {}", view.name(), path);
                    *slot_ref.borrow_mut() = LazySlot::Resolved(view.clone());
                }
                Err(e) => {
                    log::error!("❌ [ROUTER] {}", e);
                    *slot_ref.borrow_mut() = LazySlot::Unresolved;
                }
            }
            result
        }
        .boxed_local()
        .shared();

        *slot = LazySlot::Loading(pending.clone());
        ViewResolution::Pending(pending)
    }
}

impl fmt::Debug for LoadableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadableView::Eager(view) => write!(f, "Eager({})", view.name()),
            LoadableView::Lazy(lazy) => {
                let state = match &*lazy.slot.borrow() {
                    LazySlot::Unresolved => "unresolved",
                    LazySlot::Loading(_) => "loading",
                    LazySlot::Resolved(_) => "resolved",
                };
                write!(f, "Lazy({})", state)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Node;
    use crate::views::ViewContext;
    use futures::executor::block_on;

    struct Dummy;

    impl View for Dummy {
        fn name(&self) -> &str {
            "Dummy"
        }

        fn render(&self, _ctx: &ViewContext) -> AppResult<Node> {
            Ok(Node::text("dummy"))
        }
    }

    fn counting_lazy() -> (LoadableView, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let view = LoadableView::lazy(move || {
            counter.set(counter.get() + 1);
            async { Ok(Rc::new(Dummy) as Rc<dyn View>) }
        });
        (view, calls)
    }

    #[test]
    fn test_eager_is_ready() {
        let view = LoadableView::eager(Dummy);
        assert!(view.is_resolved());
        assert!(matches!(view.resolve("/"), ViewResolution::Ready(_)));
        assert_eq!(view.load_count(), 0);
    }

    #[test]
    fn test_lazy_loads_once() {
        let (view, calls) = counting_lazy();
        assert!(!view.is_resolved());

        let pending = match view.resolve("/a") {
            ViewResolution::Pending(p) => p,
            ViewResolution::Ready(_) => panic!("lazy view must start unresolved"),
        };
        // Segunda petición mientras carga: misma carga compartida
        assert!(matches!(view.resolve("/a"), ViewResolution::Pending(_)));
        assert_eq!(calls.get(), 1);

        let loaded = block_on(pending).unwrap();
        assert_eq!(loaded.name(), "Dummy");
        assert!(view.is_resolved());

        for _ in 0..3 {
            assert!(matches!(view.resolve("/a"), ViewResolution::Ready(_)));
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(view.load_count(), 1);
    }

    #[test]
    fn test_failed_load_resets_slot() {
        let attempts = Rc::new(Cell::new(0));
        let counter = attempts.clone();
        let view = LoadableView::lazy(move || {
            counter.set(counter.get() + 1);
            async { Err::<Rc<dyn View>, _>(AppError::Dom("network".into())) }
        });

        let pending = match view.resolve("/broken") {
            ViewResolution::Pending(p) => p,
            ViewResolution::Ready(_) => unreachable!(),
        };
        let err = block_on(pending).err().unwrap();
        assert_eq!(
            err,
            AppError::ViewLoad { path: "/broken".into(), message: "dom error: network".into() }
        );
        assert!(!view.is_resolved());
        assert!(format!("{:?}", view).contains("unresolved"));
    }
}
