// ============================================================================
// COMPONENT REGISTRY - Componentes reutilizables referenciados por nombre
// ============================================================================

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::Node;
use crate::error::{AppError, AppResult};
use crate::views::ViewContext;

pub type Props = BTreeMap<String, String>;

/// Construir props a partir de pares clave/valor
pub fn props(pairs: &[(&str, &str)]) -> Props {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Componente de presentación
pub trait Component {
    fn render(&self, props: &Props, ctx: &ViewContext) -> AppResult<Node>;
}

#[derive(Default)]
pub struct ComponentRegistryBuilder {
    entries: BTreeMap<String, Rc<dyn Component>>,
}

impl ComponentRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C: Component + 'static>(&mut self, name: &str, component: C) -> AppResult<()> {
        if self.entries.contains_key(name) {
            return Err(AppError::DuplicateComponent(name.to_string()));
        }
        log::debug!("🧩 [APP] Componente registrado: {}", name);
        self.entries.insert(name.to_string(), Rc::new(component));
        Ok(())
    }

    pub fn freeze(self) -> ComponentRegistry {
        ComponentRegistry {
            entries: self.entries,
        }
    }
}

pub struct ComponentRegistry {
    entries: BTreeMap<String, Rc<dyn Component>>,
}

impl ComponentRegistry {
    pub fn get(&self, name: &str) -> Option<Rc<dyn Component>> {
        self.entries.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renderizar un componente registrado por nombre
    pub fn render(&self, name: &str, props: &Props, ctx: &ViewContext) -> AppResult<Node> {
        let component = self
            .get(name)
            .ok_or_else(|| AppError::UnknownComponent(name.to_string()))?;
        component.render(props, ctx)
    }
}
