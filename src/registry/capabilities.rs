// ============================================================================
// CAPABILITY REGISTRY - Servicios singleton accesibles desde las vistas
// ============================================================================
// Se construye con el builder durante el ensamblado y se congela antes del
// montaje: el registro congelado solo permite lectura.
// ============================================================================

use std::any::Any;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::{AppError, AppResult};

/// Nombres bien conocidos
pub const NAVIGATION: &str = "router";
pub const UI_LIBRARY: &str = "ui";
pub const CHARTS: &str = "echarts";

#[derive(Default)]
pub struct CapabilityRegistryBuilder {
    entries: BTreeMap<String, Rc<dyn Any>>,
}

impl CapabilityRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrar un singleton; un nombre ya registrado nunca se reemplaza
    pub fn register<T: 'static>(&mut self, name: &str, instance: Rc<T>) -> AppResult<()> {
        if self.entries.contains_key(name) {
            return Err(AppError::DuplicateCapability(name.to_string()));
        }
        log::debug!("🔌 [APP] Capacidad registrada: {}", name);
        self.entries.insert(name.to_string(), instance);
        Ok(())
    }

    pub fn freeze(self) -> CapabilityRegistry {
        CapabilityRegistry {
            entries: self.entries,
        }
    }
}

/// Registro congelado (solo lectura)
pub struct CapabilityRegistry {
    entries: BTreeMap<String, Rc<dyn Any>>,
}

impl CapabilityRegistry {
    /// Obtener la instancia registrada bajo `name` si es del tipo `T`
    pub fn get<T: 'static>(&self, name: &str) -> Option<Rc<T>> {
        self.entries.get(name)?.clone().downcast::<T>().ok()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
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
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Service(u32);

    #[test]
    fn test_get_returns_same_instance() {
        let mut builder = CapabilityRegistryBuilder::new();
        builder.register("svc", Rc::new(Service(7))).unwrap();
        let registry = builder.freeze();

        let a = registry.get::<Service>("svc").unwrap();
        let b = registry.get::<Service>("svc").unwrap();
        assert_eq!(a.0, 7);
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_wrong_type_or_name() {
        let mut builder = CapabilityRegistryBuilder::new();
        builder.register("svc", Rc::new(Service(1))).unwrap();
        let registry = builder.freeze();
        assert!(registry.get::<String>("svc").is_none());
        assert!(registry.get::<Service>("other").is_none());
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut builder = CapabilityRegistryBuilder::new();
        builder.register("svc", Rc::new(Service(1))).unwrap();
        let err = builder.register("svc", Rc::new(Service(2))).unwrap_err();
        assert_eq!(err, AppError::DuplicateCapability("svc".into()));
        assert_eq!(builder.freeze().get::<Service>("svc").unwrap().0, 1);
    }
}
