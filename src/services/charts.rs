// ============================================================================
// CHART SERVICE - Handle de la librería de gráficos (solo lectura)
// ============================================================================
// El servicio solo crea instancias sobre un contenedor; la construcción de
// opciones de cada gráfico es cosa de la vista.
// ============================================================================

use std::cell::RefCell;

use crate::error::AppResult;

/// Backend que crea instancias de gráfico
pub trait ChartBackend {
    fn init(&self, container_id: &str) -> AppResult<()>;
}

/// Backend sin navegador: solo registra los contenedores
#[derive(Default)]
pub struct HeadlessCharts;

impl ChartBackend for HeadlessCharts {
    fn init(&self, _container_id: &str) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    pub container_id: String,
}

pub struct ChartService {
    global_name: String,
    backend: Box<dyn ChartBackend>,
    containers: RefCell<Vec<String>>,
}

impl ChartService {
    pub fn new(global_name: &str, backend: Box<dyn ChartBackend>) -> Self {
        Self {
            global_name: global_name.to_string(),
            backend,
            containers: RefCell::new(Vec::new()),
        }
    }

    pub fn headless(global_name: &str) -> Self {
        Self::new(global_name, Box::new(HeadlessCharts))
    }

    /// Nombre global de la librería (p.ej. "echarts")
    pub fn global_name(&self) -> &str {
        &self.global_name
    }

    /// Crear una instancia de gráfico sobre el contenedor `container_id`
    pub fn init(&self, container_id: &str) -> AppResult<ChartHandle> {
        self.backend.init(container_id)?;
        let mut containers = self.containers.borrow_mut();
        if !containers.iter().any(|c| c == container_id) {
            containers.push(container_id.to_string());
        }
        Ok(ChartHandle {
            container_id: container_id.to_string(),
        })
    }

    /// Contenedores con instancia creada
    pub fn containers(&self) -> Vec<String> {
        self.containers.borrow().clone()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebCharts;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::ChartBackend;
    use crate::dom::web::{get_element_by_id, window};
    use crate::error::{AppError, AppResult};

    /// Backend que llama a `window[global].init(element)`
    pub struct WebCharts {
        global_name: String,
        instances: RefCell<HashMap<String, JsValue>>,
    }

    impl WebCharts {
        pub fn new(global_name: &str) -> Self {
            Self {
                global_name: global_name.to_string(),
                instances: RefCell::new(HashMap::new()),
            }
        }

        fn library(&self) -> AppResult<JsValue> {
            let win = window().ok_or_else(|| AppError::Chart("No window".to_string()))?;
            let lib = Reflect::get(&win, &JsValue::from_str(&self.global_name))
                .map_err(|_| AppError::Chart(format!("window.{} not readable", self.global_name)))?;
            if lib.is_undefined() || lib.is_null() {
                return Err(AppError::Chart(format!("window.{} is not loaded", self.global_name)));
            }
            Ok(lib)
        }

        fn call_method(target: &JsValue, method: &str, arg: Option<&JsValue>) -> AppResult<JsValue> {
            let func: Function = Reflect::get(target, &JsValue::from_str(method))
                .ok()
                .and_then(|f| f.dyn_into::<Function>().ok())
                .ok_or_else(|| AppError::Chart(format!("{} is not a function", method)))?;
            let result = match arg {
                Some(arg) => func.call1(target, arg),
                None => func.call0(target),
            };
            result.map_err(|e| AppError::Chart(format!("{} failed: {:?}", method, e)))
        }
    }

    impl ChartBackend for WebCharts {
        fn init(&self, container_id: &str) -> AppResult<()> {
            let lib = self.library()?;
            let element = get_element_by_id(container_id)
                .ok_or_else(|| AppError::Chart(format!("container #{} not found", container_id)))?;

            // El contenedor anterior se destruyó con el re-render: liberar su instancia
            if let Some(previous) = self.instances.borrow_mut().remove(container_id) {
                if let Err(e) = Self::call_method(&previous, "dispose", None) {
                    log::warn!("⚠️ [CHARTS] {}", e);
                }
            }

            let element: &JsValue = element.as_ref();
            let instance = Self::call_method(&lib, "init", Some(element))?;
            self.instances.borrow_mut().insert(container_id.to_string(), instance);
            log::debug!("📈 [CHARTS] Instancia creada en #{}", container_id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::rc::Rc;

    struct FailingCharts;

    impl ChartBackend for FailingCharts {
        fn init(&self, _container_id: &str) -> AppResult<()> {
            Err(AppError::Chart("library not loaded".into()))
        }
    }

    #[test]
    fn test_init_tracks_containers_once() {
        let charts = ChartService::headless("echarts");
        charts.init("chart-a").unwrap();
        charts.init("chart-a").unwrap();
        let handle = charts.init("chart-b").unwrap();
        assert_eq!(handle.container_id, "chart-b");
        assert_eq!(charts.containers(), vec!["chart-a".to_string(), "chart-b".to_string()]);
        assert_eq!(charts.global_name(), "echarts");
    }

    #[test]
    fn test_backend_error_propagates() {
        let charts = Rc::new(ChartService::new("echarts", Box::new(FailingCharts)));
        assert!(matches!(charts.init("chart-a"), Err(AppError::Chart(_))));
        assert!(charts.containers().is_empty());
    }
}
