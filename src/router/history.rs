// ============================================================================
// HISTORY - Backend de historial (navegador o memoria)
// ============================================================================

use std::cell::RefCell;

use crate::error::AppResult;

pub trait History {
    /// Location actual (path + query + hash)
    fn location(&self) -> String;

    /// Añadir entrada al historial
    fn push(&self, url: &str) -> AppResult<()>;

    /// Sustituir la entrada actual (redirecciones)
    fn replace(&self, url: &str) -> AppResult<()>;
}

/// Historial en memoria (tests / sin navegador)
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial.to_string()]),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, url: &str) -> AppResult<()> {
        self.entries.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn replace(&self, url: &str) -> AppResult<()> {
        let mut entries = self.entries.borrow_mut();
        match entries.last_mut() {
            Some(last) => *last = url.to_string(),
            None => entries.push(url.to_string()),
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites_current_entry() {
        let history = MemoryHistory::new("/");
        history.push("/roadbed-calculation").unwrap();
        history.replace("/foundation-stability").unwrap();
        assert_eq!(history.entries(), vec!["/".to_string(), "/foundation-stability".to_string()]);
        assert_eq!(history.location(), "/foundation-stability");
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsValue;

    use super::History;
    use crate::dom::web::window;
    use crate::error::{dom_error, AppError, AppResult};

    /// Historial HTML5 (pushState / replaceState)
    pub struct BrowserHistory;

    fn history() -> AppResult<web_sys::History> {
        window()
            .ok_or_else(|| AppError::Dom("No window".to_string()))?
            .history()
            .map_err(dom_error)
    }

    impl History for BrowserHistory {
        fn location(&self) -> String {
            window()
                .map(|w| w.location())
                .map(|loc| {
                    format!(
                        "{}{}{}",
                        loc.pathname().unwrap_or_else(|_| "/".to_string()),
                        loc.search().unwrap_or_default(),
                        loc.hash().unwrap_or_default()
                    )
                })
                .unwrap_or_else(|| "/".to_string())
        }

        fn push(&self, url: &str) -> AppResult<()> {
            history()?
                .push_state_with_url(&JsValue::NULL, "", Some(url))
                .map_err(dom_error)
        }

        fn replace(&self, url: &str) -> AppResult<()> {
            history()?
                .replace_state_with_url(&JsValue::NULL, "", Some(url))
                .map_err(dom_error)
        }
    }
}
