// ============================================================================
// NODE - Árbol de render independiente del navegador
// ============================================================================
// Las vistas y componentes producen `Node`; el host (web o memoria) lo
// materializa. Así el ensamblado y la navegación se pueden testear en nativo.
// ============================================================================

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(ElementNode),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementNode {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    /// Crear nuevo builder para un elemento
    pub fn element(tag: &str) -> ElementBuilder {
        ElementBuilder::new(tag)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Texto concatenado de todo el subárbol
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Primer elemento (profundidad primero) que cumple el predicado
    pub fn find(&self, pred: &dyn Fn(&ElementNode) -> bool) -> Option<&ElementNode> {
        let el = self.as_element()?;
        if pred(el) {
            return Some(el);
        }
        el.children.iter().find_map(|child| child.find(pred))
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&ElementNode> {
        self.find(&|el| el.attr(name) == Some(value))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&ElementNode> {
        self.find(&|el| el.has_class(class))
    }
}

impl ElementNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear nodos fácilmente
// ============================================================================

pub struct ElementBuilder {
    element: ElementNode,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Self {
        Self {
            element: ElementNode {
                tag: tag.to_string(),
                ..ElementNode::default()
            },
        }
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Agregar clases adicionales (sin reemplazar)
    pub fn add_class(mut self, class: &str) -> Self {
        let merged = match self.element.attrs.get("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.element.attrs.insert("class".to_string(), merged);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.element.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Establecer texto (reemplaza los hijos)
    pub fn text(mut self, text: &str) -> Self {
        self.element.children = vec![Node::text(text)];
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.element.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.element.children.extend(children);
        self
    }

    /// Construir y retornar nodo
    pub fn build(self) -> Node {
        Node::Element(self.element)
    }
}

impl From<ElementBuilder> for Node {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_queries() {
        let node = Node::element("section")
            .class("page")
            .add_class("page--active")
            .child(Node::element("h1").text("Bridge"))
            .child(Node::element("a").attr("data-route", "/roadbed-calculation").text("Roadbed"))
            .build();

        let root = node.as_element().unwrap();
        assert!(root.has_class("page"));
        assert!(root.has_class("page--active"));
        assert_eq!(node.text_content(), "BridgeRoadbed");
        let link = node.find_by_attr("data-route", "/roadbed-calculation").unwrap();
        assert_eq!(link.tag, "a");
        assert!(node.find_by_class("missing").is_none());
    }
}
