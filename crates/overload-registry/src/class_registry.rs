//! ClassRegistry - the class hierarchy behind `is_instance_of`.
//!
//! Classes are nodes of a directed graph with one edge from each class to
//! each of its parents. Multiple inheritance is allowed; cycles are not.
//!
//! A class always derives from itself, even when it was never registered:
//! an object blessed into `Foo` satisfies a `Foo` argument kind without any
//! registration at all. Registration only matters for subclass checks.
//!
//! # Example
//!
//! ```
//! use overload_registry::ClassRegistry;
//!
//! let mut classes = ClassRegistry::new();
//! classes.derive("Wx::Frame", "Wx::TopLevelWindow").unwrap();
//! classes.derive("Wx::TopLevelWindow", "Wx::Window").unwrap();
//!
//! assert!(classes.is_derived_from("Wx::Frame", "Wx::Window"));
//! assert!(!classes.is_derived_from("Wx::Window", "Wx::Frame"));
//! ```

use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use crate::RegistrationError;

/// Registry of classes and their parents.
#[derive(Debug, Default, Clone)]
pub struct ClassRegistry {
    /// Edges point from a class to each direct parent.
    graph: DiGraph<String, ()>,
    /// Class name -> graph node.
    nodes: FxHashMap<String, NodeIndex>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class with no parents. Registering twice is a no-op.
    pub fn register(&mut self, class: &str) -> Result<(), RegistrationError> {
        self.node(class).map(|_| ())
    }

    /// Declare that `child` inherits from `parent`, registering both.
    pub fn derive(&mut self, child: &str, parent: &str) -> Result<(), RegistrationError> {
        if child == parent {
            return Err(RegistrationError::SelfInheritance(child.to_string()));
        }

        let child_node = self.node(child)?;
        let parent_node = self.node(parent)?;

        if self.graph.contains_edge(child_node, parent_node) {
            return Ok(());
        }

        if has_path_connecting(&self.graph, parent_node, child_node, None) {
            return Err(RegistrationError::InheritanceCycle {
                child: child.to_string(),
                parent: parent.to_string(),
            });
        }

        tracing::debug!(child, parent, "registered parent class");
        self.graph.add_edge(child_node, parent_node, ());
        Ok(())
    }

    /// Whether `class` is `ancestor` or inherits from it, directly or not.
    pub fn is_derived_from(&self, class: &str, ancestor: &str) -> bool {
        if class == ancestor {
            return true;
        }

        match (self.nodes.get(class), self.nodes.get(ancestor)) {
            (Some(&from), Some(&to)) => has_path_connecting(&self.graph, from, to, None),
            _ => false,
        }
    }

    /// Direct parents of `class`, in no particular order.
    pub fn parents(&self, class: &str) -> Vec<&str> {
        self.nodes
            .get(class)
            .map(|&node| {
                self.graph
                    .neighbors(node)
                    .map(|parent| self.graph[parent].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.nodes.contains_key(class)
    }

    pub fn class_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&mut self, class: &str) -> Result<NodeIndex, RegistrationError> {
        if class.is_empty() {
            return Err(RegistrationError::EmptyClassName);
        }

        if let Some(&node) = self.nodes.get(class) {
            return Ok(node);
        }

        let node = self.graph.add_node(class.to_string());
        self.nodes.insert(class.to_string(), node);
        Ok(node)
    }
}
