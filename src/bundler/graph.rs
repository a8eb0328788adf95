//! Reference graph of one compile run.
//!
//! Nodes are raw references (the root is keyed by its source id); an edge
//! `a → b` means template `a` references `b`. The graph tolerates cycles:
//! templates may include each other, and the run already stops recursing at
//! visited references.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Color states for depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Node has not been visited.
    White,
    /// Node is on the current DFS path.
    Gray,
    /// Node and all of its dependencies have been emitted.
    Black,
}

/// Directed reference graph with discovery-ordered edges.
#[derive(Debug)]
pub struct TemplateGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    root: NodeIndex,
    /// Outgoing edges per node, in the order they were discovered
    children: HashMap<NodeIndex, Vec<NodeIndex>>,
}

impl TemplateGraph {
    /// Create a graph holding only the root.
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let mut graph = DiGraph::new();
        let index = graph.add_node(root.clone());
        let mut node_map = HashMap::new();
        node_map.insert(root, index);
        Self {
            graph,
            node_map,
            root: index,
            children: HashMap::new(),
        }
    }

    fn ensure_node(&mut self, reference: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(reference) {
            index
        } else {
            let index = self.graph.add_node(reference.to_string());
            self.node_map.insert(reference.to_string(), index);
            index
        }
    }

    /// Record that `from` references `to`. Duplicate edges are ignored.
    pub fn add_dependency(&mut self, from: &str, to: &str) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);

        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, ());
            self.children.entry(from_idx).or_default().push(to_idx);
        }
    }

    /// Every node except the root, each after all of its dependencies.
    ///
    /// Depth-first post-order from the root, visiting children in discovery
    /// order. On a cycle the back edge is skipped, so the node closing the
    /// cycle is emitted before the node it points back to.
    pub fn emit_order(&self) -> Vec<String> {
        let mut colors: HashMap<NodeIndex, Color> =
            self.graph.node_indices().map(|node| (node, Color::White)).collect();
        let mut order = Vec::with_capacity(self.graph.node_count());

        self.dfs_visit(self.root, &mut colors, &mut order);

        // Nodes never reached from the root still get a slot, in insertion order.
        for node in self.graph.node_indices() {
            if matches!(colors.get(&node), Some(Color::White)) {
                self.dfs_visit(node, &mut colors, &mut order);
            }
        }

        order.into_iter().filter(|&node| node != self.root).map(|node| self.graph[node].clone()).collect()
    }

    fn dfs_visit(
        &self,
        node: NodeIndex,
        colors: &mut HashMap<NodeIndex, Color>,
        order: &mut Vec<NodeIndex>,
    ) {
        colors.insert(node, Color::Gray);

        for &child in self.children.get(&node).map(Vec::as_slice).unwrap_or_default() {
            if matches!(colors.get(&child), Some(Color::White)) {
                self.dfs_visit(child, colors, order);
            }
        }

        colors.insert(node, Color::Black);
        order.push(node);
    }

    /// First cycle reachable from the root, as a closed path (`a → b → a`).
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut colors: HashMap<NodeIndex, Color> =
            self.graph.node_indices().map(|node| (node, Color::White)).collect();
        let mut path = Vec::new();
        self.cycle_visit(self.root, &mut colors, &mut path)
    }

    fn cycle_visit(
        &self,
        node: NodeIndex,
        colors: &mut HashMap<NodeIndex, Color>,
        path: &mut Vec<NodeIndex>,
    ) -> Option<Vec<String>> {
        colors.insert(node, Color::Gray);
        path.push(node);

        for &child in self.children.get(&node).map(Vec::as_slice).unwrap_or_default() {
            match colors.get(&child) {
                Some(Color::Gray) => {
                    let start = path.iter().position(|&n| n == child).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        path[start..].iter().map(|&n| self.graph[n].clone()).collect();
                    cycle.push(self.graph[child].clone());
                    return Some(cycle);
                }
                Some(Color::White) => {
                    if let Some(cycle) = self.cycle_visit(child, colors, path) {
                        return Some(cycle);
                    }
                }
                _ => {}
            }
        }

        path.pop();
        colors.insert(node, Color::Black);
        None
    }

    /// Direct references of `reference`, in discovery order.
    pub fn direct_deps(&self, reference: &str) -> Vec<String> {
        self.node_map
            .get(reference)
            .and_then(|index| self.children.get(index))
            .map(|children| children.iter().map(|&n| self.graph[n].clone()).collect())
            .unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Build a human-readable tree of the references below the root.
    pub fn to_tree_string(&self) -> String {
        let mut result = String::new();
        let mut visited = Vec::new();
        self.build_tree_string(self.root, &mut result, "", true, &mut visited);
        result
    }

    fn build_tree_string(
        &self,
        node: NodeIndex,
        result: &mut String,
        prefix: &str,
        is_last: bool,
        visited: &mut Vec<NodeIndex>,
    ) {
        let connector = if is_last {
            "└── "
        } else {
            "├── "
        };
        result.push_str(&format!("{}{}{}\n", prefix, connector, self.graph[node]));

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        if visited.contains(&node) {
            result.push_str(&format!("{child_prefix}└── (already listed)\n"));
            return;
        }
        visited.push(node);

        let children = self.children.get(&node).map(Vec::as_slice).unwrap_or_default();
        for (i, &child) in children.iter().enumerate() {
            self.build_tree_string(child, result, &child_prefix, i == children.len() - 1, visited);
        }
    }
}
