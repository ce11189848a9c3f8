//! The resolved dependency graph.
//!
//! The repository collaborator answers a graph request with this structure:
//! the project at the root, one node per resolved dependency, edges in
//! declaration order. Flattening is a preorder walk (parent before children,
//! depth-first) that preserves the collaborator's child ordering. This is
//! the ordering every downstream consumer sees, and it must be stable across
//! runs for descriptor output to be reproducible.

use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::trace;

use pomsync_artifact::Artifact;

// ---------------------------------------------------------------------------
// DependencyGraph
// ---------------------------------------------------------------------------

/// A resolved dependency graph rooted at the project itself.
#[derive(Clone, Debug)]
pub struct DependencyGraph {
    graph: DiGraph<Artifact, ()>,
    root: NodeIndex,
}

impl DependencyGraph {
    /// Create a graph containing only the root (project) artifact.
    #[must_use]
    pub fn new(root: Artifact) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(root);
        Self { graph, root }
    }

    /// The root node index.
    #[must_use]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Add a dependency of `parent`, returning its node index. Children are
    /// remembered in insertion order.
    pub fn add_dependency(&mut self, parent: NodeIndex, artifact: Artifact) -> NodeIndex {
        let node = self.graph.add_node(artifact);
        self.graph.add_edge(parent, node, ());
        node
    }

    /// The artifact stored at a node.
    #[must_use]
    pub fn artifact(&self, node: NodeIndex) -> &Artifact {
        &self.graph[node]
    }

    /// Number of dependency nodes (the root is not a dependency).
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.graph.node_count() - 1
    }

    /// Flatten the graph to the preorder dependency list: parent before
    /// children, depth-first, children in insertion order, the root project
    /// itself excluded. Nodes reachable through several parents appear once,
    /// at their first (preorder) position.
    #[must_use]
    pub fn flatten_preorder(&self) -> Vec<Artifact> {
        let mut ordered = Vec::with_capacity(self.graph.node_count().saturating_sub(1));
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut stack = vec![self.root];
        visited.insert(self.root);

        while let Some(node) = stack.pop() {
            if node != self.root {
                trace!("flattened {}", self.graph[node]);
                ordered.push(self.graph[node].clone());
            }
            // petgraph iterates neighbors most-recently-added first; pushing
            // them in that order makes the stack pop them in insertion order
            for child in self.graph.neighbors(node) {
                if visited.insert(child) {
                    stack.push(child);
                }
            }
        }

        ordered
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pomsync_artifact::ArtifactCoordinate;

    fn artifact(name: &str) -> Artifact {
        Artifact::new(ArtifactCoordinate::new("com.test", name, "1.0"), "compile")
    }

    fn names(artifacts: &[Artifact]) -> Vec<String> {
        artifacts
            .iter()
            .map(|a| a.coordinate.artifact_id.clone())
            .collect()
    }

    #[test]
    fn test_empty_graph_flattens_to_nothing() {
        let graph = DependencyGraph::new(artifact("root"));
        assert_eq!(graph.dependency_count(), 0);
        assert!(graph.flatten_preorder().is_empty());
    }

    #[test]
    fn test_flat_children_keep_insertion_order() {
        let mut graph = DependencyGraph::new(artifact("root"));
        let root = graph.root();
        graph.add_dependency(root, artifact("a"));
        graph.add_dependency(root, artifact("b"));
        graph.add_dependency(root, artifact("c"));

        assert_eq!(names(&graph.flatten_preorder()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_preorder_visits_parent_before_children() {
        // root -> a -> (a1, a2), root -> b -> b1
        let mut graph = DependencyGraph::new(artifact("root"));
        let root = graph.root();
        let a = graph.add_dependency(root, artifact("a"));
        let b = graph.add_dependency(root, artifact("b"));
        graph.add_dependency(a, artifact("a1"));
        graph.add_dependency(a, artifact("a2"));
        graph.add_dependency(b, artifact("b1"));

        assert_eq!(
            names(&graph.flatten_preorder()),
            vec!["a", "a1", "a2", "b", "b1"]
        );
    }

    #[test]
    fn test_shared_node_appears_once_at_first_position() {
        // both a and b depend on shared
        let mut graph = DependencyGraph::new(artifact("root"));
        let root = graph.root();
        let a = graph.add_dependency(root, artifact("a"));
        let b = graph.add_dependency(root, artifact("b"));
        let shared = graph.add_dependency(a, artifact("shared"));
        graph.graph_add_edge_for_test(b, shared);

        assert_eq!(
            names(&graph.flatten_preorder()),
            vec!["a", "shared", "b"]
        );
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let mut graph = DependencyGraph::new(artifact("root"));
        let root = graph.root();
        let a = graph.add_dependency(root, artifact("a"));
        graph.add_dependency(a, artifact("a1"));
        graph.add_dependency(root, artifact("b"));

        let first = graph.flatten_preorder();
        let second = graph.flatten_preorder();
        assert_eq!(first, second);
    }

    impl DependencyGraph {
        fn graph_add_edge_for_test(&mut self, from: NodeIndex, to: NodeIndex) {
            self.graph.add_edge(from, to, ());
        }
    }
}
