// src/graph.rs
//! The bipartite source/tag association graph.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use crate::source::Source;

/// Which side of the bipartite graph a vertex belongs to. The renderer
/// styles the two kinds differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Source,
    Tag,
}

#[derive(Debug, Clone)]
pub struct Vertex {
    pub label: String,
    pub kind: VertexKind,
}

/// Directed graph with source vertices on one side, tag vertices on the
/// other, and edges only from sources to tags. Vertex identity is
/// (kind, label): sources are keyed by name, tags by tag name, so two
/// sources sharing a tag fan in to a single tag vertex while a source
/// that happens to share its name with a tag stays a distinct vertex.
#[derive(Debug, Default)]
pub struct TagGraph {
    inner: DiGraph<Vertex, ()>,
    indices: HashMap<(VertexKind, String), NodeIndex>,
}

impl TagGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the association graph for the given sources. Insertion is
    /// idempotent at both the vertex and edge level, so repeated tags
    /// (or repeated sources) never produce duplicates.
    #[must_use]
    pub fn build<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = &'a Source>,
    {
        let mut graph = Self::new();
        for source in sources {
            let from = graph.add_vertex(VertexKind::Source, &source.name);
            for tag in &source.tags {
                let to = graph.add_vertex(VertexKind::Tag, &tag.name);
                graph.add_edge(from, to);
            }
        }
        // Edges only run source -> tag, so a cycle is impossible unless
        // construction above is broken.
        debug_assert!(!is_cyclic_directed(&graph.inner));
        graph
    }

    /// Adds a vertex if (kind, label) is not already present and returns
    /// its index either way.
    fn add_vertex(&mut self, kind: VertexKind, label: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(&(kind, label.to_string())) {
            return idx;
        }
        let idx = self.inner.add_node(Vertex {
            label: label.to_string(),
            kind,
        });
        self.indices.insert((kind, label.to_string()), idx);
        idx
    }

    /// Adds the edge unless it already exists.
    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.inner.update_edge(from, to, ());
    }

    #[must_use]
    pub fn inner(&self) -> &DiGraph<Vertex, ()> {
        &self.inner
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    #[must_use]
    pub fn contains(&self, kind: VertexKind, label: &str) -> bool {
        self.indices.contains_key(&(kind, label.to_string()))
    }

    /// Number of edges pointing at the given vertex.
    #[must_use]
    pub fn in_degree(&self, kind: VertexKind, label: &str) -> usize {
        self.indices
            .get(&(kind, label.to_string()))
            .map_or(0, |&idx| {
                self.inner
                    .neighbors_directed(idx, petgraph::Direction::Incoming)
                    .count()
            })
    }

    /// Number of edges leaving the given vertex.
    #[must_use]
    pub fn out_degree(&self, kind: VertexKind, label: &str) -> usize {
        self.indices
            .get(&(kind, label.to_string()))
            .map_or(0, |&idx| {
                self.inner
                    .neighbors_directed(idx, petgraph::Direction::Outgoing)
                    .count()
            })
    }

    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.inner)
    }

    /// All edges as (source label, tag label) pairs, sorted.
    #[must_use]
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut edges: Vec<(String, String)> = self
            .inner
            .edge_indices()
            .filter_map(|e| self.inner.edge_endpoints(e))
            .map(|(a, b)| (self.inner[a].label.clone(), self.inner[b].label.clone()))
            .collect();
        edges.sort();
        edges
    }
}
