// src/render.rs
//! DOT serialization of the association graph.

use petgraph::dot::{Config, Dot};
use std::fs;
use std::path::Path;

use crate::error::{Result, TagGraphError};
use crate::graph::{TagGraph, Vertex, VertexKind};

/// Graphviz attributes per vertex kind: blue fill for sources, green
/// fill for tags.
fn vertex_attrs(vertex: &Vertex) -> String {
    let colorscheme = match vertex.kind {
        VertexKind::Source => "blues3",
        VertexKind::Tag => "greens3",
    };
    format!(
        "label = \"{}\" colorscheme = \"{colorscheme}\" style = \"filled\" color = \"2\" fillcolor = \"1\"",
        escape_label(&vertex.label)
    )
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders the graph as DOT text.
#[must_use]
pub fn to_dot(graph: &TagGraph) -> String {
    format!(
        "{:?}",
        Dot::with_attr_getters(
            graph.inner(),
            &[Config::EdgeNoLabel, Config::NodeNoLabel],
            &|_, _| String::new(),
            &|_, (_, vertex)| vertex_attrs(vertex),
        )
    )
}

/// Writes the DOT description of the graph to `path`.
pub fn write_dot(graph: &TagGraph, path: &Path) -> Result<()> {
    fs::write(path, to_dot(graph)).map_err(|source| TagGraphError::Render {
        source,
        path: path.to_path_buf(),
    })
}
