// tests/integration_scan.rs
//! Full pipeline against real files: scan -> registry -> graph -> DOT.

use std::fs;
use std::path::PathBuf;

use taggraph_core::error::TagGraphError;
use taggraph_core::graph::{TagGraph, VertexKind};
use taggraph_core::render;
use taggraph_core::scan;
use taggraph_core::source::SourceRegistry;
use tempfile::TempDir;

fn write_doc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write test doc");
    path
}

#[test]
fn test_scan_two_documents() {
    let dir = TempDir::new().unwrap();
    // Absolute inputs keep the test independent of the process cwd.
    let a = write_doc(&dir, "a.md", "Hello [[alpha]] world [[beta]] [[alpha]]");
    let b = write_doc(&dir, "b.md", "[[beta]] only");

    let mut registry = SourceRegistry::new();
    scan::scan_sources(&[a.clone(), b.clone()], &mut registry).unwrap();

    assert_eq!(registry.len(), 2);
    let graph = TagGraph::build(registry.sources());

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.contains(VertexKind::Tag, "alpha"));
    assert!(graph.contains(VertexKind::Tag, "beta"));
    assert_eq!(graph.in_degree(VertexKind::Tag, "beta"), 2);
}

#[test]
fn test_missing_file_aborts_run() {
    let dir = TempDir::new().unwrap();
    let present = write_doc(&dir, "present.md", "[[x]]");
    let missing = dir.path().join("missing.md");

    let mut registry = SourceRegistry::new();
    let err = scan::scan_sources(&[present, missing.clone()], &mut registry).unwrap_err();

    match err {
        TagGraphError::SourceRead { path, .. } => {
            assert!(path.ends_with("missing.md"));
        }
        other => panic!("expected SourceRead, got: {other}"),
    }
}

#[test]
fn test_rescan_same_file_is_upsert() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "doc.md", "[[old]]");

    let mut registry = SourceRegistry::new();
    scan::scan_sources(&[doc.clone()], &mut registry).unwrap();

    fs::write(&doc, "[[new]]").unwrap();
    scan::scan_sources(&[doc], &mut registry).unwrap();

    assert_eq!(registry.len(), 1);
    let graph = TagGraph::build(registry.sources());
    assert!(graph.contains(VertexKind::Tag, "new"));
    assert!(!graph.contains(VertexKind::Tag, "old"));
}

#[test]
fn test_tagless_document_is_isolated_vertex() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "plain.md", "no markers here");

    let mut registry = SourceRegistry::new();
    scan::scan_sources(&[doc], &mut registry).unwrap();

    let graph = TagGraph::build(registry.sources());
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_write_dot_output_file() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "doc.md", "[[alpha]] and [[beta]]");

    let mut registry = SourceRegistry::new();
    scan::scan_sources(&[doc], &mut registry).unwrap();
    let graph = TagGraph::build(registry.sources());

    let out = dir.path().join("mygraph.gv");
    render::write_dot(&graph, &out).unwrap();

    let dot = fs::read_to_string(&out).unwrap();
    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("alpha"));
    assert!(dot.contains("beta"));
}

#[test]
fn test_write_dot_bad_path_errors() {
    let dir = TempDir::new().unwrap();
    let graph = TagGraph::build([]);

    let out = dir.path().join("no_such_dir").join("mygraph.gv");
    let err = render::write_dot(&graph, &out).unwrap_err();
    assert!(matches!(err, TagGraphError::Render { .. }));
}
