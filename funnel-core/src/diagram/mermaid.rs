//! Mermaid flowchart output for a [`FunnelDiagram`].

use std::fmt::Write;

use super::{DiagramNode, FunnelDiagram, NodeKind};
use crate::calculations::common::format_amount;

/// Renders the diagram as a top-down Mermaid flowchart.
///
/// Node lines come first, then edge lines, both in diagram order.
///
/// ```
/// use funnel_core::{InputSet, compute, diagram::mermaid};
///
/// let text = mermaid::render(&compute(&InputSet::default()).diagram);
///
/// assert!(text.starts_with("graph TD\n"));
/// assert!(text.contains(r#"casesNeeded -->|"casesNeeded × closingRatio"| appointmentsNeeded"#));
/// ```
pub fn render(diagram: &FunnelDiagram) -> String {
    let mut out = String::from("graph TD\n");

    for node in diagram.nodes() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "    {}", node_shape(node));
    }
    for edge in diagram.edges() {
        let _ = writeln!(
            out,
            "    {} -->|\"{}\"| {}",
            edge.from,
            escape(&edge.operation),
            edge.to
        );
    }

    out
}

fn node_shape(node: &DiagramNode) -> String {
    let value = match node.kind {
        NodeKind::Headline => format!("${}", format_amount(node.value)),
        NodeKind::Input | NodeKind::Derived => format_amount(node.value),
    };
    let text = escape(&format!("{}: {}", node.label, value));

    match node.kind {
        NodeKind::Input => format!("{}([\"{}\"])", node.key, text),
        NodeKind::Derived => format!("{}[\"{}\"]", node.key, text),
        NodeKind::Headline => format!("{}{{{{\"{}\"}}}}", node.key, text),
    }
}

/// Mermaid labels cannot hold a bare double quote.
fn escape(text: &str) -> String {
    text.replace('"', "#quot;")
}
