//! Structured description of the funnel as a directed graph.
//!
//! [`FunnelDiagram::for_funnel`] lays out one node per input and per derived
//! quantity, and one edge per operand of each worksheet line, labelled with
//! the arithmetic performed. Turning the graph into text is left to a
//! renderer such as [`mermaid::render`].

pub mod mermaid;

use serde::Serialize;

use crate::models::{FunnelTotals, InputSet, STEPS};

/// Where a node sits in the funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// One of the six wizard inputs.
    Input,
    /// An intermediate funnel total.
    Derived,
    /// The average per initial contact.
    Headline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramNode {
    /// Identifier unique within the diagram.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: NodeKind,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramEdge {
    pub from: &'static str,
    pub to: &'static str,
    /// The operation applied along this edge, e.g. `casesNeeded × closingRatio`.
    pub operation: String,
}

/// Nodes and labelled edges, in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelDiagram {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl FunnelDiagram {
    pub fn builder() -> DiagramBuilder {
        DiagramBuilder::default()
    }

    /// Builds the diagram of a calculated funnel.
    pub fn for_funnel(
        inputs: &InputSet,
        totals: &FunnelTotals,
        average_per_contact: f64,
    ) -> Self {
        let mut builder = Self::builder();
        for step in &STEPS {
            builder = builder.node(
                step.id.as_str(),
                step.label,
                NodeKind::Input,
                inputs.get_field(step.id),
            );
        }

        builder
            .node(
                "totalPremium",
                "Total Premium",
                NodeKind::Derived,
                totals.total_premium,
            )
            .node(
                "casesNeeded",
                "Cases Needed",
                NodeKind::Derived,
                totals.cases_needed,
            )
            .node(
                "appointmentsNeeded",
                "Appointments Needed",
                NodeKind::Derived,
                totals.appointments_needed,
            )
            .node(
                "prospectsNeeded",
                "Prospects Needed",
                NodeKind::Derived,
                totals.prospects_needed,
            )
            .node(
                "initialContactsNeeded",
                "Initial Contacts Needed",
                NodeKind::Derived,
                totals.initial_contacts_needed,
            )
            .node(
                "averagePerContact",
                "Average per Initial Contact",
                NodeKind::Headline,
                average_per_contact,
            )
            .operation(
                &["targetCommission", "commissionRate"],
                "totalPremium",
                "targetCommission ÷ (commissionRate ÷ 100)",
            )
            .operation(
                &["totalPremium", "caseSize"],
                "casesNeeded",
                "totalPremium ÷ caseSize",
            )
            .operation(
                &["casesNeeded", "closingRatio"],
                "appointmentsNeeded",
                "casesNeeded × closingRatio",
            )
            .operation(
                &["appointmentsNeeded", "openingRatio"],
                "prospectsNeeded",
                "appointmentsNeeded × openingRatio",
            )
            .operation(
                &["prospectsNeeded", "approachRatio"],
                "initialContactsNeeded",
                "prospectsNeeded × approachRatio",
            )
            .operation(
                &["targetCommission", "initialContactsNeeded"],
                "averagePerContact",
                "targetCommission ÷ initialContactsNeeded",
            )
            .build()
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    pub fn node(
        &self,
        key: &str,
    ) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.key == key)
    }

    /// Edges whose target is `key`.
    pub fn edges_into<'a>(
        &'a self,
        key: &'a str,
    ) -> impl Iterator<Item = &'a DiagramEdge> + 'a {
        self.edges.iter().filter(move |e| e.to == key)
    }
}

/// Accumulates nodes and edges for a [`FunnelDiagram`].
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl DiagramBuilder {
    pub fn node(
        mut self,
        key: &'static str,
        label: &'static str,
        kind: NodeKind,
        value: f64,
    ) -> Self {
        self.nodes.push(DiagramNode {
            key,
            label,
            kind,
            value,
        });
        self
    }

    pub fn edge(
        mut self,
        from: &'static str,
        to: &'static str,
        operation: impl Into<String>,
    ) -> Self {
        self.edges.push(DiagramEdge {
            from,
            to,
            operation: operation.into(),
        });
        self
    }

    /// Adds one edge from each operand into `result`, all sharing `operation`.
    pub fn operation(
        mut self,
        operands: &[&'static str],
        result: &'static str,
        operation: &str,
    ) -> Self {
        for operand in operands {
            self = self.edge(*operand, result, operation);
        }
        self
    }

    pub fn build(self) -> FunnelDiagram {
        FunnelDiagram {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
