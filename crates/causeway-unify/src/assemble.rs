//! Wire one activity's classification into the unified graph.

use causeway_core::GateKind;

use crate::classify::Classification;
use crate::context::UnificationContext;
use crate::graph::{NodeRole, UnifiedGraph};

/// Add the gate nodes and edges described by `classification` for `activity`.
///
/// Returns the outer gate label, if one was created. Edges are written in the
/// context's direction: with predecessors every edge is reversed, so gates
/// act as joins in front of the activity.
pub fn assemble(
    graph: &mut UnifiedGraph,
    activity: &str,
    classification: &Classification,
    ctx: &mut UnificationContext,
) -> Option<String> {
    for replacement in &classification.replacements {
        graph.ensure_node(&replacement.label, NodeRole::Gate(GateKind::And));
        for member in &replacement.members {
            link(graph, ctx, &replacement.label, member);
        }
    }

    let Some(kind) = classification.kind else {
        for branch in &classification.payload {
            for target in branch.targets() {
                link(graph, ctx, activity, target);
            }
        }
        return None;
    };

    let gate = ctx.next_label(kind);
    graph.ensure_node(&gate, NodeRole::Gate(kind));
    link(graph, ctx, activity, &gate);
    for branch in &classification.payload {
        for target in branch.targets() {
            link(graph, ctx, &gate, target);
        }
    }
    Some(gate)
}

fn link(graph: &mut UnifiedGraph, ctx: &UnificationContext, from: &str, to: &str) {
    let (from, to) = ctx.direction().orient(from, to);
    graph.add_edge(from, to);
}
