//! Non-chronological backtracking.

use crate::assignment::Assignment;
use crate::graph::ImplicationGraph;
use crate::literal::Variable;
use crate::trail::Trail;

/// Undoes every assignment above `target_level`, prunes retained nodes'
/// `children` lists, and deletes trail levels above `target_level`. The
/// learned clause itself is added to the formula by the caller; whether that
/// happens before or after this call makes no difference to the result.
pub fn backtrack(assignment: &mut Assignment, graph: &mut ImplicationGraph, trail: &mut Trail, target_level: u32) {
    for idx in 0..graph.num_variables() {
        let variable = Variable::new(idx as u32 + 1);
        match graph.node(variable).level {
            Some(level) if level > target_level => {
                assignment.unassign(variable);
                graph.clear(variable);
            }
            Some(_) => {
                graph.prune_children(variable, target_level);
            }
            None => {}
        }
    }

    trail.truncate(target_level);
    log::debug!("backtracked to level {}", target_level);
}
