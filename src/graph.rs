//! The implication graph.
//!
//! One [`ImplicationNode`] per variable, addressed by array index rather than
//! pointers so the graph stays a plain `Vec` with no cyclic ownership.

use crate::assignment::Value;
use crate::clause::ClauseId;
use crate::literal::Variable;

#[derive(Debug, Clone)]
pub struct ImplicationNode {
    pub value: Value,
    /// -1 (represented as `None`) when unassigned, else the decision level.
    pub level: Option<u32>,
    /// `None` for decisions and unassigned variables; the antecedent clause
    /// otherwise.
    pub antecedent: Option<ClauseId>,
    pub parents: Vec<Variable>,
    pub children: Vec<Variable>,
}

impl ImplicationNode {
    fn unassigned() -> Self {
        ImplicationNode {
            value: Value::Unassign,
            level: None,
            antecedent: None,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

}

#[derive(Debug)]
pub struct ImplicationGraph {
    nodes: Vec<ImplicationNode>,
}

impl ImplicationGraph {
    pub fn new(num_variables: usize) -> Self {
        ImplicationGraph {
            nodes: (0..num_variables).map(|_| ImplicationNode::unassigned()).collect(),
        }
    }

    pub fn node(&self, variable: Variable) -> &ImplicationNode {
        &self.nodes[variable.array_index()]
    }

    pub fn node_mut(&mut self, variable: Variable) -> &mut ImplicationNode {
        &mut self.nodes[variable.array_index()]
    }

    /// Records a decision assignment: no parents, no antecedent.
    pub fn record_decision(&mut self, variable: Variable, value: bool, level: u32) {
        let node = self.node_mut(variable);
        node.value = if value { Value::True } else { Value::False };
        node.level = Some(level);
        node.antecedent = None;
        node.parents.clear();
    }

    /// Records a propagated assignment, wiring parent/child edges to the
    /// other variables in `antecedent`.
    pub fn record_propagation(
        &mut self,
        variable: Variable,
        value: bool,
        level: u32,
        antecedent: ClauseId,
        parents: Vec<Variable>,
    ) {
        for &parent in &parents {
            self.node_mut(parent).children.push(variable);
        }
        let node = self.node_mut(variable);
        node.value = if value { Value::True } else { Value::False };
        node.level = Some(level);
        node.antecedent = Some(antecedent);
        node.parents = parents;
    }

    /// Undoes a node above the backjump target.
    pub fn clear(&mut self, variable: Variable) {
        let node = self.node_mut(variable);
        node.value = Value::Unassign;
        node.level = None;
        node.antecedent = None;
        node.parents.clear();
        node.children.clear();
    }

    /// Prunes `children` of a retained node to those still at or below
    /// `target_level`.
    pub fn prune_children(&mut self, variable: Variable, target_level: u32) {
        let mut children = std::mem::take(&mut self.nodes[variable.array_index()].children);
        children.retain(|&child| self.node(child).level.map_or(true, |l| l <= target_level));
        self.nodes[variable.array_index()].children = children;
    }

    pub fn num_variables(&self) -> usize {
        self.nodes.len()
    }
}
