use crate::{Error, Result, node::Node};

/// An immutable TSP instance: node coordinates, set once at load.
#[derive(Clone, Debug)]
pub struct Instance {
    nodes: Vec<Node>,
}

impl Instance {
    pub fn new(nodes: Vec<Node>) -> Result<Self> {
        if let Some(idx) = nodes.iter().position(|node| !node.is_valid()) {
            return Err(Error::invalid_data(format!(
                "node {} has non-finite coordinates",
                idx + 1
            )));
        }
        Ok(Self { nodes })
    }

    pub fn n(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, idx: usize) -> Node {
        self.nodes[idx]
    }

    /// Rounded Euclidean distance between nodes `i` and `j`.
    /// Symmetric, zero iff `i == j`, always integer-valued.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.nodes[i].dist(&self.nodes[j])
    }
}
