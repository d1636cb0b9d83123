//! Decision-tree ensemble classifier.
//!
//! Trees use the flattened parallel-array layout common to tree exporters:
//! node `i` is a leaf when `children_left[i] == -1`; otherwise samples with
//! `x[feature[i]] <= threshold[i]` go to `children_left[i]` and the rest to
//! `children_right[i]`. Each leaf stores per-class weights in `value[i]`.

use serde::{Deserialize, Serialize};

/// Marker for "no child" in the flattened layout.
pub const LEAF: i64 = -1;

/// A single binary decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node `[class_0_weight, class_1_weight]`.
    pub value: Vec<[f64; 2]>,
}

impl DecisionTree {
    fn validate(&self, feature_count: usize) -> Result<(), String> {
        let nodes = self.children_left.len();
        if nodes == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != nodes
            || self.feature.len() != nodes
            || self.threshold.len() != nodes
            || self.value.len() != nodes
        {
            return Err("tree arrays have mismatched lengths".to_string());
        }

        for i in 0..nodes {
            let (left, right) = (self.children_left[i], self.children_right[i]);
            if left == LEAF {
                if right != LEAF {
                    return Err(format!("node {i} has a right child but no left child"));
                }
                let [w0, w1] = self.value[i];
                if !(w0.is_finite() && w1.is_finite()) || w0 < 0.0 || w1 < 0.0 || w0 + w1 <= 0.0 {
                    return Err(format!("leaf {i} has invalid class weights"));
                }
                continue;
            }

            for child in [left, right] {
                // Children must point forward so traversal always terminates.
                if child <= i as i64 || child as usize >= nodes {
                    return Err(format!("node {i} has out-of-range child {child}"));
                }
            }
            let feature = self.feature[i];
            if feature < 0 || feature as usize >= feature_count {
                return Err(format!("node {i} splits on unknown feature {feature}"));
            }
            if !self.threshold[i].is_finite() {
                return Err(format!("node {i} has a non-finite threshold"));
            }
        }

        Ok(())
    }

    /// Class-1 fraction of the leaf reached by `values`.
    fn probability(&self, values: &[f64]) -> f64 {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if values[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        let [w0, w1] = self.value[node];
        w1 / (w0 + w1)
    }
}

/// Ensemble whose probability is the mean of its trees' leaf fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest contains no trees".to_string());
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(feature_count)
                .map_err(|reason| format!("tree {index}: {reason}"))?;
        }
        Ok(())
    }

    pub fn probability(&self, values: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.probability(values)).sum();
        total / self.trees.len() as f64
    }
}
