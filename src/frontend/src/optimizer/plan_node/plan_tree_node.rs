// Copyright 2025 RisingWave Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Traits to access the inputs of a plan node.
//!
//! Implement [`PlanTreeNodeUnary`] or [`PlanTreeNodeBinary`] for a node and call the matching
//! `impl_plan_tree_node_for_*!` macro to derive [`PlanTreeNode`] from it.

use smallvec::SmallVec;

use super::PlanRef;

/// The trait for accessing the inputs of a plan node. Inputs are returned in order and never
/// contain the cop plans of a reader.
pub trait PlanTreeNode {
    /// Get input nodes of the plan.
    fn inputs(&self) -> SmallVec<[PlanRef; 2]>;
}

/// See [`PlanTreeNode`](super)
pub trait PlanTreeNodeLeaf {}

/// See [`PlanTreeNode`](super)
pub trait PlanTreeNodeUnary {
    fn input(&self) -> PlanRef;
}

/// See [`PlanTreeNode`](super)
pub trait PlanTreeNodeBinary {
    fn left(&self) -> PlanRef;
    fn right(&self) -> PlanRef;
}

macro_rules! impl_plan_tree_node_for_leaf {
    ($leaf_node_type:ident) => {
        impl crate::optimizer::plan_node::PlanTreeNodeLeaf for $leaf_node_type {}

        impl crate::optimizer::plan_node::PlanTreeNode for $leaf_node_type {
            fn inputs(&self) -> smallvec::SmallVec<[crate::optimizer::plan_node::PlanRef; 2]> {
                smallvec::smallvec![]
            }
        }
    };
}

macro_rules! impl_plan_tree_node_for_unary {
    ($unary_node_type:ident) => {
        impl crate::optimizer::plan_node::PlanTreeNode for $unary_node_type {
            fn inputs(&self) -> smallvec::SmallVec<[crate::optimizer::plan_node::PlanRef; 2]> {
                smallvec::smallvec![
                    crate::optimizer::plan_node::PlanTreeNodeUnary::input(self)
                ]
            }
        }
    };
}

macro_rules! impl_plan_tree_node_for_binary {
    ($binary_node_type:ident) => {
        impl crate::optimizer::plan_node::PlanTreeNode for $binary_node_type {
            fn inputs(&self) -> smallvec::SmallVec<[crate::optimizer::plan_node::PlanRef; 2]> {
                smallvec::smallvec![
                    crate::optimizer::plan_node::PlanTreeNodeBinary::left(self),
                    crate::optimizer::plan_node::PlanTreeNodeBinary::right(self)
                ]
            }
        }
    };
}
