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

//! Defines all kinds of node in the physical plan graph, each node represents an execution
//! operator chosen by the optimizer.
//!
//! Nodes are immutable once built. A node only stores its inputs' references, so the same input
//! can be shared by several parents and the plan forms a DAG. The one mutable part of a node is
//! its parent list in [`PlanBase`], which is recomputed wholesale by
//! [`set_parents_for_final_plan`](crate::optimizer::plan_link::set_parents_for_final_plan).
//!
//! The reader nodes ([`BatchTableReader`], [`BatchIndexReader`] and [`BatchIndexLookUpReader`])
//! carry plans that run on the storage side. Those cop plans are not inputs of the reader; use
//! `cop_plans` on `dyn PlanNode` to reach them.
//!
//! So when you want to add a new node, make sure:
//! - each field in the node struct is private
//! - the node is constructed in a unified `new()` function
//! - it is added to [`for_all_plan_nodes`]
//! - it implements [`Describe`] with the node's one-line operator info

use std::fmt::Debug;
use std::rc::Rc;

use downcast_rs::{Downcast, impl_downcast};
use paste::paste;
use smallvec::{SmallVec, smallvec};

use super::OptimizerContextRef;
use crate::utils::Describe;

/// The common trait over all plan nodes. Used by the linker and explain which treat all nodes as
/// `dyn PlanNode`.
pub trait PlanNode: PlanTreeNode + Describe + Debug + Downcast {
    fn node_type(&self) -> PlanNodeType;
    fn plan_base(&self) -> &PlanBase;
}

impl_downcast!(PlanNode);
pub type PlanRef = Rc<dyn PlanNode>;

impl dyn PlanNode {
    pub fn id(&self) -> PlanNodeId {
        self.plan_base().id().clone()
    }

    pub fn ctx(&self) -> OptimizerContextRef {
        self.plan_base().ctx()
    }

    /// The nodes that list this node as an input, as of the last linking pass.
    pub fn parents(&self) -> Vec<PlanRef> {
        self.plan_base().parents()
    }

    pub fn parent_ids(&self) -> Vec<PlanNodeId> {
        self.parents().iter().map(|p| p.id()).collect()
    }

    /// The roots of the plans a reader pushes down to the storage side: the table plan of a
    /// table reader, the index plan of an index reader, and the index plan then the table plan of
    /// an index lookup reader. Empty for every other node.
    pub fn cop_plans(&self) -> SmallVec<[PlanRef; 2]> {
        if let Some(reader) = self.as_batch_table_reader() {
            smallvec![reader.table_plan()]
        } else if let Some(reader) = self.as_batch_index_reader() {
            smallvec![reader.index_plan()]
        } else if let Some(reader) = self.as_batch_index_look_up_reader() {
            smallvec![reader.index_plan(), reader.table_plan()]
        } else {
            smallvec![]
        }
    }
}

impl PlanNodeType {
    pub fn is_join(self) -> bool {
        matches!(
            self,
            PlanNodeType::BatchIndexJoin
                | PlanNodeType::BatchHashJoin
                | PlanNodeType::BatchHashSemiJoin
                | PlanNodeType::BatchMergeJoin
        )
    }
}

impl std::fmt::Display for PlanNodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

mod plan_base;
pub use plan_base::*;
#[macro_use]
mod plan_tree_node;
pub use plan_tree_node::*;
mod explain;
pub use explain::*;
pub mod generic;

mod batch_agg;
mod batch_apply;
mod batch_dual;
mod batch_filter;
mod batch_hash_join;
mod batch_hash_semi_join;
mod batch_index_join;
mod batch_index_lookup_reader;
mod batch_index_reader;
mod batch_index_scan;
mod batch_limit;
mod batch_merge_join;
mod batch_project;
mod batch_sort;
mod batch_table_reader;
mod batch_table_scan;

pub use batch_agg::{AggType, BatchAgg};
pub use batch_apply::BatchApply;
pub use batch_dual::BatchDual;
pub use batch_filter::BatchFilter;
pub use batch_hash_join::BatchHashJoin;
pub use batch_hash_semi_join::BatchHashSemiJoin;
pub use batch_index_join::BatchIndexJoin;
pub use batch_index_lookup_reader::BatchIndexLookUpReader;
pub use batch_index_reader::BatchIndexReader;
pub use batch_index_scan::BatchIndexScan;
pub use batch_limit::BatchLimit;
pub use batch_merge_join::BatchMergeJoin;
pub use batch_project::BatchProject;
pub use batch_sort::BatchSort;
pub use batch_table_reader::BatchTableReader;
pub use batch_table_scan::BatchTableScan;

/// `for_all_plan_nodes` includes all plan nodes. If you added a new plan node
/// inside the project, be sure to add here.
///
/// Every tuple has two elements, where `{ convention, name }`
/// You can use it as follows
/// ```rust
/// macro_rules! use_plan {
///     ([], $({ $convention:ident, $name:ident }),*) => {};
/// }
/// planlink_frontend::for_all_plan_nodes! { use_plan }
/// ```
/// See the following implementations for example.
#[macro_export]
macro_rules! for_all_plan_nodes {
    ($macro:ident $(, $x:tt)*) => {
        $macro! {
            [$($x),*]
            , { Batch, Filter }
            , { Batch, Project }
            , { Batch, Dual }
            , { Batch, Sort }
            , { Batch, Limit }
            , { Batch, Agg }
            , { Batch, Apply }
            , { Batch, IndexJoin }
            , { Batch, HashJoin }
            , { Batch, HashSemiJoin }
            , { Batch, MergeJoin }
            , { Batch, TableReader }
            , { Batch, IndexReader }
            , { Batch, IndexLookUpReader }
            , { Batch, TableScan }
            , { Batch, IndexScan }
        }
    };
}

/// impl [`PlanNodeType`] fn for each node.
macro_rules! enum_plan_node_type {
    ([], $( { $convention:ident, $name:ident }),*) => {
        paste!{
            /// each enum value represent a PlanNode struct type, help us to dispatch and downcast
            #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
            pub enum PlanNodeType {
                $( [<$convention $name>] ),*
            }

            impl PlanNodeType {
                /// The operator name used in node ids and explain output.
                pub fn name(self) -> &'static str {
                    match self {
                        $( PlanNodeType::[<$convention $name>] => stringify!($name) ),*
                    }
                }
            }

            $(impl PlanNode for [<$convention $name>] {
                fn node_type(&self) -> PlanNodeType {
                    PlanNodeType::[<$convention $name>]
                }
                fn plan_base(&self) -> &PlanBase {
                    &self.base
                }
            })*
        }
    }
}

for_all_plan_nodes! { enum_plan_node_type }

/// impl fn `plan_ref` for each node.
macro_rules! impl_plan_ref {
    ([], $( { $convention:ident, $name:ident }),*) => {
        paste!{
            $(impl From<[<$convention $name>]> for PlanRef {
                fn from(plan: [<$convention $name>]) -> Self {
                    std::rc::Rc::new(plan)
                }
            })*
        }
    }
}

for_all_plan_nodes! { impl_plan_ref }

/// impl plan node downcast fn for each node.
macro_rules! impl_down_cast_fn {
    ([], $( { $convention:ident, $name:ident }),*) => {
        paste!{
            impl dyn PlanNode {
                $( pub fn [< as_$convention:snake _ $name:snake>](&self) -> Option<&[<$convention $name>]> {
                    self.downcast_ref::<[<$convention $name>]>()
                } )*
            }
        }
    }
}

for_all_plan_nodes! { impl_down_cast_fn }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::OptimizerContext;

    #[test]
    fn test_node_type_name() {
        assert_eq!(PlanNodeType::BatchIndexLookUpReader.to_string(), "IndexLookUpReader");
        assert!(PlanNodeType::BatchMergeJoin.is_join());
        assert!(!PlanNodeType::BatchApply.is_join());
    }

    #[test]
    fn test_cop_plans() {
        let ctx = OptimizerContext::mock();
        let index_scan: PlanRef = BatchIndexScan::new(ctx.clone(), "t", "idx_a", true).into();
        let table_scan: PlanRef = BatchTableScan::new(ctx.clone(), "t", false).into();
        let lookup: PlanRef =
            BatchIndexLookUpReader::new(index_scan.clone(), table_scan.clone()).into();
        let ids = lookup.cop_plans().iter().map(|p| p.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec![index_scan.id(), table_scan.id()]);
        assert!(lookup.inputs().is_empty());

        let reader: PlanRef = BatchTableReader::new(table_scan.clone()).into();
        assert_eq!(reader.cop_plans().len(), 1);
        assert!(table_scan.cop_plans().is_empty());
        assert!(reader.as_batch_table_reader().is_some());
        assert!(reader.as_batch_index_reader().is_none());
    }
}
