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

use super::generic::{self, JoinSide};
use super::{OperatorInfo, PlanBase, PlanNodeType, PlanRef, PlanTreeNodeBinary};
use crate::expr::ColumnRef;
use crate::utils::Describe;

/// `BatchIndexJoin` drives the join from the outer side and looks up matching inner rows through
/// an index on the inner join keys.
#[derive(Debug)]
pub struct BatchIndexJoin {
    pub base: PlanBase,
    core: generic::Join<PlanRef>,
    outer_side: JoinSide,
    outer_join_keys: Vec<ColumnRef>,
    inner_join_keys: Vec<ColumnRef>,
}

impl BatchIndexJoin {
    pub fn new(
        core: generic::Join<PlanRef>,
        outer_side: JoinSide,
        outer_join_keys: Vec<ColumnRef>,
        inner_join_keys: Vec<ColumnRef>,
    ) -> Self {
        let base = PlanBase::new(core.left.ctx(), PlanNodeType::BatchIndexJoin);
        BatchIndexJoin {
            base,
            core,
            outer_side,
            outer_join_keys,
            inner_join_keys,
        }
    }

    pub fn core(&self) -> &generic::Join<PlanRef> {
        &self.core
    }

    pub fn outer_side(&self) -> JoinSide {
        self.outer_side
    }
}

impl PlanTreeNodeBinary for BatchIndexJoin {
    fn left(&self) -> PlanRef {
        self.core.left.clone()
    }

    fn right(&self) -> PlanRef {
        self.core.right.clone()
    }
}

impl_plan_tree_node_for_binary! { BatchIndexJoin }

impl Describe for BatchIndexJoin {
    fn describe(&self) -> String {
        let info = OperatorInfo::default()
            .field("outer", self.core.child(self.outer_side).id())
            .list("outer key", &self.outer_join_keys)
            .list("inner key", &self.inner_join_keys);
        self.core.describe_conditions(info).finish()
    }
}
