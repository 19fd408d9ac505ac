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
use crate::expr::FunctionCall;
use crate::utils::Describe;

/// `BatchHashJoin` builds a hash table over the small side and probes it with the other side.
#[derive(Debug)]
pub struct BatchHashJoin {
    pub base: PlanBase,
    core: generic::Join<PlanRef>,
    /// `eq` calls over one column of each side.
    equal_conditions: Vec<FunctionCall>,
    small_side: JoinSide,
}

impl BatchHashJoin {
    pub fn new(
        core: generic::Join<PlanRef>,
        equal_conditions: Vec<FunctionCall>,
        small_side: JoinSide,
    ) -> Self {
        let base = PlanBase::new(core.left.ctx(), PlanNodeType::BatchHashJoin);
        BatchHashJoin {
            base,
            core,
            equal_conditions,
            small_side,
        }
    }

    pub fn core(&self) -> &generic::Join<PlanRef> {
        &self.core
    }

    pub fn equal_conditions(&self) -> &[FunctionCall] {
        &self.equal_conditions
    }

    pub fn small_side(&self) -> JoinSide {
        self.small_side
    }
}

impl PlanTreeNodeBinary for BatchHashJoin {
    fn left(&self) -> PlanRef {
        self.core.left.clone()
    }

    fn right(&self) -> PlanRef {
        self.core.right.clone()
    }
}

impl_plan_tree_node_for_binary! { BatchHashJoin }

impl Describe for BatchHashJoin {
    fn describe(&self) -> String {
        let info = OperatorInfo::new(self.core.join_type)
            .field("small", self.core.child(self.small_side).id())
            .list("equal", &self.equal_conditions);
        self.core.describe_conditions(info).finish()
    }
}
