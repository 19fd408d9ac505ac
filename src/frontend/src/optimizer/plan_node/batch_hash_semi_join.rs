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

use super::generic;
use super::{OperatorInfo, PlanBase, PlanNodeType, PlanRef, PlanTreeNodeBinary};
use crate::error::{PlanError, Result};
use crate::expr::FunctionCall;
use crate::utils::Describe;

/// `BatchHashSemiJoin` outputs the left rows that have (or, when anti, do not have) a match on
/// the right side. The left outer variants keep every left row and add a marker column instead.
#[derive(Debug)]
pub struct BatchHashSemiJoin {
    pub base: PlanBase,
    core: generic::Join<PlanRef>,
    equal_conditions: Vec<FunctionCall>,
}

impl BatchHashSemiJoin {
    /// Fails unless the join type is one of the semi join types.
    pub fn new(core: generic::Join<PlanRef>, equal_conditions: Vec<FunctionCall>) -> Result<Self> {
        if !core.join_type.is_semi() {
            return Err(PlanError::unsupported_join_type(
                PlanNodeType::BatchHashSemiJoin,
                core.join_type,
            ));
        }
        let base = PlanBase::new(core.left.ctx(), PlanNodeType::BatchHashSemiJoin);
        Ok(BatchHashSemiJoin {
            base,
            core,
            equal_conditions,
        })
    }

    pub fn core(&self) -> &generic::Join<PlanRef> {
        &self.core
    }

    /// Whether a marker column telling if the row matched is appended to the output.
    pub fn with_aux(&self) -> bool {
        self.core.join_type.with_aux()
    }

    pub fn anti(&self) -> bool {
        self.core.join_type.is_anti()
    }
}

impl PlanTreeNodeBinary for BatchHashSemiJoin {
    fn left(&self) -> PlanRef {
        self.core.left.clone()
    }

    fn right(&self) -> PlanRef {
        self.core.right.clone()
    }
}

impl_plan_tree_node_for_binary! { BatchHashSemiJoin }

impl Describe for BatchHashSemiJoin {
    fn describe(&self) -> String {
        let info = OperatorInfo::default()
            .field("right", self.core.right.id())
            .flag("aux", self.with_aux())
            .flag("anti", self.anti())
            .list("equal", &self.equal_conditions);
        self.core.describe_conditions(info).finish()
    }
}
