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

use smallvec::SmallVec;

use super::generic::JoinSide;
use super::{PlanBase, PlanNodeType, PlanRef, PlanTreeNode};
use crate::error::{PlanError, Result};
use crate::utils::Describe;

/// `BatchApply` runs a join once per outer row, with the inner side re-evaluated under the
/// correlated values of that row.
///
/// The wrapped join is not a node of the graph on its own: the apply takes over its inputs.
#[derive(Debug)]
pub struct BatchApply {
    pub base: PlanBase,
    join: PlanRef,
    /// Side of the correlated input.
    right_side: JoinSide,
}

impl BatchApply {
    /// Fails if `join` is not a join operator.
    pub fn new(join: PlanRef, right_side: JoinSide) -> Result<Self> {
        if !join.node_type().is_join() {
            return Err(PlanError::not_a_join(join.node_type()));
        }
        let base = PlanBase::new(join.ctx(), PlanNodeType::BatchApply);
        Ok(BatchApply {
            base,
            join,
            right_side,
        })
    }

    pub fn join(&self) -> PlanRef {
        self.join.clone()
    }

    pub fn right_side(&self) -> JoinSide {
        self.right_side
    }
}

impl PlanTreeNode for BatchApply {
    fn inputs(&self) -> SmallVec<[PlanRef; 2]> {
        self.join.inputs()
    }
}

impl Describe for BatchApply {
    fn describe(&self) -> String {
        let inputs = self.inputs();
        format!(
            "{}, right:{}",
            self.join.describe(),
            inputs[self.right_side.index()].id()
        )
    }
}
