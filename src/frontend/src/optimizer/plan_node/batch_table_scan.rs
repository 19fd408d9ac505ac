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

use super::{OperatorInfo, PlanBase, PlanNodeType};
use crate::optimizer::OptimizerContextRef;
use crate::utils::Describe;

/// `BatchTableScan` reads rows of a table on the storage side. It only appears inside the cop
/// plans of a reader.
#[derive(Debug)]
pub struct BatchTableScan {
    pub base: PlanBase,
    table_name: String,
    keep_order: bool,
}

impl BatchTableScan {
    pub fn new(ctx: OptimizerContextRef, table_name: &str, keep_order: bool) -> Self {
        let base = PlanBase::new(ctx, PlanNodeType::BatchTableScan);
        BatchTableScan {
            base,
            table_name: table_name.to_owned(),
            keep_order,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Whether rows must come out in primary key order.
    pub fn keep_order(&self) -> bool {
        self.keep_order
    }
}

impl_plan_tree_node_for_leaf! { BatchTableScan }

impl Describe for BatchTableScan {
    fn describe(&self) -> String {
        OperatorInfo::default()
            .field("table", &self.table_name)
            .field("keep order", self.keep_order)
            .finish()
    }
}
