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

//! Links every node of a final physical plan back to its parents.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::plan_node::{PlanNodeId, PlanRef};

/// Recomputes the parent list of every node reachable from `plan` through inputs, and of every
/// node of the cop plans held by the readers found on the way.
///
/// A node shared by several parents ends up with one entry per parent. Running it again gives the
/// same result, so it can be called after the plan is rebuilt.
///
/// The root of a cop plan gets no parent entry for its reader. Cop plans are linked on their own,
/// as separate graphs that run on the storage side.
///
/// `plan` must not contain a cycle through inputs, and no node may list the same input twice.
pub fn set_parents_for_final_plan(plan: &PlanRef) {
    let all_plans = collect_and_reset(plan);
    link_parents(plan);
    debug!(
        root = %plan.id(),
        nodes = all_plans.len(),
        "linked parents of plan"
    );
}

/// Visits the graph breadth first, clearing the parent lists and relinking the cop plans.
/// Returns each reachable node once, in visiting order.
pub(crate) fn collect_and_reset(plan: &PlanRef) -> Vec<PlanRef> {
    let mut all_plans = vec![plan.clone()];
    let mut seen: HashSet<PlanNodeId> = HashSet::from([plan.id()]);
    let mut i = 0;
    while i < all_plans.len() {
        let cur = all_plans[i].clone();
        cur.plan_base().reset_parents();
        for cop_plan in cur.cop_plans() {
            trace!(reader = %cur.id(), cop_plan = %cop_plan.id(), "linking cop plan");
            set_parents_for_final_plan(&cop_plan);
        }
        for input in cur.inputs() {
            if seen.insert(input.id()) {
                all_plans.push(input);
            }
        }
        i += 1;
    }
    all_plans
}

/// Adds `cur` to the parents of each of its inputs, expanding every node's inputs only the first
/// time the node is reached.
fn link_parents(plan: &PlanRef) {
    let mut queue = vec![plan.clone()];
    let mut expanded: HashSet<PlanNodeId> = HashSet::from([plan.id()]);
    let mut i = 0;
    while i < queue.len() {
        let cur = queue[i].clone();
        for input in cur.inputs() {
            input.plan_base().add_parent(&cur);
            if expanded.insert(input.id()) {
                queue.push(input);
            }
        }
        i += 1;
    }
}
