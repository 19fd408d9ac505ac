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

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{PlanNode, PlanNodeType, PlanRef};
use crate::optimizer::OptimizerContextRef;

/// The identity of a plan node, unique within one [`OptimizerContext`].
///
/// Graph algorithms compare nodes by id only, never by address.
///
/// [`OptimizerContext`]: crate::optimizer::OptimizerContext
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanNodeId(Rc<str>);

impl PlanNodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for PlanNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

/// the common fields of all nodes, please make a field named `base` in
/// every planNode and correctly value it when construct the planNode.
pub struct PlanBase {
    id: PlanNodeId,
    ctx: OptimizerContextRef,
    /// Back references to the nodes using this node as an input. Only written by the linker.
    parents: RefCell<Vec<Weak<dyn PlanNode>>>,
}

impl PlanBase {
    /// Allocates an id of the form `<Operator>_<n>` from `ctx`.
    pub fn new(ctx: OptimizerContextRef, node_type: PlanNodeType) -> Self {
        let id = format!("{}_{}", node_type, ctx.next_plan_node_id());
        Self {
            id: PlanNodeId(id.into()),
            ctx,
            parents: RefCell::new(vec![]),
        }
    }

    pub fn id(&self) -> &PlanNodeId {
        &self.id
    }

    pub fn ctx(&self) -> OptimizerContextRef {
        self.ctx.clone()
    }

    /// Parents that have been dropped since the last linking pass are skipped.
    pub fn parents(&self) -> Vec<PlanRef> {
        self.parents
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    pub(crate) fn reset_parents(&self) {
        self.parents.borrow_mut().clear();
    }

    pub(crate) fn add_parent(&self, parent: &PlanRef) {
        self.parents.borrow_mut().push(Rc::downgrade(parent));
    }
}

impl fmt::Debug for PlanBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanBase")
            .field("id", &self.id)
            .field("parents", &self.parents.borrow().len())
            .finish()
    }
}
