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

use std::collections::HashSet;
use std::fmt::{self, Write};

use itertools::Itertools;
use tracing::debug;

use crate::error::Result;
use crate::optimizer::plan_link::set_parents_for_final_plan;
use crate::optimizer::plan_node::{PlanNodeId, PlanRef};

/// Layout of [`explain_to_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExplainFormat {
    /// One tab separated row per operator.
    #[default]
    Rows,
    /// Operators indented under their parent.
    Tree,
}

impl fmt::Display for ExplainFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExplainFormat::Rows => "ROWS",
            ExplainFormat::Tree => "TREE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExplainOptions {
    /// Show the `parents` and `children` columns.
    pub verbose: bool,
    pub format: ExplainFormat,
}

impl fmt::Display for ExplainOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default = Self::default();
        if *self == default {
            Ok(())
        } else {
            let mut option_strs = vec![];
            if self.verbose {
                option_strs.push("VERBOSE".to_owned());
            }
            if self.format != default.format {
                option_strs.push(format!("FORMAT {}", self.format));
            }
            write!(f, "{}", option_strs.iter().format(","))
        }
    }
}

/// Where an operator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    Root,
    /// Inside a cop plan, on the storage side.
    Cop,
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskType::Root => "root",
            TaskType::Cop => "cop",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainRow {
    pub id: PlanNodeId,
    pub parents: Vec<PlanNodeId>,
    pub children: Vec<PlanNodeId>,
    pub task: TaskType,
    pub operator_info: String,
}

/// Links `plan` and returns one row per operator in depth first order: an operator, then the cop
/// plans of a reader, then its inputs. A node shared by several parents gets a single row.
pub fn explain_physical_plan(plan: &PlanRef) -> Vec<ExplainRow> {
    set_parents_for_final_plan(plan);
    let mut rows = vec![];
    let mut visited = HashSet::new();
    explain_rows(plan, TaskType::Root, &mut visited, &mut rows);
    debug!(root = %plan.id(), rows = rows.len(), "explained physical plan");
    rows
}

fn explain_rows(
    plan: &PlanRef,
    task: TaskType,
    visited: &mut HashSet<PlanNodeId>,
    rows: &mut Vec<ExplainRow>,
) {
    if !visited.insert(plan.id()) {
        return;
    }
    let inputs = plan.inputs();
    rows.push(ExplainRow {
        id: plan.id(),
        parents: plan.parent_ids(),
        children: inputs.iter().map(|input| input.id()).collect(),
        task,
        operator_info: plan.describe(),
    });
    for cop_plan in plan.cop_plans() {
        explain_rows(&cop_plan, TaskType::Cop, visited, rows);
    }
    for input in &inputs {
        explain_rows(input, task, visited, rows);
    }
}

/// Explain the plan and return a string.
pub fn explain_to_string(plan: &PlanRef, options: &ExplainOptions) -> Result<String> {
    let mut output = String::new();
    match options.format {
        ExplainFormat::Rows => write_rows(&mut output, plan, options.verbose)?,
        ExplainFormat::Tree => write_tree(&mut output, plan, 0)?,
    }
    Ok(output)
}

fn write_rows(f: &mut impl Write, plan: &PlanRef, verbose: bool) -> fmt::Result {
    if verbose {
        writeln!(f, "id\tparents\tchildren\ttask\toperator info")?;
    } else {
        writeln!(f, "id\ttask\toperator info")?;
    }
    for row in explain_physical_plan(plan) {
        if verbose {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}",
                row.id,
                row.parents.iter().join(","),
                row.children.iter().join(","),
                row.task,
                row.operator_info
            )?;
        } else {
            writeln!(f, "{}\t{}\t{}", row.id, row.task, row.operator_info)?;
        }
    }
    Ok(())
}

/// Write explain the whole plan tree. A shared node is written under each of its parents.
fn write_tree(f: &mut impl Write, plan: &PlanRef, level: usize) -> fmt::Result {
    write!(f, "{}{}", " ".repeat(level * 2), plan.id())?;
    let info = plan.describe();
    if !info.is_empty() {
        write!(f, ": {}", info)?;
    }
    writeln!(f)?;
    for cop_plan in plan.cop_plans() {
        write_tree(f, &cop_plan, level + 1)?;
    }
    for input in plan.inputs() {
        write_tree(f, &input, level + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;
    use crate::expr::{ExprImpl, ExprType};
    use crate::optimizer::OptimizerContext;
    use crate::optimizer::plan_node::generic::{self, JoinSide, JoinType};
    use crate::optimizer::plan_node::{
        BatchDual, BatchFilter, BatchHashJoin, BatchIndexReader, BatchIndexScan, BatchLimit,
        BatchTableReader, BatchTableScan,
    };

    #[test]
    fn test_options_display() {
        assert_eq!(ExplainOptions::default().to_string(), "");
        let options = ExplainOptions {
            verbose: true,
            format: ExplainFormat::Tree,
        };
        assert_eq!(options.to_string(), "VERBOSE,FORMAT TREE");
        let options = ExplainOptions {
            verbose: false,
            format: ExplainFormat::Tree,
        };
        assert_eq!(options.to_string(), "FORMAT TREE");
    }

    /// A limit over a hash join between a table reader and a dual.
    fn reader_join_plan() -> PlanRef {
        let ctx = OptimizerContext::mock();
        let scan: PlanRef = BatchTableScan::new(ctx.clone(), "t", false).into();
        let cop_filter: PlanRef = BatchFilter::new(
            scan,
            vec![ExprImpl::binary(
                ExprType::GreaterThan,
                ExprImpl::column("t", "a"),
                ExprImpl::literal(1i64),
            )],
        )
        .into();
        let reader: PlanRef = BatchTableReader::new(cop_filter).into();
        let dual: PlanRef = BatchDual::new(ctx, 0).into();
        let join: PlanRef = BatchHashJoin::new(
            generic::Join::new(reader, dual, JoinType::Inner),
            vec![],
            JoinSide::Right,
        )
        .into();
        BatchLimit::new(join, 0, 10).into()
    }

    #[test]
    fn test_explain_rows() {
        let plan = reader_join_plan();
        let rows = explain_physical_plan(&plan);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2].task, TaskType::Root);
        assert_eq!(rows[3].task, TaskType::Cop);
        assert!(rows[3].parents.is_empty());

        let output = explain_to_string(
            &plan,
            &ExplainOptions {
                verbose: true,
                ..Default::default()
            },
        )
        .unwrap();
        expect![[r#"
            id|parents|children|task|operator info
            Limit_6||HashJoin_5|root|offset:0, count:10
            HashJoin_5|Limit_6|TableReader_3,Dual_4|root|inner join, small:Dual_4
            TableReader_3|HashJoin_5||root|
            Filter_2||TableScan_1|cop|gt(t.a, 1)
            TableScan_1|Filter_2||cop|table:t, keep order:false
            Dual_4|HashJoin_5||root|rows:0
        "#]]
        .assert_eq(&output.replace('\t', "|"));

        let output = explain_to_string(&plan, &ExplainOptions::default()).unwrap();
        expect![[r#"
            id|task|operator info
            Limit_6|root|offset:0, count:10
            HashJoin_5|root|inner join, small:Dual_4
            TableReader_3|root|
            Filter_2|cop|gt(t.a, 1)
            TableScan_1|cop|table:t, keep order:false
            Dual_4|root|rows:0
        "#]]
        .assert_eq(&output.replace('\t', "|"));
    }

    #[test]
    fn test_explain_tree() {
        let plan = reader_join_plan();
        let output = explain_to_string(
            &plan,
            &ExplainOptions {
                format: ExplainFormat::Tree,
                ..Default::default()
            },
        )
        .unwrap();
        expect![[r#"
            Limit_6: offset:0, count:10
              HashJoin_5: inner join, small:Dual_4
                TableReader_3
                  Filter_2: gt(t.a, 1)
                    TableScan_1: table:t, keep order:false
                Dual_4: rows:0
        "#]]
        .assert_eq(&output);
    }

    #[test]
    fn test_explain_nested_reader() {
        let ctx = OptimizerContext::mock();
        let scan: PlanRef = BatchIndexScan::new(ctx, "t", "idx_a", true).into();
        let limit: PlanRef = BatchLimit::new(scan, 0, 10).into();
        let index_reader: PlanRef = BatchIndexReader::new(limit).into();
        let table_reader: PlanRef = BatchTableReader::new(index_reader).into();
        let plan: PlanRef = BatchFilter::new(
            table_reader,
            vec![ExprImpl::binary(
                ExprType::GreaterThan,
                ExprImpl::column("t", "a"),
                ExprImpl::literal(1i64),
            )],
        )
        .into();

        let output = explain_to_string(
            &plan,
            &ExplainOptions {
                verbose: true,
                ..Default::default()
            },
        )
        .unwrap();
        expect![[r#"
            id|parents|children|task|operator info
            Filter_5||TableReader_4|root|gt(t.a, 1)
            TableReader_4|Filter_5||root|
            IndexReader_3|||cop|
            Limit_2||IndexScan_1|cop|offset:0, count:10
            IndexScan_1|Limit_2||cop|table:t, index:idx_a, keep order:true
        "#]]
        .assert_eq(&output.replace('\t', "|"));
    }
}
