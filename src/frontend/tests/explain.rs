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

use expect_test::expect;
use planlink_frontend::PlanRef;
use planlink_frontend::expr::{AggCall, ColumnRef, ExprImpl, ExprType, FunctionCall};
use planlink_frontend::handler::{ExplainFormat, ExplainOptions, explain_to_string};
use planlink_frontend::optimizer::OptimizerContext;
use planlink_frontend::optimizer::plan_node::generic::{Join, JoinSide, JoinType};
use planlink_frontend::optimizer::plan_node::*;
use planlink_frontend::optimizer::property::{ByItem, Direction};
use planlink_frontend::set_parents_for_final_plan;

fn rows(plan: &PlanRef, verbose: bool) -> String {
    let options = ExplainOptions {
        verbose,
        format: ExplainFormat::Rows,
    };
    explain_to_string(plan, &options).unwrap().replace('\t', "|")
}

fn tree(plan: &PlanRef) -> String {
    let options = ExplainOptions {
        verbose: false,
        format: ExplainFormat::Tree,
    };
    explain_to_string(plan, &options).unwrap()
}

/// A projection over a correlated semi join between an index lookup and a filtered table read.
fn full_plan() -> PlanRef {
    let ctx = OptimizerContext::mock();
    let index_scan: PlanRef = BatchIndexScan::new(ctx.clone(), "t", "idx_a", true).into();
    let t_scan: PlanRef = BatchTableScan::new(ctx.clone(), "t", false).into();
    let lookup: PlanRef = BatchIndexLookUpReader::new(index_scan, t_scan).into();

    let s_scan: PlanRef = BatchTableScan::new(ctx.clone(), "s", false).into();
    let s_filter: PlanRef = BatchFilter::new(
        s_scan,
        vec![ExprImpl::binary(
            ExprType::Equal,
            ExprImpl::column("s", "c"),
            ExprImpl::literal("x"),
        )],
    )
    .into();
    let reader: PlanRef = BatchTableReader::new(s_filter).into();

    let merge_join: PlanRef = BatchMergeJoin::new(
        Join::new(lookup, reader, JoinType::LeftOuter),
        vec![FunctionCall::new(
            ExprType::Equal,
            vec![ExprImpl::column("t", "a"), ExprImpl::column("s", "a")],
        )],
        vec![None],
        Direction::Ascending,
        vec![ColumnRef::new(Some("t"), "a")],
        vec![ColumnRef::new(Some("s"), "a")],
    )
    .into();

    let dual: PlanRef = BatchDual::new(ctx, 1).into();
    let semi_join: PlanRef =
        BatchHashJoin::new(Join::new(merge_join, dual, JoinType::Semi), vec![], JoinSide::Right)
            .into();
    let apply: PlanRef = BatchApply::new(semi_join, JoinSide::Right).unwrap().into();

    let agg: PlanRef = BatchAgg::new(
        apply,
        AggType::Complete,
        vec![ExprImpl::column("t", "b")],
        vec![AggCall::count_star()],
    )
    .into();
    let sort: PlanRef = BatchSort::new(
        agg,
        vec![ByItem::new(ExprImpl::column("t", "b"), Direction::Descending)],
    )
    .into();
    let limit: PlanRef = BatchLimit::new(sort, 0, 5).into();
    BatchProject::new(limit, vec![ExprImpl::column("t", "b")]).into()
}

#[test]
fn test_explain_full_plan_tree() {
    let plan = full_plan();
    expect![[r#"
        Project_14: t.b
          Limit_13: offset:0, count:5
            Sort_12: t.b:desc
              Agg_11: type:complete, group by:t.b, funcs:count(1)
                Apply_10: semi join, small:Dual_8, right:Dual_8
                  MergeJoin_7: left outer join, equal:eq(t.a, s.a)default vals:NULLascleft key:t.aright key:s.a
                    IndexLookUpReader_3
                      IndexScan_1: table:t, index:idx_a, keep order:true
                      TableScan_2: table:t, keep order:false
                    TableReader_6
                      Filter_5: eq(s.c, 'x')
                        TableScan_4: table:s, keep order:false
                  Dual_8: rows:1
    "#]]
    .assert_eq(&tree(&plan));
}

#[test]
fn test_explain_full_plan_rows() {
    let plan = full_plan();
    expect![[r#"
        id|parents|children|task|operator info
        Project_14||Limit_13|root|t.b
        Limit_13|Project_14|Sort_12|root|offset:0, count:5
        Sort_12|Limit_13|Agg_11|root|t.b:desc
        Agg_11|Sort_12|Apply_10|root|type:complete, group by:t.b, funcs:count(1)
        Apply_10|Agg_11|MergeJoin_7,Dual_8|root|semi join, small:Dual_8, right:Dual_8
        MergeJoin_7|Apply_10|IndexLookUpReader_3,TableReader_6|root|left outer join, equal:eq(t.a, s.a)default vals:NULLascleft key:t.aright key:s.a
        IndexLookUpReader_3|MergeJoin_7||root|
        IndexScan_1|||cop|table:t, index:idx_a, keep order:true
        TableScan_2|||cop|table:t, keep order:false
        TableReader_6|MergeJoin_7||root|
        Filter_5||TableScan_4|cop|eq(s.c, 'x')
        TableScan_4|Filter_5||cop|table:s, keep order:false
        Dual_8|Apply_10||root|rows:1
    "#]]
    .assert_eq(&rows(&plan, true));
}

/// A hash join whose two inputs read the same dual.
fn shared_plan() -> PlanRef {
    let ctx = OptimizerContext::mock();
    let dual: PlanRef = BatchDual::new(ctx, 1).into();
    let left: PlanRef = BatchLimit::new(dual.clone(), 0, 1).into();
    let right: PlanRef = BatchLimit::new(dual, 1, 1).into();
    BatchHashJoin::new(Join::new(left, right, JoinType::Inner), vec![], JoinSide::Left).into()
}

#[test]
fn test_explain_shared_node() {
    let plan = shared_plan();
    expect![[r#"
        id|parents|children|task|operator info
        HashJoin_4||Limit_2,Limit_3|root|inner join, small:Limit_2
        Limit_2|HashJoin_4|Dual_1|root|offset:0, count:1
        Dual_1|Limit_2,Limit_3||root|rows:1
        Limit_3|HashJoin_4|Dual_1|root|offset:1, count:1
    "#]]
    .assert_eq(&rows(&plan, true));

    expect![[r#"
        HashJoin_4: inner join, small:Limit_2
          Limit_2: offset:0, count:1
            Dual_1: rows:1
          Limit_3: offset:1, count:1
            Dual_1: rows:1
    "#]]
    .assert_eq(&tree(&plan));
}

#[test]
fn test_relink_is_idempotent() {
    let plan = shared_plan();
    set_parents_for_final_plan(&plan);
    let first = rows(&plan, true);
    set_parents_for_final_plan(&plan);
    set_parents_for_final_plan(&plan);
    assert_eq!(rows(&plan, true), first);

    let dual = plan.inputs()[0].inputs()[0].clone();
    let parents = dual
        .parent_ids()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>();
    assert_eq!(parents, vec!["Limit_2", "Limit_3"]);
}
