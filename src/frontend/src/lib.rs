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

//! Physical plan graph and explain support.
//!
//! The optimizer hands over an already chosen physical plan. This crate links every node of that
//! plan back to its parents so the plan can be walked in both directions, and produces the
//! one-line operator description shown by `EXPLAIN`.

pub mod error;
pub mod expr;
pub mod handler;
pub mod optimizer;
pub mod types;
pub mod utils;

pub use optimizer::PlanRef;
pub use optimizer::plan_link::set_parents_for_final_plan;
