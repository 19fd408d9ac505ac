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

use crate::types::{Datum, ScalarImpl, datum_to_string};
use crate::utils::Describe;

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    data: Datum,
}

impl Literal {
    pub fn new(data: Datum) -> Self {
        Literal { data }
    }

    pub fn get_data(&self) -> &Datum {
        &self.data
    }
}

impl Describe for Literal {
    fn describe(&self) -> String {
        match &self.data {
            Some(v @ (ScalarImpl::Utf8(_) | ScalarImpl::Bytea(_))) => format!("'{}'", v),
            data => datum_to_string(data),
        }
    }
}
