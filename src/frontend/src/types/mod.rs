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

//! Scalar values carried by plan nodes, such as literals and outer-join padding values.

use std::fmt;

/// A nullable scalar value. `None` is SQL `NULL`.
pub type Datum = Option<ScalarImpl>;

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarImpl {
    Bool(bool),
    Int64(i64),
    Float64(f64),
    Utf8(Box<str>),
    Bytea(Box<[u8]>),
}

/// Error type for rendering a value as its string form.
#[derive(thiserror::Error, Debug)]
pub enum ValueError {
    #[error("invalid UTF-8 in bytea value: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl ScalarImpl {
    /// Renders the value as the string it would convert to.
    ///
    /// Unlike [`fmt::Display`], this fails for byte strings that are not valid UTF-8.
    pub fn to_text(&self) -> Result<String, ValueError> {
        match self {
            ScalarImpl::Bytea(bytes) => Ok(std::str::from_utf8(bytes)?.to_owned()),
            other => Ok(other.to_string()),
        }
    }
}

/// Renders a datum with [`ScalarImpl::to_text`], using `NULL` for the null value.
pub fn datum_to_text(datum: &Datum) -> Result<String, ValueError> {
    match datum {
        Some(scalar) => scalar.to_text(),
        None => Ok("NULL".to_owned()),
    }
}

impl fmt::Display for ScalarImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarImpl::Bool(v) => write!(f, "{}", v),
            ScalarImpl::Int64(v) => write!(f, "{}", v),
            ScalarImpl::Float64(v) => write!(f, "{}", v),
            ScalarImpl::Utf8(v) => f.write_str(v),
            ScalarImpl::Bytea(v) => {
                f.write_str("\\x")?;
                for byte in v.iter() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for ScalarImpl {
    fn from(v: bool) -> Self {
        ScalarImpl::Bool(v)
    }
}

impl From<i64> for ScalarImpl {
    fn from(v: i64) -> Self {
        ScalarImpl::Int64(v)
    }
}

impl From<f64> for ScalarImpl {
    fn from(v: f64) -> Self {
        ScalarImpl::Float64(v)
    }
}

impl From<&str> for ScalarImpl {
    fn from(v: &str) -> Self {
        ScalarImpl::Utf8(v.into())
    }
}

impl From<Vec<u8>> for ScalarImpl {
    fn from(v: Vec<u8>) -> Self {
        ScalarImpl::Bytea(v.into_boxed_slice())
    }
}

/// Renders a datum with its infallible display form, `NULL` for the null value.
pub fn datum_to_string(datum: &Datum) -> String {
    match datum {
        Some(scalar) => scalar.to_string(),
        None => "NULL".to_owned(),
    }
}
