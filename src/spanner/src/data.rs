// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Samples for reads, queries, mutations, transactions, and DML.

pub mod delete_data;
pub mod dml_batch_update;
pub mod dml_partitioned_delete;
pub mod dml_partitioned_update;
pub mod dml_standard_delete;
pub mod dml_standard_insert;
pub mod dml_standard_update;
pub mod dml_write_then_read;
pub mod insert_data;
pub mod insert_data_at_least_once;
pub mod insert_data_with_timestamp_column;
pub mod query_data;
pub mod query_data_with_index;
pub mod query_data_with_timestamp_column;
pub mod query_new_column;
pub mod query_with_array_parameter;
pub mod query_with_parameter;
pub mod read_data;
pub mod read_only_transaction;
pub mod read_write_transaction;
pub mod update_data;
pub mod update_data_with_timestamp_column;
