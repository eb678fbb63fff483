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

// [START spanner_dml_partitioned_update]
use google_cloud_spanner::client::Client;
use google_cloud_spanner::statement::Statement;

/// Partitioned DML runs in service-managed partitions with at-least-once
/// semantics, so the statement must be idempotent. The returned count is a
/// lower bound.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let stmt = Statement::new("UPDATE Albums SET MarketingBudget = 100000 WHERE SingerId > 1");
    let rows = client.partitioned_update(stmt).await?;

    println!("{rows} record(s) updated");
    Ok(())
}
// [END spanner_dml_partitioned_update]
