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

// [START spanner_insert_data_at_least_once]
use google_cloud_spanner::client::Client;
use google_cloud_spanner::mutation::insert_or_update;

/// At-least-once commits skip the replay protection of a read-write
/// transaction. They are cheaper, but the mutations must be idempotent as
/// they may be applied more than once.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let mutations = vec![insert_or_update(
        "Singers",
        &["SingerId", "FirstName", "LastName"],
        &[&100_i64, &"Virginia", &"Watson"],
    )];
    let commit_timestamp = client.apply_at_least_once(mutations).await?;

    println!("applied mutations at {commit_timestamp:?}");
    Ok(())
}
// [END spanner_insert_data_at_least_once]
