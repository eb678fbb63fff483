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

// [START spanner_update_data]
use google_cloud_spanner::client::Client;
use google_cloud_spanner::mutation::update;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let columns = &["SingerId", "AlbumId", "MarketingBudget"];
    let mutations = vec![
        update("Albums", columns, &[&1_i64, &1_i64, &100000_i64]),
        update("Albums", columns, &[&2_i64, &2_i64, &500000_i64]),
    ];
    let commit_timestamp = client.apply(mutations).await?;

    println!("updated albums at {commit_timestamp:?}");
    Ok(())
}
// [END spanner_update_data]
