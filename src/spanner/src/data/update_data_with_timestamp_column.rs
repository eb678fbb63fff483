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

// [START spanner_update_data_with_timestamp_column]
use google_cloud_spanner::client::Client;
use google_cloud_spanner::mutation::update;
use google_cloud_spanner::value::CommitTimestamp;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let columns = &["SingerId", "VenueId", "EventDate", "Revenue", "LastUpdateTime"];
    let mutations = vec![
        update(
            "Performances",
            columns,
            &[&1_i64, &4_i64, &"2026-01-15", &12000_i64, &CommitTimestamp::new()],
        ),
        update(
            "Performances",
            columns,
            &[&2_i64, &42_i64, &"2026-01-09", &8000_i64, &CommitTimestamp::new()],
        ),
    ];
    let commit_timestamp = client.apply(mutations).await?;

    println!("updated performances at {commit_timestamp:?}");
    Ok(())
}
// [END spanner_update_data_with_timestamp_column]
