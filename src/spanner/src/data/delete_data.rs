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

// [START spanner_delete_data]
use google_cloud_spanner::client::Client;
use google_cloud_spanner::key::{Key, all_keys};
use google_cloud_spanner::mutation::delete;

/// Deletes one album by its composite key, then empties both tables.
/// Deleting the remaining Singers rows cascades into their Albums.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let mutations = vec![
        delete("Albums", Key::composite(&[&2_i64, &3_i64])),
        delete("Albums", all_keys()),
        delete("Singers", all_keys()),
    ];
    let commit_timestamp = client.apply(mutations).await?;

    println!("deleted data at {commit_timestamp:?}");
    Ok(())
}
// [END spanner_delete_data]
