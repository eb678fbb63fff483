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

// [START spanner_insert_data]
use google_cloud_spanner::client::Client;
use google_cloud_spanner::mutation::insert_or_update;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let singer_columns = &["SingerId", "FirstName", "LastName"];
    let album_columns = &["SingerId", "AlbumId", "AlbumTitle"];
    let mutations = vec![
        insert_or_update("Singers", singer_columns, &[&1_i64, &"Marc", &"Richards"]),
        insert_or_update("Singers", singer_columns, &[&2_i64, &"Catalina", &"Smith"]),
        insert_or_update("Singers", singer_columns, &[&3_i64, &"Alice", &"Trentor"]),
        insert_or_update("Singers", singer_columns, &[&4_i64, &"Lea", &"Martin"]),
        insert_or_update("Singers", singer_columns, &[&5_i64, &"David", &"Lomond"]),
        insert_or_update("Albums", album_columns, &[&1_i64, &1_i64, &"Total Junk"]),
        insert_or_update("Albums", album_columns, &[&1_i64, &2_i64, &"Go, Go, Go"]),
        insert_or_update("Albums", album_columns, &[&2_i64, &1_i64, &"Green"]),
        insert_or_update(
            "Albums",
            album_columns,
            &[&2_i64, &2_i64, &"Forever Hold Your Peace"],
        ),
        insert_or_update("Albums", album_columns, &[&2_i64, &3_i64, &"Terrified"]),
    ];
    let commit_timestamp = client.apply(mutations).await?;

    println!("applied mutations at {commit_timestamp:?}");
    Ok(())
}
// [END spanner_insert_data]
