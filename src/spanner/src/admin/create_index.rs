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

// [START spanner_create_index]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

pub async fn sample(client: &DatabaseAdmin, database: &str) -> anyhow::Result<()> {
    client
        .update_database_ddl()
        .set_database(database)
        .set_statements(["CREATE INDEX AlbumsByAlbumTitle ON Albums(AlbumTitle)"])
        .poller()
        .until_done()
        .await?;

    println!("added AlbumsByAlbumTitle index");
    Ok(())
}
// [END spanner_create_index]
