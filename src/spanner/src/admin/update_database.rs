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

// [START spanner_update_database]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Database;
use google_cloud_wkt::FieldMask;

/// Enables drop protection. While enabled, the database cannot be dropped
/// and its instance cannot be deleted.
pub async fn sample(client: &DatabaseAdmin, database: &str) -> anyhow::Result<()> {
    let database = client
        .update_database()
        .set_database(
            Database::new()
                .set_name(database)
                .set_enable_drop_protection(true),
        )
        .set_update_mask(FieldMask::default().set_paths(["enable_drop_protection"]))
        .poller()
        .until_done()
        .await?;

    println!("updated database {}", database.name);
    Ok(())
}
// [END spanner_update_database]
