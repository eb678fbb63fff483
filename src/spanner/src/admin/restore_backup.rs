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

// [START spanner_restore_backup]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

/// Restores `backup_name` (a full backup resource name) into a new database
/// `database_id` in `instance`.
pub async fn sample(
    client: &DatabaseAdmin,
    instance: &str,
    database_id: &str,
    backup_name: &str,
) -> anyhow::Result<()> {
    let database = client
        .restore_database()
        .set_parent(instance)
        .set_database_id(database_id)
        .set_backup(backup_name)
        .poller()
        .until_done()
        .await?;

    println!(
        "restored database {} from backup {backup_name}",
        database.name
    );
    Ok(())
}
// [END spanner_restore_backup]
