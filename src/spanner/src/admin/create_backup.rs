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

// [START spanner_create_backup]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Backup;
use google_cloud_wkt::Timestamp;

/// `instance` is the full resource name of the instance that owns
/// `database`. The backup captures the database at its earliest version
/// time and must be deleted or expire within the next 14 days.
pub async fn sample(
    client: &DatabaseAdmin,
    instance: &str,
    database: &str,
    backup_id: &str,
) -> anyhow::Result<()> {
    let source = client.get_database().set_name(database).send().await?;
    let expire_time = Timestamp::clamp(chrono::Utc::now().timestamp() + 14 * 24 * 3600, 0);

    let mut backup = Backup::new()
        .set_database(database)
        .set_expire_time(expire_time);
    if let Some(version_time) = source.earliest_version_time {
        backup = backup.set_version_time(version_time);
    }
    let backup = client
        .create_backup()
        .set_parent(instance)
        .set_backup_id(backup_id)
        .set_backup(backup)
        .poller()
        .until_done()
        .await?;

    println!(
        "created backup {} of size {} bytes",
        backup.name, backup.size_bytes
    );
    Ok(())
}
// [END spanner_create_backup]
