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

// [START spanner_copy_backup]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_wkt::Timestamp;

/// Copies `source_backup` (a full backup resource name) into `instance`,
/// which may live in a different region or project.
pub async fn sample(
    client: &DatabaseAdmin,
    instance: &str,
    backup_id: &str,
    source_backup: &str,
) -> anyhow::Result<()> {
    let expire_time = Timestamp::clamp(chrono::Utc::now().timestamp() + 14 * 24 * 3600, 0);
    let backup = client
        .copy_backup()
        .set_parent(instance)
        .set_backup_id(backup_id)
        .set_source_backup(source_backup)
        .set_expire_time(expire_time)
        .poller()
        .until_done()
        .await?;

    println!("copied backup {} from {source_backup}", backup.name);
    Ok(())
}
// [END spanner_copy_backup]
