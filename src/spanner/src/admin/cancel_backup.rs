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

// [START spanner_cancel_backup_create]
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Backup;
use google_cloud_wkt::Timestamp;

/// Starts a backup and cancels the operation before it completes. The
/// backup is deleted if the cancellation raced with its completion.
pub async fn sample(
    client: &DatabaseAdmin,
    instance: &str,
    database: &str,
    backup_id: &str,
) -> anyhow::Result<()> {
    let expire_time = Timestamp::clamp(chrono::Utc::now().timestamp() + 14 * 24 * 3600, 0);
    let operation = client
        .create_backup()
        .set_parent(instance)
        .set_backup_id(backup_id)
        .set_backup(
            Backup::new()
                .set_database(database)
                .set_expire_time(expire_time),
        )
        .send()
        .await?;

    client
        .cancel_operation()
        .set_name(&operation.name)
        .send()
        .await?;
    println!("requested cancellation of operation {}", operation.name);

    // The backup exists if creation finished before the cancellation took
    // effect; remove it so the sample leaves nothing behind.
    let backup_name = format!("{instance}/backups/{backup_id}");
    if client
        .get_backup()
        .set_name(&backup_name)
        .send()
        .await
        .is_ok()
    {
        client.delete_backup().set_name(&backup_name).send().await?;
        println!("backup completed before cancellation, deleted {backup_name}");
    }
    Ok(())
}
// [END spanner_cancel_backup_create]
