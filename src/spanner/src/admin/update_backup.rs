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

// [START spanner_update_backup]
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Backup;
use google_cloud_wkt::{FieldMask, Timestamp};

/// Extends the backup expiration by 30 days from now.
pub async fn sample(client: &DatabaseAdmin, backup_name: &str) -> anyhow::Result<()> {
    let expire_time = Timestamp::clamp(chrono::Utc::now().timestamp() + 30 * 24 * 3600, 0);
    let backup = client
        .update_backup()
        .set_backup(
            Backup::new()
                .set_name(backup_name)
                .set_expire_time(expire_time),
        )
        .set_update_mask(FieldMask::default().set_paths(["expire_time"]))
        .send()
        .await?;

    println!(
        "updated backup {}, new expire time {:?}",
        backup.name, backup.expire_time
    );
    Ok(())
}
// [END spanner_update_backup]
