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

// [START spanner_list_backup_operations]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::CreateBackupMetadata;

/// Lists the backup creation operations for `database_id`, with progress.
pub async fn sample(
    client: &DatabaseAdmin,
    instance: &str,
    database_id: &str,
) -> anyhow::Result<()> {
    let filter = format!(
        "(metadata.@type:type.googleapis.com/google.spanner.admin.database.v1.CreateBackupMetadata) \
         AND (metadata.database:{database_id})"
    );
    let mut operations = client
        .list_backup_operations()
        .set_parent(instance)
        .set_filter(filter)
        .by_item();
    while let Some(operation) = operations.next().await.transpose()? {
        let Some(any) = operation.metadata.as_ref() else {
            continue;
        };
        let metadata = any.to_msg::<CreateBackupMetadata>()?;
        let progress = metadata
            .progress
            .map(|p| p.progress_percent)
            .unwrap_or_default();
        println!(
            "backup {} on database {} is {progress}% complete",
            metadata.name, metadata.database
        );
    }
    Ok(())
}
// [END spanner_list_backup_operations]
