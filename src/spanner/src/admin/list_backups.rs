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

// [START spanner_list_backups]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

/// `filter` uses the backup list filter syntax, for example
/// `database:prod-db`, `state:READY`, or `expire_time < "2036-01-01T00:00:00Z"`.
/// An empty filter lists every backup in the instance.
pub async fn sample(client: &DatabaseAdmin, instance: &str, filter: &str) -> anyhow::Result<()> {
    let mut backups = client
        .list_backups()
        .set_parent(instance)
        .set_filter(filter)
        .by_item();
    println!("listing backups in instance {instance} matching {filter:?}");
    while let Some(backup) = backups.next().await.transpose()? {
        println!(
            "  found backup {} of database {} ({} bytes)",
            backup.name, backup.database, backup.size_bytes
        );
    }
    Ok(())
}
// [END spanner_list_backups]
