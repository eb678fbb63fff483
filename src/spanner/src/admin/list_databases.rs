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

// [START spanner_list_databases]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

/// `instance` is the full resource name:
/// `projects/<project>/instances/<instance>`.
pub async fn sample(client: &DatabaseAdmin, instance: &str) -> anyhow::Result<()> {
    let mut databases = client.list_databases().set_parent(instance).by_item();
    println!("listing databases in instance {instance}");
    while let Some(database) = databases.next().await.transpose()? {
        println!("  found database {}", database.name);
    }
    Ok(())
}
// [END spanner_list_databases]
