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

// [START secretmanager_list_secret_versions_with_filter]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_secretmanager_v1::client::SecretManagerService;

/// `filter` uses the service's list filter syntax, for example
/// `state:ENABLED`.
pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    filter: &str,
) -> anyhow::Result<()> {
    let mut versions = client
        .list_secret_versions()
        .set_parent(format!("projects/{project_id}/secrets/{secret_id}"))
        .set_filter(filter)
        .by_item();
    println!("listing versions of secret {secret_id} matching {filter}");
    while let Some(version) = versions.next().await.transpose()? {
        println!("  found version {}", version.name);
    }
    Ok(())
}
// [END secretmanager_list_secret_versions_with_filter]
