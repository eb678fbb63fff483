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

// [START secretmanager_list_secrets_with_filter]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_secretmanager_v1::client::SecretManagerService;

/// `filter` uses the service's list filter syntax, for example
/// `labels.labelkey=labelvalue` or `create_time>2026-01-01T00:00:00Z`.
pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    filter: &str,
) -> anyhow::Result<()> {
    let mut secrets = client
        .list_secrets()
        .set_parent(format!("projects/{project_id}"))
        .set_filter(filter)
        .by_item();
    println!("listing secrets in project {project_id} matching {filter}");
    while let Some(secret) = secrets.next().await.transpose()? {
        println!("  found secret {}", secret.name);
    }
    Ok(())
}
// [END secretmanager_list_secrets_with_filter]
