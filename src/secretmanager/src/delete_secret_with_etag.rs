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

// [START secretmanager_delete_secret_with_etag]
use google_cloud_secretmanager_v1::client::SecretManagerService;

/// The deletion is rejected with FAILED_PRECONDITION unless `etag` matches
/// the current etag of the secret.
pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    etag: &str,
) -> anyhow::Result<()> {
    client
        .delete_secret()
        .set_name(format!("projects/{project_id}/secrets/{secret_id}"))
        .set_etag(etag)
        .send()
        .await?;

    println!("deleted secret {secret_id}");
    Ok(())
}
// [END secretmanager_delete_secret_with_etag]
