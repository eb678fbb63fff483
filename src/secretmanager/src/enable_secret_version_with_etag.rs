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

// [START secretmanager_enable_secret_version_with_etag]
use google_cloud_secretmanager_v1::client::SecretManagerService;

pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    version_id: &str,
    etag: &str,
) -> anyhow::Result<()> {
    let version = client
        .enable_secret_version()
        .set_name(format!(
            "projects/{project_id}/secrets/{secret_id}/versions/{version_id}"
        ))
        .set_etag(etag)
        .send()
        .await?;

    println!("enabled version {}", version.name);
    Ok(())
}
// [END secretmanager_enable_secret_version_with_etag]
