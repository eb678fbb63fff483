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

// [START secretmanager_access_regional_secret_version]
use google_cloud_secretmanager_v1::client::SecretManagerService;

pub async fn sample(
    project_id: &str,
    location_id: &str,
    secret_id: &str,
    version_id: &str,
) -> anyhow::Result<()> {
    let client = SecretManagerService::builder()
        .with_endpoint(format!(
            "https://secretmanager.{location_id}.rep.googleapis.com"
        ))
        .build()
        .await?;

    let response = client
        .access_secret_version()
        .set_name(format!(
            "projects/{project_id}/locations/{location_id}/secrets/{secret_id}/versions/{version_id}"
        ))
        .send()
        .await?;

    let payload = response
        .payload
        .ok_or_else(|| anyhow::anyhow!("response has no payload"))?;
    println!(
        "accessed {}: {}",
        response.name,
        String::from_utf8_lossy(&payload.data)
    );
    Ok(())
}
// [END secretmanager_access_regional_secret_version]
