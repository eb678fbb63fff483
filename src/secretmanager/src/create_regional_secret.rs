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

// [START secretmanager_create_regional_secret]
use google_cloud_secretmanager_v1::client::SecretManagerService;
use google_cloud_secretmanager_v1::model::Secret;

/// Regional secrets live under a location parent and are served by the
/// regional endpoint. They carry no replication configuration.
pub async fn sample(project_id: &str, location_id: &str, secret_id: &str) -> anyhow::Result<()> {
    let client = SecretManagerService::builder()
        .with_endpoint(format!(
            "https://secretmanager.{location_id}.rep.googleapis.com"
        ))
        .build()
        .await?;

    let secret = client
        .create_secret()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_secret_id(secret_id)
        .set_secret(Secret::new().set_labels([("labelkey", "labelvalue")]))
        .send()
        .await?;

    println!("created regional secret {}", secret.name);
    Ok(())
}
// [END secretmanager_create_regional_secret]
