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

// [START secretmanager_delete_secret_label]
use google_cloud_secretmanager_v1::client::SecretManagerService;
use google_cloud_secretmanager_v1::model::Secret;
use google_cloud_wkt::FieldMask;

pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    label_key: &str,
) -> anyhow::Result<()> {
    let name = format!("projects/{project_id}/secrets/{secret_id}");
    let secret = client.get_secret().set_name(&name).send().await?;

    let mut labels = secret.labels;
    labels.remove(label_key);

    let secret = client
        .update_secret()
        .set_secret(Secret::new().set_name(&name).set_labels(labels))
        .set_update_mask(FieldMask::default().set_paths(["labels"]))
        .send()
        .await?;

    println!("updated secret {secret:?}");
    Ok(())
}
// [END secretmanager_delete_secret_label]
