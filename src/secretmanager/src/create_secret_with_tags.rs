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

// [START secretmanager_create_secret_with_tags]
use google_cloud_secretmanager_v1::client::SecretManagerService;
use google_cloud_secretmanager_v1::model::{Replication, Secret, replication::Automatic};

/// `tag_key` and `tag_value` are the resource names of an existing tag key
/// and tag value, for example `tagKeys/281476392571528`.
pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    tag_key: &str,
    tag_value: &str,
) -> anyhow::Result<()> {
    let secret = client
        .create_secret()
        .set_parent(format!("projects/{project_id}"))
        .set_secret_id(secret_id)
        .set_secret(
            Secret::new()
                .set_replication(Replication::new().set_automatic(Automatic::new()))
                .set_tags([(tag_key, tag_value)]),
        )
        .send()
        .await?;

    println!("created secret with tags {secret:?}");
    Ok(())
}
// [END secretmanager_create_secret_with_tags]
