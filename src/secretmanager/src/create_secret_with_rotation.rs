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

// [START secretmanager_create_secret_with_rotation]
use google_cloud_secretmanager_v1::client::SecretManagerService;
use google_cloud_secretmanager_v1::model::{
    Replication, Rotation, Secret, Topic, replication::Automatic,
};

/// Rotation notifications are published to `topic_name`, which must grant
/// the Secret Manager service account the publisher role.
pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    topic_name: &str,
) -> anyhow::Result<()> {
    // The rotation period must be at least one hour.
    let next_rotation_time =
        google_cloud_wkt::Timestamp::clamp(chrono::Utc::now().timestamp() + 24 * 3600, 0);
    let rotation_period = google_cloud_wkt::Duration::clamp(24 * 3600, 0);
    let secret = client
        .create_secret()
        .set_parent(format!("projects/{project_id}"))
        .set_secret_id(secret_id)
        .set_secret(
            Secret::new()
                .set_replication(Replication::new().set_automatic(Automatic::new()))
                .set_topics([Topic::new().set_name(topic_name)])
                .set_rotation(
                    Rotation::new()
                        .set_next_rotation_time(next_rotation_time)
                        .set_rotation_period(rotation_period),
                ),
        )
        .send()
        .await?;

    println!("created secret with rotation {secret:?}");
    Ok(())
}
// [END secretmanager_create_secret_with_rotation]
