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

// [START spanner_create_instance]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;
use google_cloud_spanner_admin_instance_v1::model::Instance;

pub async fn sample(
    client: &InstanceAdmin,
    project_id: &str,
    instance_id: &str,
) -> anyhow::Result<()> {
    let instance = client
        .create_instance()
        .set_parent(format!("projects/{project_id}"))
        .set_instance_id(instance_id)
        .set_instance(
            Instance::new()
                .set_config(format!(
                    "projects/{project_id}/instanceConfigs/regional-us-central1"
                ))
                .set_display_name("This is a display name.")
                .set_node_count(1)
                .set_labels([("cloud_spanner_samples", "true")]),
        )
        .poller()
        .until_done()
        .await?;

    println!("created instance {}", instance.name);
    Ok(())
}
// [END spanner_create_instance]
