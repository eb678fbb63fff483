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

// [START spanner_list_instances]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;

pub async fn sample(client: &InstanceAdmin, project_id: &str) -> anyhow::Result<()> {
    let mut instances = client
        .list_instances()
        .set_parent(format!("projects/{project_id}"))
        .by_item();
    println!("listing instances in project {project_id}");
    while let Some(instance) = instances.next().await.transpose()? {
        println!("  found instance {}", instance.name);
    }
    Ok(())
}
// [END spanner_list_instances]
