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

// [START secretmanager_iam_grant_access]
use google_cloud_iam_v1::model::Binding;
use google_cloud_secretmanager_v1::client::SecretManagerService;

const ROLE: &str = "roles/secretmanager.secretAccessor";

/// `member` is an IAM principal, for example `user:ada@example.com` or
/// `serviceAccount:builder@my-project.iam.gserviceaccount.com`.
pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    member: &str,
) -> anyhow::Result<()> {
    let resource = format!("projects/{project_id}/secrets/{secret_id}");

    // Read-modify-write; the policy etag detects concurrent edits.
    let mut policy = client
        .get_iam_policy()
        .set_resource(&resource)
        .send()
        .await?;

    match policy.bindings.iter_mut().find(|b| b.role == ROLE) {
        Some(binding) => binding.members.push(member.to_string()),
        None => policy.bindings.push(
            Binding::new()
                .set_role(ROLE)
                .set_members([member.to_string()]),
        ),
    }

    let policy = client
        .set_iam_policy()
        .set_resource(&resource)
        .set_policy(policy)
        .send()
        .await?;

    println!("updated IAM policy for {resource}: {policy:?}");
    Ok(())
}
// [END secretmanager_iam_grant_access]
