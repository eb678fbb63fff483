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

// [START secretmanager_create_secret_with_cmek]
use google_cloud_secretmanager_v1::client::SecretManagerService;
use google_cloud_secretmanager_v1::model::{
    CustomerManagedEncryption, Replication, Secret, replication::Automatic,
};

/// `kms_key_name` names a Cloud KMS key the Secret Manager service account
/// can encrypt and decrypt with.
pub async fn sample(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    kms_key_name: &str,
) -> anyhow::Result<()> {
    let secret = client
        .create_secret()
        .set_parent(format!("projects/{project_id}"))
        .set_secret_id(secret_id)
        .set_secret(
            Secret::new().set_replication(Replication::new().set_automatic(
                Automatic::new().set_customer_managed_encryption(
                    CustomerManagedEncryption::new().set_kms_key_name(kms_key_name),
                ),
            )),
        )
        .send()
        .await?;

    println!("created secret with customer managed encryption {secret:?}");
    Ok(())
}
// [END secretmanager_create_secret_with_cmek]
