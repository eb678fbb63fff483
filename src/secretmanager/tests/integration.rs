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

#[cfg(all(test, feature = "run-integration-tests"))]
mod tests {
    use google_cloud_secretmanager_v1::client::SecretManagerService;
    use secretmanager_samples::*;

    fn project_id() -> anyhow::Result<String> {
        Ok(std::env::var("GOOGLE_CLOUD_PROJECT")?)
    }

    async fn cleanup(
        client: &SecretManagerService,
        project_id: &str,
        secret_ids: Vec<String>,
    ) {
        for secret_id in secret_ids {
            if let Err(e) = cleanup_test_secret(client, project_id, &secret_id).await {
                println!("Error cleaning up test secret {secret_id}: {e:?}");
            }
        }
    }

    #[tokio::test]
    async fn secret_samples() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        let client = SecretManagerService::builder().build().await?;
        cleanup_stale_secrets(&client, &project_id).await?;

        let mut secret_ids = Vec::new();
        let result = run_secret_examples(&project_id, &mut secret_ids).await;
        cleanup(&client, &project_id, secret_ids).await;
        result
    }

    #[tokio::test]
    async fn secret_version_samples() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        let client = SecretManagerService::builder().build().await?;

        let mut secret_ids = Vec::new();
        let result = run_secret_version_examples(&project_id, &mut secret_ids).await;
        cleanup(&client, &project_id, secret_ids).await;
        result
    }

    #[tokio::test]
    async fn iam_samples() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        let Ok(service_account) = std::env::var("GOOGLE_CLOUD_RUST_TEST_SERVICE_ACCOUNT") else {
            println!("skipping iam_samples: GOOGLE_CLOUD_RUST_TEST_SERVICE_ACCOUNT is not set");
            return Ok(());
        };
        let member = format!("serviceAccount:{service_account}");
        let client = SecretManagerService::builder().build().await?;

        let mut secret_ids = Vec::new();
        let result = run_iam_examples(&project_id, &member, &mut secret_ids).await;
        cleanup(&client, &project_id, secret_ids).await;
        result
    }

    #[tokio::test]
    async fn rotation_samples() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        let Ok(topic_name) = std::env::var("GOOGLE_CLOUD_RUST_SAMPLES_TOPIC") else {
            println!("skipping rotation_samples: GOOGLE_CLOUD_RUST_SAMPLES_TOPIC is not set");
            return Ok(());
        };
        let client = SecretManagerService::builder().build().await?;

        let mut secret_ids = Vec::new();
        let result = run_rotation_examples(&project_id, &topic_name, &mut secret_ids).await;
        cleanup(&client, &project_id, secret_ids).await;
        result
    }

    #[tokio::test]
    async fn cmek_samples() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        let Ok(kms_key_name) = std::env::var("GOOGLE_CLOUD_RUST_SAMPLES_KMS_KEY") else {
            println!("skipping cmek_samples: GOOGLE_CLOUD_RUST_SAMPLES_KMS_KEY is not set");
            return Ok(());
        };
        let client = SecretManagerService::builder().build().await?;

        let mut secret_ids = Vec::new();
        let result = run_cmek_examples(&project_id, &kms_key_name, &mut secret_ids).await;
        cleanup(&client, &project_id, secret_ids).await;
        result
    }

    #[tokio::test]
    async fn tags_samples() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        let (Ok(tag_key), Ok(tag_value)) = (
            std::env::var("GOOGLE_CLOUD_RUST_SAMPLES_TAG_KEY"),
            std::env::var("GOOGLE_CLOUD_RUST_SAMPLES_TAG_VALUE"),
        ) else {
            println!("skipping tags_samples: tag key or value is not set");
            return Ok(());
        };
        let client = SecretManagerService::builder().build().await?;

        let mut secret_ids = Vec::new();
        let result = run_tags_examples(&project_id, &tag_key, &tag_value, &mut secret_ids).await;
        cleanup(&client, &project_id, secret_ids).await;
        result
    }

    #[tokio::test]
    async fn regional_samples() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        let Ok(location_id) = std::env::var("GOOGLE_CLOUD_RUST_SAMPLES_LOCATION") else {
            println!("skipping regional_samples: GOOGLE_CLOUD_RUST_SAMPLES_LOCATION is not set");
            return Ok(());
        };

        let mut secret_ids = Vec::new();
        let result = run_regional_examples(&project_id, &location_id, &mut secret_ids).await;
        let client = regional_client(&location_id).await?;
        for secret_id in secret_ids {
            let name =
                format!("projects/{project_id}/locations/{location_id}/secrets/{secret_id}");
            if let Err(e) = client.delete_secret().set_name(&name).send().await {
                println!("Error cleaning up regional test secret {secret_id}: {e:?}");
            }
        }
        result
    }
}
