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
    use samples_test_utils::resource_names::random_instance_id;
    use spanner_samples::*;

    fn project_id() -> anyhow::Result<String> {
        Ok(std::env::var("GOOGLE_CLOUD_PROJECT")?)
    }

    // The whole chain runs in one test: the database and backup samples
    // need the instance the instance samples create, and parallel tests
    // would race on the Singers/Albums fixtures.
    #[tokio::test]
    async fn spanner_samples() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        cleanup_stale_instances(&project_id).await?;

        let instance_id = random_instance_id();
        let result = run_all(&project_id, &instance_id).await;

        if let Err(e) = cleanup_test_instance(&project_id, &instance_id).await {
            println!("Error cleaning up test instance {instance_id}: {e:?}");
        }
        result
    }

    async fn run_all(project_id: &str, instance_id: &str) -> anyhow::Result<()> {
        run_instance_examples(project_id, instance_id).await?;
        run_database_examples(project_id, instance_id).await?;

        // The instance samples end with delete_instance; run it last, on the
        // instance the other samples used.
        let client =
            google_cloud_spanner_admin_instance_v1::client::InstanceAdmin::builder()
                .build()
                .await?;
        spanner_samples::admin::delete_instance::sample(&client, project_id, instance_id).await
    }

    // Needs an instance with a multi-region configuration.
    #[tokio::test]
    async fn default_leader_sample() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let Ok(instance) = std::env::var("GOOGLE_CLOUD_RUST_SAMPLES_MULTI_REGION_INSTANCE")
        else {
            println!(
                "skipping default_leader_sample: \
                 GOOGLE_CLOUD_RUST_SAMPLES_MULTI_REGION_INSTANCE is not set"
            );
            return Ok(());
        };
        let Ok(default_leader) = std::env::var("GOOGLE_CLOUD_RUST_SAMPLES_DEFAULT_LEADER")
        else {
            println!(
                "skipping default_leader_sample: \
                 GOOGLE_CLOUD_RUST_SAMPLES_DEFAULT_LEADER is not set"
            );
            return Ok(());
        };

        let client = google_cloud_spanner_admin_database_v1::client::DatabaseAdmin::builder()
            .build()
            .await?;
        let database = format!(
            "{instance}/databases/{}",
            samples_test_utils::resource_names::random_database_id()
        );
        let result = spanner_samples::admin::create_database_with_default_leader::sample(
            &client,
            &database,
            &default_leader,
        )
        .await;
        if let Err(e) = client.drop_database().set_database(&database).send().await {
            println!("Error cleaning up test database {database}: {e:?}");
        }
        result
    }
}
