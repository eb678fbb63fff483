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

//! Code samples for Secret Manager.
//!
//! Each module holds one sample, bracketed by region tags for documentation
//! embedding. The driver functions below chain the samples over randomly
//! named secrets; the integration tests call the drivers.

mod access_regional_secret_version;
mod access_secret_version;
mod add_secret_version;
mod create_regional_secret;
mod create_secret;
mod create_secret_with_annotations;
mod create_secret_with_cmek;
mod create_secret_with_delayed_destroy;
mod create_secret_with_expire_time;
mod create_secret_with_labels;
mod create_secret_with_rotation;
mod create_secret_with_tags;
mod create_secret_with_topic;
mod create_secret_with_ttl;
mod create_update_secret_label;
mod create_user_managed_replication_secret;
mod delete_secret;
mod delete_secret_label;
mod delete_secret_with_etag;
mod delete_secret_with_retry;
mod destroy_secret_version;
mod destroy_secret_version_with_etag;
mod disable_secret_version;
mod disable_secret_version_with_etag;
mod edit_secret_annotation;
mod enable_secret_version;
mod enable_secret_version_with_etag;
mod get_secret;
mod get_secret_version;
mod iam_grant_access;
mod iam_revoke_access;
mod list_secret_versions;
mod list_secret_versions_with_filter;
mod list_secrets;
mod list_secrets_with_filter;
mod remove_secret_expiration;
mod update_secret;
mod update_secret_expiration;
mod update_secret_rotation_period;
mod update_secret_with_alias;
mod update_secret_with_delayed_destroy;
mod update_secret_with_etag;
mod view_secret_annotations;
mod view_secret_labels;

use google_cloud_gax::error::rpc::Code;
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_secretmanager_v1::client::SecretManagerService;
use samples_test_utils::resource_names::{PREFIX, random_secret_id};

pub async fn run_secret_examples(
    project_id: &str,
    secret_ids: &mut Vec<String>,
) -> anyhow::Result<()> {
    let client = SecretManagerService::builder().build().await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret example");
    create_secret::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running get_secret example");
    get_secret::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running update_secret example");
    update_secret::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running update_secret_with_etag example");
    let etag = current_secret_etag(&client, project_id, &secret_id).await?;
    update_secret_with_etag::sample(&client, project_id, &secret_id, &etag).await?;
    tracing::info!("running create_update_secret_label example");
    create_update_secret_label::sample(&client, project_id, &secret_id, "environment", "test")
        .await?;
    tracing::info!("running view_secret_labels example");
    view_secret_labels::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running delete_secret_label example");
    delete_secret_label::sample(&client, project_id, &secret_id, "environment").await?;
    tracing::info!("running edit_secret_annotation example");
    edit_secret_annotation::sample(&client, project_id, &secret_id, "owner", "samples").await?;
    tracing::info!("running view_secret_annotations example");
    view_secret_annotations::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running update_secret_expiration example");
    update_secret_expiration::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running remove_secret_expiration example");
    remove_secret_expiration::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running update_secret_with_delayed_destroy example");
    update_secret_with_delayed_destroy::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running list_secrets example");
    list_secrets::sample(&client, project_id).await?;
    tracing::info!("running list_secrets_with_filter example");
    list_secrets_with_filter::sample(&client, project_id, "labels.secretmanager=rocks").await?;
    tracing::info!("running delete_secret_with_retry example");
    delete_secret_with_retry::sample(&client, project_id, &secret_id).await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_labels example");
    create_secret_with_labels::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running delete_secret example");
    delete_secret::sample(&client, project_id, &secret_id).await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_annotations example");
    create_secret_with_annotations::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running delete_secret_with_etag example");
    let etag = current_secret_etag(&client, project_id, &secret_id).await?;
    delete_secret_with_etag::sample(&client, project_id, &secret_id, &etag).await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_user_managed_replication_secret example");
    create_user_managed_replication_secret::sample(
        &client,
        project_id,
        &secret_id,
        &["us-east1", "us-east4", "us-west1"],
    )
    .await?;
    delete_secret::sample(&client, project_id, &secret_id).await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_ttl example");
    create_secret_with_ttl::sample(&client, project_id, &secret_id).await?;
    delete_secret::sample(&client, project_id, &secret_id).await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_expire_time example");
    create_secret_with_expire_time::sample(&client, project_id, &secret_id).await?;
    delete_secret::sample(&client, project_id, &secret_id).await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_delayed_destroy example");
    create_secret_with_delayed_destroy::sample(&client, project_id, &secret_id).await?;
    delete_secret::sample(&client, project_id, &secret_id).await?;

    Ok(())
}

pub async fn run_secret_version_examples(
    project_id: &str,
    secret_ids: &mut Vec<String>,
) -> anyhow::Result<()> {
    let client = SecretManagerService::builder().build().await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    create_secret::sample(&client, project_id, &secret_id).await?;

    tracing::info!("running add_secret_version example");
    add_secret_version::sample(
        &client,
        project_id,
        &secret_id,
        "my super secret data".into(),
    )
    .await?;
    tracing::info!("running access_secret_version example");
    access_secret_version::sample(&client, project_id, &secret_id, "latest").await?;
    tracing::info!("running get_secret_version example");
    get_secret_version::sample(&client, project_id, &secret_id, "1").await?;
    tracing::info!("running update_secret_with_alias example");
    update_secret_with_alias::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running list_secret_versions example");
    list_secret_versions::sample(&client, project_id, &secret_id).await?;
    tracing::info!("running list_secret_versions_with_filter example");
    list_secret_versions_with_filter::sample(&client, project_id, &secret_id, "state:ENABLED")
        .await?;

    tracing::info!("running disable_secret_version example");
    disable_secret_version::sample(&client, project_id, &secret_id, "1").await?;
    tracing::info!("running enable_secret_version example");
    enable_secret_version::sample(&client, project_id, &secret_id, "1").await?;

    let etag = current_version_etag(&client, project_id, &secret_id, "1").await?;
    tracing::info!("running disable_secret_version_with_etag example");
    disable_secret_version_with_etag::sample(&client, project_id, &secret_id, "1", &etag).await?;
    let etag = current_version_etag(&client, project_id, &secret_id, "1").await?;
    tracing::info!("running enable_secret_version_with_etag example");
    enable_secret_version_with_etag::sample(&client, project_id, &secret_id, "1", &etag).await?;

    tracing::info!("running destroy_secret_version example");
    destroy_secret_version::sample(&client, project_id, &secret_id, "1").await?;

    add_secret_version::sample(&client, project_id, &secret_id, "rotated data".into()).await?;
    let etag = current_version_etag(&client, project_id, &secret_id, "2").await?;
    tracing::info!("running destroy_secret_version_with_etag example");
    destroy_secret_version_with_etag::sample(&client, project_id, &secret_id, "2", &etag).await?;

    delete_secret::sample(&client, project_id, &secret_id).await?;
    Ok(())
}

pub async fn run_iam_examples(
    project_id: &str,
    member: &str,
    secret_ids: &mut Vec<String>,
) -> anyhow::Result<()> {
    let client = SecretManagerService::builder().build().await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    create_secret::sample(&client, project_id, &secret_id).await?;

    tracing::info!("running iam_grant_access example");
    iam_grant_access::sample(&client, project_id, &secret_id, member).await?;
    tracing::info!("running iam_revoke_access example");
    iam_revoke_access::sample(&client, project_id, &secret_id, member).await?;

    delete_secret::sample(&client, project_id, &secret_id).await?;
    Ok(())
}

pub async fn run_rotation_examples(
    project_id: &str,
    topic_name: &str,
    secret_ids: &mut Vec<String>,
) -> anyhow::Result<()> {
    let client = SecretManagerService::builder().build().await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_rotation example");
    create_secret_with_rotation::sample(&client, project_id, &secret_id, topic_name).await?;
    tracing::info!("running update_secret_rotation_period example");
    update_secret_rotation_period::sample(&client, project_id, &secret_id).await?;
    delete_secret::sample(&client, project_id, &secret_id).await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_topic example");
    create_secret_with_topic::sample(&client, project_id, &secret_id, topic_name).await?;
    delete_secret::sample(&client, project_id, &secret_id).await?;

    Ok(())
}

pub async fn run_cmek_examples(
    project_id: &str,
    kms_key_name: &str,
    secret_ids: &mut Vec<String>,
) -> anyhow::Result<()> {
    let client = SecretManagerService::builder().build().await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_cmek example");
    create_secret_with_cmek::sample(&client, project_id, &secret_id, kms_key_name).await?;
    delete_secret::sample(&client, project_id, &secret_id).await?;
    Ok(())
}

pub async fn run_tags_examples(
    project_id: &str,
    tag_key: &str,
    tag_value: &str,
    secret_ids: &mut Vec<String>,
) -> anyhow::Result<()> {
    let client = SecretManagerService::builder().build().await?;

    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_secret_with_tags example");
    create_secret_with_tags::sample(&client, project_id, &secret_id, tag_key, tag_value).await?;
    delete_secret::sample(&client, project_id, &secret_id).await?;
    Ok(())
}

pub async fn run_regional_examples(
    project_id: &str,
    location_id: &str,
    secret_ids: &mut Vec<String>,
) -> anyhow::Result<()> {
    let secret_id = random_secret_id();
    secret_ids.push(secret_id.clone());
    tracing::info!("running create_regional_secret example");
    create_regional_secret::sample(project_id, location_id, &secret_id).await?;

    let client = regional_client(location_id).await?;
    let parent = format!("projects/{project_id}/locations/{location_id}/secrets/{secret_id}");
    client
        .add_secret_version()
        .set_parent(&parent)
        .set_payload(
            google_cloud_secretmanager_v1::model::SecretPayload::new()
                .set_data("regional secret data".as_bytes().to_vec()),
        )
        .send()
        .await?;
    tracing::info!("running access_regional_secret_version example");
    access_regional_secret_version::sample(project_id, location_id, &secret_id, "latest").await?;

    client.delete_secret().set_name(&parent).send().await?;
    Ok(())
}

/// Builds a client for the regional service endpoint.
pub async fn regional_client(location_id: &str) -> anyhow::Result<SecretManagerService> {
    let client = SecretManagerService::builder()
        .with_endpoint(format!(
            "https://secretmanager.{location_id}.rep.googleapis.com"
        ))
        .build()
        .await?;
    Ok(client)
}

async fn current_secret_etag(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
) -> anyhow::Result<String> {
    let secret = client
        .get_secret()
        .set_name(format!("projects/{project_id}/secrets/{secret_id}"))
        .send()
        .await?;
    Ok(secret.etag)
}

async fn current_version_etag(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
    version_id: &str,
) -> anyhow::Result<String> {
    let version = client
        .get_secret_version()
        .set_name(format!(
            "projects/{project_id}/secrets/{secret_id}/versions/{version_id}"
        ))
        .send()
        .await?;
    Ok(version.etag)
}

/// Deletes a test secret, ignoring NotFound so cleanup is idempotent.
pub async fn cleanup_test_secret(
    client: &SecretManagerService,
    project_id: &str,
    secret_id: &str,
) -> anyhow::Result<()> {
    let result = client
        .delete_secret()
        .set_name(format!("projects/{project_id}/secrets/{secret_id}"))
        .send()
        .await;
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Deletes secrets left behind by interrupted test runs.
pub async fn cleanup_stale_secrets(
    client: &SecretManagerService,
    project_id: &str,
) -> anyhow::Result<()> {
    let stale_deadline = chrono::Utc::now() - chrono::Duration::hours(48);

    let mut secrets = client
        .list_secrets()
        .set_parent(format!("projects/{project_id}"))
        .by_item();
    while let Some(secret) = secrets.next().await.transpose()? {
        let is_test_secret = secret
            .name
            .rsplit_once("/secrets/")
            .is_some_and(|(_, id)| id.starts_with(PREFIX));
        let is_stale = secret
            .create_time
            .as_ref()
            .is_some_and(|t| t.seconds() < stale_deadline.timestamp());
        if is_test_secret && is_stale {
            tracing::info!("deleting stale test secret {}", secret.name);
            let result = client.delete_secret().set_name(&secret.name).send().await;
            if let Err(e) = result {
                tracing::warn!("cannot delete stale secret {}: {e:?}", secret.name);
            }
        }
    }
    Ok(())
}
