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

//! Code samples for Cloud Spanner.
//!
//! Administration samples use the generated admin clients; data samples use
//! the Spanner data client. The driver functions below chain the samples
//! over a randomly named instance and database; the integration tests and
//! the `spanner-snippets` binary call into them.

pub mod admin;
pub mod data;

use google_cloud_gax::error::rpc::Code;
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_spanner::client::{Client, ClientConfig};
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Database;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;
use google_cloud_wkt::FieldMask;
use samples_test_utils::resource_names::{PREFIX, random_backup_id, random_database_id};

/// Connects the data client to `database`.
pub async fn connect(database: &str) -> anyhow::Result<Client> {
    let config = ClientConfig::default().with_auth().await?;
    let client = Client::new(database, config).await?;
    Ok(client)
}

/// Splits `projects/<p>/instances/<i>/databases/<d>` into the instance name
/// and the database id.
pub fn split_database_name(database: &str) -> anyhow::Result<(String, String)> {
    let invalid = || {
        anyhow::anyhow!(
            "invalid database name {database}, \
             expected projects/<project>/instances/<instance>/databases/<database>"
        )
    };
    let (instance, database_id) = database.rsplit_once("/databases/").ok_or_else(invalid)?;
    let (project, instance_id) = instance.split_once("/instances/").ok_or_else(invalid)?;
    if !project.starts_with("projects/")
        || project.len() == "projects/".len()
        || instance_id.is_empty()
        || instance_id.contains('/')
        || database_id.is_empty()
        || database_id.contains('/')
    {
        return Err(invalid());
    }
    Ok((instance.to_string(), database_id.to_string()))
}

pub async fn run_instance_examples(
    project_id: &str,
    instance_id: &str,
) -> anyhow::Result<()> {
    let client = InstanceAdmin::builder().build().await?;

    tracing::info!("running create_instance example");
    admin::create_instance::sample(&client, project_id, instance_id).await?;
    tracing::info!("running list_instances example");
    admin::list_instances::sample(&client, project_id).await?;
    tracing::info!("running list_instance_configs example");
    admin::list_instance_configs::sample(&client, project_id).await?;
    tracing::info!("running update_instance example");
    admin::update_instance::sample(&client, project_id, instance_id).await?;
    Ok(())
}

pub async fn run_database_examples(project_id: &str, instance_id: &str) -> anyhow::Result<()> {
    let client = DatabaseAdmin::builder().build().await?;
    let instance = format!("projects/{project_id}/instances/{instance_id}");

    let database = format!("{instance}/databases/{}", random_database_id());
    tracing::info!("running create_database example");
    admin::create_database::sample(&client, &database).await?;
    tracing::info!("running add_column example");
    admin::add_column::sample(&client, &database).await?;
    tracing::info!("running create_index example");
    admin::create_index::sample(&client, &database).await?;
    tracing::info!("running create_storing_index example");
    admin::create_storing_index::sample(&client, &database).await?;
    tracing::info!("running create_table_with_timestamp_column example");
    admin::create_table_with_timestamp_column::sample(&client, &database).await?;
    tracing::info!("running get_database_ddl example");
    admin::get_database_ddl::sample(&client, &database).await?;
    tracing::info!("running list_databases example");
    admin::list_databases::sample(&client, &instance).await?;
    tracing::info!("running update_database example");
    admin::update_database::sample(&client, &database).await?;
    disable_drop_protection(&client, &database).await?;

    run_data_examples(&database).await?;
    run_backup_examples(project_id, instance_id, &database).await?;

    tracing::info!("running drop_database example");
    admin::drop_database::sample(&client, &database).await?;

    let database = format!("{instance}/databases/{}", random_database_id());
    tracing::info!("running create_database_with_version_retention_period example");
    admin::create_database_with_version_retention_period::sample(&client, &database).await?;
    admin::drop_database::sample(&client, &database).await?;

    Ok(())
}

pub async fn run_data_examples(database: &str) -> anyhow::Result<()> {
    let client = connect(database).await?;

    tracing::info!("running insert_data example");
    data::insert_data::sample(&client).await?;
    tracing::info!("running update_data example");
    data::update_data::sample(&client).await?;
    tracing::info!("running query_data example");
    data::query_data::sample(&client).await?;
    tracing::info!("running read_data example");
    data::read_data::sample(&client).await?;
    tracing::info!("running query_new_column example");
    data::query_new_column::sample(&client).await?;
    tracing::info!("running query_with_parameter example");
    data::query_with_parameter::sample(&client).await?;
    tracing::info!("running query_with_array_parameter example");
    data::query_with_array_parameter::sample(&client).await?;
    tracing::info!("running query_data_with_index example");
    data::query_data_with_index::sample(&client).await?;
    tracing::info!("running read_only_transaction example");
    data::read_only_transaction::sample(&client).await?;
    tracing::info!("running read_write_transaction example");
    data::read_write_transaction::sample(&client).await?;

    tracing::info!("running dml_standard_insert example");
    data::dml_standard_insert::sample(&client).await?;
    tracing::info!("running dml_write_then_read example");
    data::dml_write_then_read::sample(&client).await?;
    tracing::info!("running dml_standard_update example");
    data::dml_standard_update::sample(&client).await?;
    tracing::info!("running dml_batch_update example");
    data::dml_batch_update::sample(&client).await?;
    tracing::info!("running dml_partitioned_update example");
    data::dml_partitioned_update::sample(&client).await?;
    tracing::info!("running dml_standard_delete example");
    data::dml_standard_delete::sample(&client).await?;
    tracing::info!("running insert_data_at_least_once example");
    data::insert_data_at_least_once::sample(&client).await?;
    tracing::info!("running dml_partitioned_delete example");
    data::dml_partitioned_delete::sample(&client).await?;

    tracing::info!("running insert_data_with_timestamp_column example");
    data::insert_data_with_timestamp_column::sample(&client).await?;
    tracing::info!("running update_data_with_timestamp_column example");
    data::update_data_with_timestamp_column::sample(&client).await?;
    tracing::info!("running query_data_with_timestamp_column example");
    data::query_data_with_timestamp_column::sample(&client).await?;

    tracing::info!("running delete_data example");
    data::delete_data::sample(&client).await?;

    client.close().await;
    Ok(())
}

pub async fn run_backup_examples(
    project_id: &str,
    instance_id: &str,
    database: &str,
) -> anyhow::Result<()> {
    let client = DatabaseAdmin::builder().build().await?;
    let instance = format!("projects/{project_id}/instances/{instance_id}");

    let backup_id = random_backup_id();
    let backup_name = format!("{instance}/backups/{backup_id}");
    tracing::info!("running create_backup example");
    admin::create_backup::sample(&client, &instance, database, &backup_id).await?;

    tracing::info!("running list_backups examples");
    admin::list_backups::sample(&client, &instance, "").await?;
    admin::list_backups::sample(&client, &instance, &format!("name:{backup_id}")).await?;
    admin::list_backups::sample(&client, &instance, "state:READY").await?;
    tracing::info!("running list_backup_operations example");
    let (_, database_id) = split_database_name(database)?;
    admin::list_backup_operations::sample(&client, &instance, &database_id).await?;
    tracing::info!("running list_database_operations example");
    admin::list_database_operations::sample(&client, &instance).await?;
    tracing::info!("running update_backup example");
    admin::update_backup::sample(&client, &backup_name).await?;

    let copy_id = random_backup_id();
    let copy_name = format!("{instance}/backups/{copy_id}");
    tracing::info!("running copy_backup example");
    admin::copy_backup::sample(&client, &instance, &copy_id, &backup_name).await?;

    let restored_id = random_database_id();
    tracing::info!("running restore_backup example");
    admin::restore_backup::sample(&client, &instance, &restored_id, &backup_name).await?;
    admin::drop_database::sample(&client, &format!("{instance}/databases/{restored_id}"))
        .await?;

    tracing::info!("running cancel_backup example");
    admin::cancel_backup::sample(&client, &instance, database, &random_backup_id()).await?;

    tracing::info!("running delete_backup example");
    admin::delete_backup::sample(&client, &copy_name).await?;
    admin::delete_backup::sample(&client, &backup_name).await?;
    Ok(())
}

/// Runs the delete_instance sample, tolerating instances that are already
/// gone.
pub async fn cleanup_test_instance(project_id: &str, instance_id: &str) -> anyhow::Result<()> {
    let instance_client = InstanceAdmin::builder().build().await?;
    let database_client = DatabaseAdmin::builder().build().await?;
    let instance = format!("projects/{project_id}/instances/{instance_id}");

    // Backups block instance deletion; drop protection blocks database and
    // instance deletion. Clear both before deleting the instance.
    let mut backups = database_client.list_backups().set_parent(&instance).by_item();
    while let Some(backup) = backups.next().await {
        let Ok(backup) = backup else { break };
        if let Err(e) = database_client
            .delete_backup()
            .set_name(&backup.name)
            .send()
            .await
        {
            tracing::warn!("cannot delete backup {}: {e:?}", backup.name);
        }
    }
    let mut databases = database_client
        .list_databases()
        .set_parent(&instance)
        .by_item();
    while let Some(database) = databases.next().await {
        let Ok(database) = database else { break };
        if database.enable_drop_protection {
            if let Err(e) = disable_drop_protection(&database_client, &database.name).await {
                tracing::warn!("cannot disable drop protection on {}: {e:?}", database.name);
            }
        }
    }

    let result = instance_client
        .delete_instance()
        .set_name(&instance)
        .send()
        .await;
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Deletes instances left behind by interrupted test runs.
///
/// Matches on the test id prefix and the sample label, so it assumes a
/// single test runner per project at a time.
pub async fn cleanup_stale_instances(project_id: &str) -> anyhow::Result<()> {
    let client = InstanceAdmin::builder().build().await?;

    let mut instances = client
        .list_instances()
        .set_parent(format!("projects/{project_id}"))
        .by_item();
    let mut stale = Vec::new();
    while let Some(instance) = instances.next().await.transpose()? {
        let Some((_, instance_id)) = instance.name.rsplit_once("/instances/") else {
            continue;
        };
        if instance_id.starts_with(PREFIX)
            && instance
                .labels
                .get("cloud_spanner_samples")
                .is_some_and(|v| v == "true")
        {
            stale.push(instance_id.to_string());
        }
    }
    for instance_id in stale {
        tracing::info!("deleting stale test instance {instance_id}");
        if let Err(e) = cleanup_test_instance(project_id, &instance_id).await {
            tracing::warn!("cannot delete stale instance {instance_id}: {e:?}");
        }
    }
    Ok(())
}

async fn disable_drop_protection(client: &DatabaseAdmin, database: &str) -> anyhow::Result<()> {
    use google_cloud_lro::Poller;
    client
        .update_database()
        .set_database(
            Database::new()
                .set_name(database)
                .set_enable_drop_protection(false),
        )
        .set_update_mask(FieldMask::default().set_paths(["enable_drop_protection"]))
        .poller()
        .until_done()
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_valid_database_name() {
        let (instance, database_id) =
            split_database_name("projects/my-project/instances/my-instance/databases/my-db")
                .unwrap();
        assert_eq!(instance, "projects/my-project/instances/my-instance");
        assert_eq!(database_id, "my-db");
    }

    #[test]
    fn split_invalid_database_names() {
        let cases = [
            "",
            "my-db",
            "projects/my-project/instances/my-instance",
            "projects/my-project/instances/my-instance/databases/",
            "projects/my-project/databases/my-db",
            "projects//instances/my-instance/databases/my-db",
            "instances/my-instance/databases/my-db",
            "projects/p/instances/i/databases/d/tables/t",
        ];
        for case in cases {
            let got = split_database_name(case);
            assert!(got.is_err(), "expected an error for {case:?}, got {got:?}");
        }
    }
}
