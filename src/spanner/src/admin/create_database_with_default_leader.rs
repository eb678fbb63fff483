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

// [START spanner_create_database_with_default_leader]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

/// `default_leader` must be a region of the instance's multi-region
/// configuration, for example `us-east1`.
pub async fn sample(
    client: &DatabaseAdmin,
    database: &str,
    default_leader: &str,
) -> anyhow::Result<()> {
    let (parent, database_id) = database
        .rsplit_once("/databases/")
        .filter(|(parent, id)| parent.contains("/instances/") && !id.is_empty())
        .ok_or_else(|| anyhow::anyhow!("invalid database id {database}"))?;

    let database = client
        .create_database()
        .set_parent(parent)
        .set_create_statement(format!("CREATE DATABASE `{database_id}`"))
        .set_extra_statements([format!(
            "ALTER DATABASE `{database_id}` SET OPTIONS (default_leader = '{default_leader}')"
        )])
        .poller()
        .until_done()
        .await?;

    println!(
        "created database {} with default leader {}",
        database.name, database.default_leader
    );
    Ok(())
}
// [END spanner_create_database_with_default_leader]
