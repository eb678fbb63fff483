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

//! Runnable snippet command for Cloud Spanner.

use clap::Parser;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use spanner_samples::{admin, connect, data, split_database_name};

const ADMIN_COMMANDS: &[&str] = &[
    "createdatabase",
    "addnewcolumn",
    "addindex",
    "addstoringindex",
    "createtablewithtimestamp",
    "getdatabaseddl",
    "dropdatabase",
];

#[derive(Parser)]
#[command(
    name = "spanner-snippets",
    about = "Runs one Cloud Spanner sample against a database",
    after_help = "\
Commands: createdatabase, addnewcolumn, addindex, addstoringindex,
    createtablewithtimestamp, getdatabaseddl, dropdatabase, write, update,
    query, read, querynewcolumn, querywithparameter, querywitharrayparameter,
    queryindex, readonlytransaction, writetransaction, dmlinsert, dmlupdate,
    dmldelete, dmlwritethenread, dmlbatchupdate, pdmlupdate, pdmldelete,
    writeatleastonce, writewithtimestamp, updatewithtimestamp,
    querywithtimestamp, delete

Examples:
    spanner-snippets createdatabase projects/my-project/instances/my-instance/databases/example-db
    spanner-snippets write projects/my-project/instances/my-instance/databases/example-db"
)]
struct Args {
    /// The sample to run.
    command: String,
    /// The database name: projects/<project>/instances/<instance>/databases/<database>.
    database: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    // Fail early on a malformed database name, before any RPC.
    split_database_name(&args.database)?;

    if ADMIN_COMMANDS.contains(&args.command.as_str()) {
        run_admin_command(&args.command, &args.database).await
    } else {
        run_data_command(&args.command, &args.database).await
    }
}

async fn run_admin_command(command: &str, database: &str) -> anyhow::Result<()> {
    let client = DatabaseAdmin::builder().build().await?;
    match command {
        "createdatabase" => admin::create_database::sample(&client, database).await,
        "addnewcolumn" => admin::add_column::sample(&client, database).await,
        "addindex" => admin::create_index::sample(&client, database).await,
        "addstoringindex" => admin::create_storing_index::sample(&client, database).await,
        "createtablewithtimestamp" => {
            admin::create_table_with_timestamp_column::sample(&client, database).await
        }
        "getdatabaseddl" => admin::get_database_ddl::sample(&client, database).await,
        "dropdatabase" => admin::drop_database::sample(&client, database).await,
        _ => unreachable!("command {command} is not in ADMIN_COMMANDS"),
    }
}

async fn run_data_command(command: &str, database: &str) -> anyhow::Result<()> {
    let client = connect(database).await?;
    let result = match command {
        "write" => data::insert_data::sample(&client).await,
        "update" => data::update_data::sample(&client).await,
        "query" => data::query_data::sample(&client).await,
        "read" => data::read_data::sample(&client).await,
        "querynewcolumn" => data::query_new_column::sample(&client).await,
        "querywithparameter" => data::query_with_parameter::sample(&client).await,
        "querywitharrayparameter" => data::query_with_array_parameter::sample(&client).await,
        "queryindex" => data::query_data_with_index::sample(&client).await,
        "readonlytransaction" => data::read_only_transaction::sample(&client).await,
        "writetransaction" => data::read_write_transaction::sample(&client).await,
        "dmlinsert" => data::dml_standard_insert::sample(&client).await,
        "dmlupdate" => data::dml_standard_update::sample(&client).await,
        "dmldelete" => data::dml_standard_delete::sample(&client).await,
        "dmlwritethenread" => data::dml_write_then_read::sample(&client).await,
        "dmlbatchupdate" => data::dml_batch_update::sample(&client).await,
        "pdmlupdate" => data::dml_partitioned_update::sample(&client).await,
        "pdmldelete" => data::dml_partitioned_delete::sample(&client).await,
        "writeatleastonce" => data::insert_data_at_least_once::sample(&client).await,
        "writewithtimestamp" => data::insert_data_with_timestamp_column::sample(&client).await,
        "updatewithtimestamp" => data::update_data_with_timestamp_column::sample(&client).await,
        "querywithtimestamp" => data::query_data_with_timestamp_column::sample(&client).await,
        "delete" => data::delete_data::sample(&client).await,
        _ => Err(anyhow::anyhow!(
            "unknown command {command:?}, see --help for the list"
        )),
    };
    client.close().await;
    result
}
