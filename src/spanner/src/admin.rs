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

//! Samples for instance, database, and backup administration.

pub mod add_column;
pub mod cancel_backup;
pub mod copy_backup;
pub mod create_backup;
pub mod create_database;
pub mod create_database_with_default_leader;
pub mod create_database_with_version_retention_period;
pub mod create_index;
pub mod create_instance;
pub mod create_storing_index;
pub mod create_table_with_timestamp_column;
pub mod delete_backup;
pub mod delete_instance;
pub mod drop_database;
pub mod get_database_ddl;
pub mod list_backup_operations;
pub mod list_backups;
pub mod list_database_operations;
pub mod list_databases;
pub mod list_instance_configs;
pub mod list_instances;
pub mod restore_backup;
pub mod update_backup;
pub mod update_database;
pub mod update_instance;
