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

// [START spanner_dml_write_then_read]
use google_cloud_spanner::client::{Client, Error};
use google_cloud_spanner::statement::Statement;

/// A query inside the transaction observes the uncommitted insert.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let result: Result<_, Error> = client
        .read_write_transaction(|tx| {
            Box::pin(async move {
                let stmt = Statement::new(
                    "INSERT INTO Singers (SingerId, FirstName, LastName) \
                     VALUES (11, 'Timothy', 'Campbell')",
                );
                tx.update(stmt).await?;

                let stmt = Statement::new(
                    "SELECT FirstName, LastName FROM Singers WHERE SingerId = 11",
                );
                let mut rows = tx.query(stmt).await?;
                while let Some(row) = rows.next().await? {
                    let first_name = row.column_by_name::<String>("FirstName")?;
                    let last_name = row.column_by_name::<String>("LastName")?;
                    println!("{first_name} {last_name}");
                }
                Ok(())
            })
        })
        .await;

    result?;
    Ok(())
}
// [END spanner_dml_write_then_read]
