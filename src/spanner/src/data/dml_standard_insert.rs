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

// [START spanner_dml_standard_insert]
use google_cloud_spanner::client::{Client, Error};
use google_cloud_spanner::statement::Statement;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let result: Result<_, Error> = client
        .read_write_transaction(|tx| {
            Box::pin(async move {
                let stmt = Statement::new(
                    "INSERT INTO Singers (SingerId, FirstName, LastName) \
                     VALUES (10, 'Virginia', 'Watson')",
                );
                let rows = tx.update(stmt).await?;
                Ok(rows)
            })
        })
        .await;

    let (_, rows) = result?;
    println!("{rows} record(s) inserted");
    Ok(())
}
// [END spanner_dml_standard_insert]
