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

// [START spanner_dml_batch_update]
use google_cloud_spanner::client::{Client, Error};
use google_cloud_spanner::statement::Statement;

/// The statements run sequentially in one round trip. Execution stops at
/// the first failing statement.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let result: Result<_, Error> = client
        .read_write_transaction(|tx| {
            Box::pin(async move {
                let statements = vec![
                    Statement::new(
                        "INSERT INTO Albums (SingerId, AlbumId, AlbumTitle, MarketingBudget) \
                         VALUES (1, 3, 'Test Album Title', 10000)",
                    ),
                    Statement::new(
                        "UPDATE Albums SET MarketingBudget = MarketingBudget * 2 \
                         WHERE SingerId = 1 AND AlbumId = 3",
                    ),
                ];
                let counts = tx.batch_update(statements).await?;
                Ok(counts)
            })
        })
        .await;

    let (_, counts) = result?;
    println!("executed {} SQL statements using batch DML: {counts:?}", counts.len());
    Ok(())
}
// [END spanner_dml_batch_update]
