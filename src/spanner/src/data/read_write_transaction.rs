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

// [START spanner_read_write_transaction]
use google_cloud_spanner::client::{Client, Error};
use google_cloud_spanner::mutation::update;
use google_cloud_spanner::statement::Statement;

/// Moves 200000 from Album (2, 2) to Album (1, 1) if the source budget
/// allows it. The transaction function runs again when the commit aborts.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    const TRANSFER: i64 = 200000;

    let result: Result<_, Error> = client
        .read_write_transaction(|tx| {
            Box::pin(async move {
                let stmt = Statement::new(
                    "SELECT MarketingBudget FROM Albums WHERE SingerId = 2 AND AlbumId = 2",
                );
                let mut rows = tx.query(stmt).await?;
                let album2_budget = match rows.next().await? {
                    Some(row) => row.column_by_name::<i64>("MarketingBudget")?,
                    None => return Ok(()),
                };
                if album2_budget < 300000 {
                    return Ok(());
                }

                let stmt = Statement::new(
                    "SELECT MarketingBudget FROM Albums WHERE SingerId = 1 AND AlbumId = 1",
                );
                let mut rows = tx.query(stmt).await?;
                let album1_budget = match rows.next().await? {
                    Some(row) => row.column_by_name::<i64>("MarketingBudget")?,
                    None => return Ok(()),
                };

                let columns = &["SingerId", "AlbumId", "MarketingBudget"];
                tx.buffer_write(vec![
                    update("Albums", columns, &[&1_i64, &1_i64, &(album1_budget + TRANSFER)]),
                    update("Albums", columns, &[&2_i64, &2_i64, &(album2_budget - TRANSFER)]),
                ]);
                Ok(())
            })
        })
        .await;

    let (commit_timestamp, _) = result?;
    println!("moved {TRANSFER} at {commit_timestamp:?}");
    Ok(())
}
// [END spanner_read_write_transaction]
