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

// [START spanner_query_data_with_timestamp_column]
use google_cloud_spanner::client::Client;
use google_cloud_spanner::statement::Statement;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let stmt = Statement::new(
        "SELECT SingerId, VenueId, Revenue, LastUpdateTime FROM Performances \
         ORDER BY LastUpdateTime DESC",
    );
    let mut tx = client.single().await?;
    let mut rows = tx.query(stmt).await?;
    while let Some(row) = rows.next().await? {
        let singer_id = row.column_by_name::<i64>("SingerId")?;
        let venue_id = row.column_by_name::<i64>("VenueId")?;
        let revenue = row.column_by_name::<Option<i64>>("Revenue")?;
        let last_update = row.column_by_name::<time::OffsetDateTime>("LastUpdateTime")?;
        let revenue = revenue.map_or("NULL".to_string(), |r| r.to_string());
        println!("{singer_id} {venue_id} {revenue} {last_update:?}");
    }
    Ok(())
}
// [END spanner_query_data_with_timestamp_column]
