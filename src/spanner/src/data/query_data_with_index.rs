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

// [START spanner_query_data_with_index]
use google_cloud_spanner::client::Client;
use google_cloud_spanner::statement::Statement;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let mut stmt = Statement::new(
        "SELECT AlbumId, AlbumTitle, MarketingBudget \
         FROM Albums@{FORCE_INDEX=AlbumsByAlbumTitle} \
         WHERE AlbumTitle >= @startTitle AND AlbumTitle < @endTitle",
    );
    stmt.add_param("startTitle", &"Aardvark");
    stmt.add_param("endTitle", &"Goo");
    let mut tx = client.single().await?;
    let mut rows = tx.query(stmt).await?;
    while let Some(row) = rows.next().await? {
        let album_id = row.column_by_name::<i64>("AlbumId")?;
        let album_title = row.column_by_name::<String>("AlbumTitle")?;
        let budget = row.column_by_name::<Option<i64>>("MarketingBudget")?;
        let budget = budget.map_or("NULL".to_string(), |b| b.to_string());
        println!("{album_id} {album_title} {budget}");
    }
    Ok(())
}
// [END spanner_query_data_with_index]
