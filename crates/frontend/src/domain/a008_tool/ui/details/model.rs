use crate::shared::api_client;
use contracts::domain::a008_tool::Tool;

pub async fn fetch_by_id(id: &str) -> Result<Tool, String> {
    api_client::get::<Tool>(id).await
}

pub async fn save_tool(tool: Tool) -> Result<Tool, String> {
    api_client::save(&tool).await
}
