//! Raw HTML/script section factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an HTML section with a small markup blob and a body-end script.
pub async fn create_html_section(
    db: &DatabaseConnection,
) -> Result<entity::html_section::Model, DbErr> {
    let id = next_id();
    entity::html_section::ActiveModel {
        name: ActiveValue::Set(format!("Embed {}", id)),
        html_content: ActiveValue::Set(Some(format!("<div id=\"embed-{}\"></div>", id))),
        css_content: ActiveValue::Set(None),
        script_content: ActiveValue::Set(Some("console.log('embed');".to_string())),
        script_placement: ActiveValue::Set("body_end".to_string()),
        spacing: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
