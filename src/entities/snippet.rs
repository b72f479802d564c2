use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "snippets")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub language: String,
    #[sea_orm(column_type = "Text")]
    pub code: String,
    pub is_public: bool,
    pub created_at: DateTimeUtc,
    pub author_id: String,
    /// Lowercased `title`, maintained on save for case-insensitive search
    #[serde(skip)]
    pub title_folded: String,
    /// Lowercased `description`, maintained on save
    #[sea_orm(column_type = "Text")]
    #[serde(skip)]
    pub description_folded: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

/// Case folding applied to searchable text and to search input alike.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title_folded = ActiveValue::Set(fold_case(title));
        }
        if let ActiveValue::Set(description) = &self.description {
            self.description_folded = ActiveValue::Set(fold_case(description));
        }
        Ok(self)
    }
}
