//! Snippet repository for database operations.

use anyhow::Result;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::entities::snippet::fold_case;
use crate::entities::{snippet, user};
use crate::models::SnippetItem;

/// Feed filter: public rows whose title or description contains the search
/// text (case-insensitive), optionally narrowed to one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFilter {
    pub search_text: String,
    pub language: Option<String>,
}

impl SnippetFilter {
    pub fn new(search_text: &str, language: Option<&str>) -> Self {
        Self {
            search_text: search_text.to_string(),
            language: language.filter(|l| !l.is_empty()).map(str::to_string),
        }
    }

    /// Build the WHERE clause shared by the count and the page query.
    pub fn condition(&self) -> Condition {
        // Folded columns hold Rust-lowercased text, so both sides use the same folding
        let pattern = format!("%{}%", escape_like(&fold_case(&self.search_text)));

        let text_match = Condition::any()
            .add(
                Expr::col((snippet::Entity, snippet::Column::TitleFolded))
                    .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)),
            )
            .add(
                Expr::col((snippet::Entity, snippet::Column::DescriptionFolded))
                    .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
            );

        let mut condition = Condition::all()
            .add(snippet::Column::IsPublic.eq(true))
            .add(text_match);

        if let Some(language) = &self.language {
            condition = condition.add(snippet::Column::Language.eq(language.as_str()));
        }

        condition
    }
}

/// Escape character for LIKE patterns
const LIKE_ESCAPE: char = '!';

/// Treat LIKE wildcards in user input as literal characters.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Total number of matching rows and the requested slice of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetPage {
    pub total: u64,
    pub rows: Vec<SnippetItem>,
}

/// Repository for snippet-related database operations.
pub struct SnippetRepository;

impl SnippetRepository {
    /// Insert a new snippet.
    pub async fn create<C>(conn: &C, snippet: snippet::ActiveModel) -> Result<snippet::Model>
    where
        C: ConnectionTrait,
    {
        Ok(snippet.insert(conn).await?)
    }

    /// Update an existing snippet. Fails if no row has the model's id.
    pub async fn update<C>(conn: &C, snippet: snippet::ActiveModel) -> Result<snippet::Model>
    where
        C: ConnectionTrait,
    {
        Ok(snippet.update(conn).await?)
    }

    /// Get a single snippet by id with its author attached.
    pub async fn get_with_author<C>(conn: &C, id: &str) -> Result<Option<SnippetItem>>
    where
        C: ConnectionTrait,
    {
        snippet::Entity::find_by_id(id.to_string())
            .find_also_related(user::Entity)
            .one(conn)
            .await?
            .map(with_author)
            .transpose()
    }

    /// Count rows matching the filter.
    pub async fn count<C>(conn: &C, filter: &SnippetFilter) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(snippet::Entity::find().filter(filter.condition()).count(conn).await?)
    }

    /// Fetch matching rows newest first, skipping `skip` and returning at most `take`.
    pub async fn find_page<C>(conn: &C, filter: &SnippetFilter, skip: u64, take: u64) -> Result<Vec<SnippetItem>>
    where
        C: ConnectionTrait,
    {
        snippet::Entity::find()
            .filter(filter.condition())
            .find_also_related(user::Entity)
            .order_by_desc(snippet::Column::CreatedAt)
            .order_by_desc(snippet::Column::Id)
            .offset(skip)
            .limit(take)
            .all(conn)
            .await?
            .into_iter()
            .map(with_author)
            .collect()
    }

    /// Count and fetch one page inside a single transaction so both reflect
    /// the same snapshot.
    pub async fn search<C>(conn: &C, filter: &SnippetFilter, skip: u64, take: u64) -> Result<SnippetPage>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let total = Self::count(&txn, filter).await?;
        let rows = Self::find_page(&txn, filter, skip, take).await?;

        txn.commit().await?;
        Ok(SnippetPage { total, rows })
    }
}

fn with_author((snippet, author): (snippet::Model, Option<user::Model>)) -> Result<SnippetItem> {
    let author = author.ok_or_else(|| anyhow::anyhow!("Author not found for snippet: {}", snippet.id))?;
    Ok(SnippetItem::from_parts(snippet, author))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100!%");
        assert_eq!(escape_like("snake_case"), "snake!_case");
        assert_eq!(escape_like("wow!"), "wow!!");
        assert_eq!(escape_like("C:\\dir"), "C:\\dir");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_empty_language_is_ignored() {
        assert_eq!(SnippetFilter::new("abc", Some("")).language, None);
        assert_eq!(SnippetFilter::new("abc", None).language, None);
        assert_eq!(
            SnippetFilter::new("abc", Some("rust")).language.as_deref(),
            Some("rust")
        );
    }
}
