//! Repository for the `blog_posts` table.

use maris_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list for `blog_posts` queries.
const BLOG_POST_COLUMNS: &str = "\
    id, title, slug, excerpt, content, author, published_at, image_key, \
    image_url, category, read_time_mins, created_at, updated_at";

/// Read time assigned to posts created without one.
const DEFAULT_READ_TIME_MINS: i32 = 5;

/// How many related posts a lookup returns at most.
const RELATED_LIMIT: i64 = 3;

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Create a blog post.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts \
                 (title, slug, excerpt, content, author, published_at, image_key, \
                  image_url, category, read_time_mins) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {BLOG_POST_COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.author)
            .bind(input.published_at)
            .bind(&input.image_key)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(input.read_time_mins.unwrap_or(DEFAULT_READ_TIME_MINS))
            .fetch_one(pool)
            .await
    }

    /// List all posts, newest publication first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {BLOG_POST_COLUMNS} FROM blog_posts ORDER BY published_at DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Find a post by slug. First match wins when duplicates exist.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {BLOG_POST_COLUMNS} FROM blog_posts WHERE slug = $1 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Posts in the same category, excluding one slug, newest first.
    pub async fn list_related(
        pool: &PgPool,
        category: &str,
        exclude_slug: &str,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {BLOG_POST_COLUMNS} FROM blog_posts \
             WHERE category = $1 AND slug <> $2 \
             ORDER BY published_at DESC \
             LIMIT $3"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(category)
            .bind(exclude_slug)
            .bind(RELATED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Returns `None` if no post with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 title = COALESCE($2, title), \
                 slug = COALESCE($3, slug), \
                 excerpt = COALESCE($4, excerpt), \
                 content = COALESCE($5, content), \
                 author = COALESCE($6, author), \
                 published_at = COALESCE($7, published_at), \
                 image_key = COALESCE($8, image_key), \
                 image_url = COALESCE($9, image_url), \
                 category = COALESCE($10, category), \
                 read_time_mins = COALESCE($11, read_time_mins), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {BLOG_POST_COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.author)
            .bind(input.published_at)
            .bind(&input.image_key)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(input.read_time_mins)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
