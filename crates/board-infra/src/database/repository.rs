//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbConn, DbErr, EntityTrait, JoinType,
    NotSet, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait, Unchanged,
};

use board_core::domain::{Comment, Like, Post, Tag};
use board_core::error::RepoError;
use board_core::ports::{
    CommentRepository, LikeRepository, Page, PageRequest, PostFilter, PostRepository, PostSummary,
};

use super::entity::{comment, like, post, tag};

fn query_err(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

fn update_err(err: DbErr) -> RepoError {
    match err {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// PostgreSQL post repository. Post and tag rows are written together;
/// every mutation runs in one transaction.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn insert_tags(
        txn: &DatabaseTransaction,
        post_id: i64,
        tags: &[Tag],
    ) -> Result<(), RepoError> {
        if tags.is_empty() {
            return Ok(());
        }

        let models = tags.iter().map(|t| tag::ActiveModel {
            id: NotSet,
            post_id: Set(post_id),
            name: Set(t.name.clone()),
            created_by: Set(t.created_by.clone()),
        });
        tag::Entity::insert_many(models)
            .exec(txn)
            .await
            .map_err(query_err)?;
        Ok(())
    }

    /// First tag name per post, by insertion (id) order.
    async fn first_tags(&self, post_ids: &[i64]) -> Result<HashMap<i64, String>, RepoError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let tags = tag::Entity::find()
            .filter(tag::Column::PostId.is_in(post_ids.iter().copied()))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        let mut first = HashMap::new();
        for t in tags {
            first.entry(t.post_id).or_insert(t.name);
        }
        Ok(first)
    }

    async fn like_counts(&self, post_ids: &[i64]) -> Result<HashMap<i64, u64>, RepoError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = like::Entity::find()
            .select_only()
            .column(like::Column::PostId)
            .column_as(like::Column::Id.count(), "like_count")
            .filter(like::Column::PostId.is_in(post_ids.iter().copied()))
            .group_by(like::Column::PostId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(|(id, n)| (id, n as u64)).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<i64, RepoError> {
        let Post {
            title,
            content,
            tags,
            audit,
            ..
        } = post;

        let txn = self.db.begin().await.map_err(query_err)?;

        let model = post::ActiveModel {
            id: NotSet,
            title: Set(title),
            content: Set(content),
            created_by: Set(audit.created_by),
            created_at: Set(audit.created_at.into()),
            updated_by: Set(None),
            updated_at: Set(None),
        };
        let inserted = model.insert(&txn).await.map_err(query_err)?;

        Self::insert_tags(&txn, inserted.id, &tags).await?;

        txn.commit().await.map_err(query_err)?;
        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let Some(model) = post::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        let tags = tag::Entity::find()
            .filter(tag::Column::PostId.eq(id))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(Some(model.into_domain(tags)))
    }

    async fn exists(&self, id: i64) -> Result<bool, RepoError> {
        let count = post::Entity::find()
            .filter(post::Column::Id.eq(id))
            .count(&self.db)
            .await
            .map_err(query_err)?;
        Ok(count > 0)
    }

    async fn update(&self, post: &Post, replace_tags: bool) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        let model = post::ActiveModel {
            id: Unchanged(post.id),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            updated_by: Set(post.audit.updated_by.clone()),
            updated_at: Set(post.audit.updated_at.map(Into::into)),
            ..Default::default()
        };
        model.update(&txn).await.map_err(update_err)?;

        if replace_tags {
            tag::Entity::delete_many()
                .filter(tag::Column::PostId.eq(post.id))
                .exec(&txn)
                .await
                .map_err(query_err)?;
            Self::insert_tags(&txn, post.id, &post.tags).await?;
        }

        txn.commit().await.map_err(query_err)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        // comment, tag and like rows go with it via ON DELETE CASCADE
        let result = post::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn find_page(
        &self,
        request: PageRequest,
        filter: PostFilter,
    ) -> Result<Page<PostSummary>, RepoError> {
        let mut query = post::Entity::find();

        if let Some(title) = &filter.title {
            query = query.filter(post::Column::Title.contains(title.as_str()));
        }
        if let Some(created_by) = &filter.created_by {
            query = query.filter(post::Column::CreatedBy.eq(created_by.as_str()));
        }
        if let Some(tag_name) = &filter.tag {
            query = query
                .join(JoinType::InnerJoin, post::Relation::Tag.def())
                .filter(tag::Column::Name.eq(tag_name.as_str()))
                .distinct();
        }

        let paginator = query
            .order_by_desc(post::Column::Id)
            .paginate(&self.db, request.size.max(1));
        let total = paginator.num_items().await.map_err(query_err)?;
        let models = paginator
            .fetch_page(request.page)
            .await
            .map_err(query_err)?;

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let first_tags = self.first_tags(&ids).await?;
        let like_counts = self.like_counts(&ids).await?;

        let content = models
            .into_iter()
            .map(|m| PostSummary {
                id: m.id,
                title: m.title,
                created_by: m.created_by,
                created_at: m.created_at.into(),
                first_tag: first_tags.get(&m.id).cloned(),
                like_count: like_counts.get(&m.id).copied().unwrap_or(0),
            })
            .collect();

        Ok(Page::new(content, request, total))
    }
}

/// PostgreSQL comment repository.
pub struct PostgresCommentRepository {
    db: DbConn,
}

impl PostgresCommentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<i64, RepoError> {
        let model = comment::ActiveModel {
            id: NotSet,
            post_id: Set(comment.post_id),
            content: Set(comment.content),
            created_by: Set(comment.audit.created_by),
            created_at: Set(comment.audit.created_at.into()),
            updated_by: Set(None),
            updated_at: Set(None),
        };

        let inserted = model.insert(&self.db).await.map_err(query_err)?;
        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        let result = comment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn update(&self, comment: &Comment) -> Result<(), RepoError> {
        let model = comment::ActiveModel {
            id: Unchanged(comment.id),
            content: Set(comment.content.clone()),
            updated_by: Set(comment.audit.updated_by.clone()),
            updated_at: Set(comment.audit.updated_at.map(Into::into)),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(update_err)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = comment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let result = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// PostgreSQL like repository.
pub struct PostgresLikeRepository {
    db: DbConn,
}

impl PostgresLikeRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn create(&self, like: Like) -> Result<i64, RepoError> {
        let model = like::ActiveModel {
            id: NotSet,
            post_id: Set(like.post_id),
            created_by: Set(like.created_by),
            created_at: Set(like.created_at.into()),
        };

        let inserted = model.insert(&self.db).await.map_err(query_err)?;
        Ok(inserted.id)
    }

    async fn count_by_post_id(&self, post_id: i64) -> Result<u64, RepoError> {
        like::Entity::find()
            .filter(like::Column::PostId.eq(post_id))
            .count(&self.db)
            .await
            .map_err(query_err)
    }
}
