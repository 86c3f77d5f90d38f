#[cfg(test)]
mod tests {
    use board_core::ports::{CommentRepository, PostRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::database::entity::{comment, post, tag};
    use crate::database::repository::{PostgresCommentRepository, PostgresPostRepository};

    fn post_row(id: i64, title: &str, created_by: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            content: "content".to_owned(),
            created_by: created_by.to_owned(),
            created_at: chrono::Utc::now().into(),
            updated_by: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn find_post_by_id_loads_tags_in_order() {
        // one result set per query: the post row, then its tag rows
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_row(7, "hello", "alice")]])
            .append_query_results([vec![
                tag::Model {
                    id: 1,
                    post_id: 7,
                    name: "tag1".to_owned(),
                    created_by: "alice".to_owned(),
                },
                tag::Model {
                    id: 2,
                    post_id: 7,
                    name: "tag2".to_owned(),
                    created_by: "alice".to_owned(),
                },
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let found = repo.find_by_id(7).await.unwrap().unwrap();
        assert_eq!(found.id, 7);
        assert_eq!(found.title, "hello");
        assert_eq!(found.audit.created_by, "alice");
        assert_eq!(
            found.tag_names(),
            vec!["tag1".to_owned(), "tag2".to_owned()]
        );
    }

    #[tokio::test]
    async fn find_missing_post_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_comment_by_id_maps_audit_fields() {
        let now = chrono::Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![comment::Model {
                id: 3,
                post_id: 7,
                content: "nice".to_owned(),
                created_by: "bob".to_owned(),
                created_at: now.into(),
                updated_by: Some("bob".to_owned()),
                updated_at: Some(now.into()),
            }]])
            .into_connection();

        let repo = PostgresCommentRepository::new(db);

        let found = repo.find_by_id(3).await.unwrap().unwrap();
        assert_eq!(found.post_id, 7);
        assert_eq!(found.content, "nice");
        assert_eq!(found.audit.created_by, "bob");
        assert_eq!(found.audit.updated_by.as_deref(), Some("bob"));
    }
}
