//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

use board_core::domain::{AuditStamp, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_by: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::tag::Entity")]
    Tag,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Combine the post row with its tag rows into the domain entity.
    pub fn into_domain(self, tags: Vec<super::tag::Model>) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            tags: tags.into_iter().map(Into::into).collect(),
            audit: AuditStamp {
                created_by: self.created_by,
                created_at: self.created_at.into(),
                updated_by: self.updated_by,
                updated_at: self.updated_at.map(Into::into),
            },
        }
    }
}
