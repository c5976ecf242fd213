use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub genre: String, // free-text label, e.g. "драма"
    pub duration: i32, // minutes
    pub price: i32,    // whole currency units
    pub poster: Option<String>,
    #[sea_orm(default_value = "")]
    pub description: String,
    pub trailer: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_crew::Entity")]
    Crew,
    #[sea_orm(has_many = "super::sale::Entity")]
    Sales,
}

impl Related<super::movie_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crew.def()
    }
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_crew::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_crew::Relation::Movie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
