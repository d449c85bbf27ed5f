use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a thing is first inserted.
pub type ThingId = i64;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "things")]
pub struct Model {
    // SQLite only accepts AUTOINCREMENT on a column typed exactly INTEGER
    #[sea_orm(primary_key, column_type = "Integer")]
    pub id: ThingId,
    pub shape: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Input to `save`. A draft without an id is inserted and gets one assigned;
/// a draft with an id overwrites that row, or creates it when absent.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThingDraft {
    pub id: Option<ThingId>,
    pub shape: String,
    pub color: String,
}

impl ThingDraft {
    pub fn new(shape: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            shape: shape.into(),
            color: color.into(),
        }
    }

    /// Address an existing (or to-be-created) row.
    pub fn with_id(mut self, id: ThingId) -> Self {
        self.id = Some(id);
        self
    }

    /// Build the persisted form once the store has settled on an id.
    pub(crate) fn into_model(self, id: ThingId) -> Model {
        Model {
            id,
            shape: self.shape,
            color: self.color,
        }
    }
}

impl From<Model> for ThingDraft {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            shape: model.shape,
            color: model.color,
        }
    }
}

impl IntoActiveModel<ActiveModel> for ThingDraft {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            shape: ActiveValue::Set(self.shape),
            color: ActiveValue::Set(self.color),
        }
    }
}
