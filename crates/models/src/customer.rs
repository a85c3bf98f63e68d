use chrono::{DateTime, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;
use crate::validation::{Checker, ValidationErrors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(unique, column_type = "Text")]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl NewCustomer {
    pub fn validate(payload: &serde_json::Value) -> Result<Self, ValidationErrors> {
        let mut c = Checker::new(Customer::KIND);
        let Some(root) = c.root(payload) else {
            return c.finish(None);
        };
        let obj = Some(root);

        let name = c.string(obj, "", "name");
        let email = c.string(obj, "", "email");
        let phone = c.string(obj, "", "phone");
        let address = c.string(obj, "", "address");

        let built = match (name, email, phone, address) {
            (Some(name), Some(email), Some(phone), Some(address)) => {
                Some(NewCustomer { name, email, phone, address })
            }
            _ => None,
        };
        c.finish(built)
    }

    pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            created_at,
        }
    }
}

impl Record for Customer {
    const KIND: &'static str = "customer";

    fn email(&self) -> &str { &self.email }
}

impl From<&Customer> for ActiveModel {
    fn from(c: &Customer) -> Self {
        ActiveModel {
            id: Set(c.id),
            name: Set(c.name.clone()),
            email: Set(c.email.clone()),
            phone: Set(c.phone.clone()),
            address: Set(c.address.clone()),
            created_at: Set(c.created_at.into()),
        }
    }
}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}
