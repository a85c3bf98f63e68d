use chrono::{DateTime, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::record::Record;
use crate::validation::{Checker, ValidationErrors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(unique, column_type = "Text")]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub phone: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    #[sea_orm(column_type = "Text")]
    pub experience: String,
    #[sea_orm(column_type = "Text")]
    pub education: String,
    #[sea_orm(column_type = "Text")]
    pub job_location: String,
    #[sea_orm(column_type = "Text")]
    pub job_type: String,
    #[sea_orm(column_type = "Text")]
    pub job_industry: String,
    #[sea_orm(column_type = "Text")]
    pub profile_image: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferences {
    pub location: String,
    pub job_type: String,
    pub industry: String,
}

/// A profile payload that passed schema validation, before it is stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub job_preferences: JobPreferences,
    pub profile_image: String,
}

/// A stored profile as returned over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub job_preferences: JobPreferences,
    pub profile_image: String,
    pub created_at: DateTime<Utc>,
}

impl NewProfile {
    /// Check an untrusted payload against the profile schema.
    ///
    /// Every failing field is reported. Unknown keys are ignored and values are
    /// kept exactly as sent.
    pub fn validate(payload: &serde_json::Value) -> Result<Self, ValidationErrors> {
        let mut c = Checker::new(Profile::KIND);
        let Some(root) = c.root(payload) else {
            return c.finish(None);
        };
        let obj = Some(root);

        let name = c.string(obj, "", "name");
        let email = c.string(obj, "", "email");
        let phone = c.string(obj, "", "phone");
        let skills = c.string_list(obj, "", "skills");
        let experience = c.string(obj, "", "experience");
        let education = c.string(obj, "", "education");
        let job_preferences = match c.object(obj, "", "jobPreferences") {
            Ok(prefs) => {
                let location = c.string(prefs, "jobPreferences", "location");
                let job_type = c.string(prefs, "jobPreferences", "jobType");
                let industry = c.string(prefs, "jobPreferences", "industry");
                match (location, job_type, industry) {
                    (Some(location), Some(job_type), Some(industry)) => {
                        Some(JobPreferences { location, job_type, industry })
                    }
                    _ => None,
                }
            }
            Err(()) => None,
        };
        let profile_image = c.string(obj, "", "profileImage");

        let built = (|| {
            Some(NewProfile {
                name: name?,
                email: email?,
                phone: phone?,
                skills: skills?,
                experience: experience?,
                education: education?,
                job_preferences: job_preferences?,
                profile_image: profile_image?,
            })
        })();
        c.finish(built)
    }

    pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Profile {
        Profile {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            skills: self.skills,
            experience: self.experience,
            education: self.education,
            job_preferences: self.job_preferences,
            profile_image: self.profile_image,
            created_at,
        }
    }
}

impl Record for Profile {
    const KIND: &'static str = "profile";

    fn email(&self) -> &str { &self.email }
}

impl From<&Profile> for ActiveModel {
    fn from(p: &Profile) -> Self {
        ActiveModel {
            id: Set(p.id),
            name: Set(p.name.clone()),
            email: Set(p.email.clone()),
            phone: Set(p.phone.clone()),
            skills: Set(Json::from(p.skills.clone())),
            experience: Set(p.experience.clone()),
            education: Set(p.education.clone()),
            job_location: Set(p.job_preferences.location.clone()),
            job_type: Set(p.job_preferences.job_type.clone()),
            job_industry: Set(p.job_preferences.industry.clone()),
            profile_image: Set(p.profile_image.clone()),
            created_at: Set(p.created_at.into()),
        }
    }
}

impl TryFrom<Model> for Profile {
    type Error = ModelError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let skills: Vec<String> = serde_json::from_value(m.skills)
            .map_err(|e| ModelError::Decode(format!("profile {} skills: {e}", m.id)))?;
        Ok(Profile {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            skills,
            experience: m.experience,
            education: m.education,
            job_preferences: JobPreferences {
                location: m.job_location,
                job_type: m.job_type,
                industry: m.job_industry,
            },
            profile_image: m.profile_image,
            created_at: m.created_at.with_timezone(&Utc),
        })
    }
}
