use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use kindred_types::models::{
    Admin, Donation, HealthContent, HealthContentPatch, NewAdmin, NewDonation, NewHealthContent,
    NewPartner, NewResource, NewVolunteer, Partner, Resource, Volunteer,
};

use crate::{Result, Store, StoreError, Tables};

impl Store {
    // -- Admins --

    pub fn create_admin(&self, admin: NewAdmin) -> Result<Admin> {
        self.with_tables_mut(|t| {
            let now = Utc::now();
            Ok(t.admins.insert_with(|id| Admin {
                id,
                username: admin.username,
                password_hash: admin.password_hash,
                created_at: now,
            }))
        })
    }

    pub fn list_admins(&self) -> Result<Vec<Admin>> {
        self.with_tables(|t| t.admins.all())
    }

    /// First admin with this exact username, if any.
    pub fn find_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        self.with_tables(|t| t.admins.iter().find(|a| a.username == username).cloned())
    }

    // -- Volunteers --

    pub fn create_volunteer(&self, volunteer: NewVolunteer) -> Result<Volunteer> {
        self.with_tables_mut(|t| {
            Ok(t.volunteers.insert_with(|id| Volunteer {
                id,
                name: volunteer.name,
                email: volunteer.email,
                phone: volunteer.phone,
                availability: volunteer.availability,
                skills: volunteer.skills,
            }))
        })
    }

    pub fn list_volunteers(&self) -> Result<Vec<Volunteer>> {
        self.with_tables(|t| t.volunteers.all())
    }

    // -- Donations --

    pub fn create_donation(&self, donation: NewDonation) -> Result<Donation> {
        self.with_tables_mut(|t| {
            Ok(t.donations.insert_with(|id| Donation {
                id,
                name: donation.name,
                email: donation.email,
                amount: donation.amount,
                message: donation.message,
            }))
        })
    }

    pub fn list_donations(&self) -> Result<Vec<Donation>> {
        self.with_tables(|t| t.donations.all())
    }

    // -- Partners --

    pub fn create_partner(&self, partner: NewPartner) -> Result<Partner> {
        self.with_tables_mut(|t| Ok(insert_partner(t, partner)))
    }

    pub fn list_partners(&self) -> Result<Vec<Partner>> {
        self.with_tables(|t| t.partners.all())
    }

    // -- Resources --

    pub fn create_resource(&self, resource: NewResource) -> Result<Resource> {
        self.with_tables_mut(|t| Ok(insert_resource(t, resource)))
    }

    pub fn list_resources(&self) -> Result<Vec<Resource>> {
        self.with_tables(|t| t.resources.all())
    }

    pub fn resources_by_category(&self, category: &str) -> Result<Vec<Resource>> {
        self.with_tables(|t| {
            t.resources
                .iter()
                .filter(|r| r.category == category)
                .cloned()
                .collect()
        })
    }

    // -- Health content --

    pub fn create_health_content(&self, content: NewHealthContent) -> Result<HealthContent> {
        self.with_tables_mut(|t| {
            let now = Utc::now();
            Ok(t.health_content.insert_with(|id| HealthContent {
                id,
                title: content.title,
                summary: content.summary,
                content: content.content,
                category: content.category,
                status: content.status,
                tags: content.tags.unwrap_or_default(),
                created_at: now,
                updated_at: now,
            }))
        })
    }

    pub fn list_health_content(&self) -> Result<Vec<HealthContent>> {
        self.with_tables(|t| t.health_content.all())
    }

    pub fn health_content_by_id(&self, id: u64) -> Result<Option<HealthContent>> {
        self.with_tables(|t| t.health_content.get(id).cloned())
    }

    pub fn health_content_by_status(&self, status: &str) -> Result<Vec<HealthContent>> {
        self.with_tables(|t| {
            t.health_content
                .iter()
                .filter(|c| c.status == status)
                .cloned()
                .collect()
        })
    }

    /// Merge `patch` onto an existing row and bump `updated_at`.
    pub fn update_health_content(&self, id: u64, patch: HealthContentPatch) -> Result<HealthContent> {
        self.with_tables_mut(|t| {
            let row = t.health_content.get_mut(id).ok_or(StoreError::NotFound {
                entity: "health content",
                id,
            })?;
            patch.apply_to(row);
            row.updated_at = later_than(row.updated_at);
            debug!(id, "Health content updated");
            Ok(row.clone())
        })
    }
}

pub(crate) fn insert_partner(tables: &mut Tables, partner: NewPartner) -> Partner {
    tables.partners.insert_with(|id| Partner {
        id,
        name: partner.name,
        description: partner.description,
        website: partner.website,
        logo: partner.logo,
        kind: partner.kind,
    })
}

pub(crate) fn insert_resource(tables: &mut Tables, resource: NewResource) -> Resource {
    tables.resources.insert_with(|id| Resource {
        id,
        title: resource.title,
        description: resource.description,
        category: resource.category,
        content: resource.content,
        tags: resource.tags,
    })
}

/// Current time, nudged forward if the clock has not moved past `previous`.
fn later_than(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
