use tracing::debug;

use kindred_types::models::{NewPartner, NewResource};

use crate::Tables;
use crate::queries::{insert_partner, insert_resource};

/// Demonstration rows inserted when the store is built.
pub(crate) fn run(tables: &mut Tables) {
    let resources = [
        NewResource {
            title: "Understanding Anxiety".into(),
            description: "Learn about anxiety disorders and coping mechanisms".into(),
            category: "Mental Health 101".into(),
            content: "Comprehensive guide about anxiety...".into(),
            tags: vec!["anxiety".into(), "mental health".into(), "self-help".into()],
        },
        NewResource {
            title: "Meditation Basics".into(),
            description: "Introduction to meditation practices".into(),
            category: "Self-Care".into(),
            content: "Guide to meditation techniques...".into(),
            tags: vec!["meditation".into(), "mindfulness".into(), "wellness".into()],
        },
    ];
    for resource in resources {
        insert_resource(tables, resource);
    }

    insert_partner(
        tables,
        NewPartner {
            name: "Mental Health Foundation".into(),
            description: "Leading mental health research organization".into(),
            website: "https://example.com".into(),
            logo: "mhf-logo".into(),
            kind: "collaborator".into(),
        },
    );

    debug!(
        resources = tables.resources.len(),
        partners = tables.partners.len(),
        "Seed rows inserted"
    );
}
