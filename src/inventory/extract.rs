use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::sources::Page;

/// Condense paged results into one list of records, in page order.
pub fn flatten_records(pages: &[Page], records_key: &str) -> Vec<Value> {
    pages
        .iter()
        .filter_map(|page| page.get(records_key).and_then(Value::as_array))
        .flat_map(|records| records.iter().cloned())
        .collect()
}

/// user id -> email, for every user record that has both.
pub fn user_emails(users: &[Value]) -> BTreeMap<String, String> {
    let mut emails = BTreeMap::new();
    for user in users {
        match (field_as_string(user, "id"), field_as_string(user, "email")) {
            (Some(id), Some(email)) => {
                emails.insert(id, email);
            }
            (Some(id), None) => warn!("user {} has no email", id),
            _ => warn!("skipping user record without id"),
        }
    }
    emails
}

/// Maps derived from the phone number records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PhoneInventory {
    /// number -> phone number id; empty for unassigned-only listings
    pub all_numbers: BTreeMap<String, String>,
    /// number -> phone number id
    pub unassigned_numbers: BTreeMap<String, String>,
    /// assignee id -> number
    pub user_phone_numbers: BTreeMap<String, String>,
    /// assignee id -> extension number
    pub user_extensions: BTreeMap<String, String>,
}

impl PhoneInventory {
    /// Splits a full listing into assigned and unassigned numbers.
    pub fn from_records(records: &[Value]) -> Self {
        let mut inventory = Self::default();

        for record in records {
            let Some((number, id)) = number_and_id(record) else {
                continue;
            };
            inventory.all_numbers.insert(number.clone(), id.clone());

            match record.get("assignee").filter(|assignee| !assignee.is_null()) {
                Some(assignee) => {
                    let Some(assignee_id) = field_as_string(assignee, "id") else {
                        warn!("assignee of {} has no id", number);
                        continue;
                    };
                    if let Some(extension) = field_as_string(assignee, "extension_number")
                        .filter(|extension| !extension.is_empty())
                    {
                        inventory.user_extensions.insert(assignee_id.clone(), extension);
                    }
                    inventory.user_phone_numbers.insert(assignee_id, number);
                }
                None => {
                    inventory.unassigned_numbers.insert(number, id);
                }
            }
        }

        inventory
    }

    /// Records fetched with the provider's `type=unassigned` filter are taken as unassigned as-is.
    pub fn from_unassigned_records(records: &[Value]) -> Self {
        let unassigned_numbers = records.iter().filter_map(number_and_id).collect();
        Self {
            unassigned_numbers,
            ..Self::default()
        }
    }
}

fn number_and_id(record: &Value) -> Option<(String, String)> {
    match (field_as_string(record, "number"), field_as_string(record, "id")) {
        (Some(number), Some(id)) => Some((number, id)),
        _ => {
            warn!("skipping phone number record without number or id: {}", record);
            None
        }
    }
}

/// Ids and extensions come back as strings or as numbers depending on the endpoint.
fn field_as_string(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
