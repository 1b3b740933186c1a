//! Who an appointment is for or with.
//!
//! Appointments point at beneficiaries and caregivers by loosely typed
//! ids, and at outside providers by free-text name. References are
//! not enforced, so lookups that miss resolve to an empty name.
use serde::Deserialize;

use super::appointment::Appointment;
use crate::store::decode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRef {
    Beneficiary(i64),
    Caregiver(i64),
    External(String),
}

/// A beneficiary or caregiver record. Only the fields needed for
/// display are read, the rest of the stored record is left alone.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    #[serde(default, deserialize_with = "decode::optional_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "decode::text")]
    pub nom: String,
    #[serde(default, deserialize_with = "decode::text")]
    pub prenom: String,
}

impl Person {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.prenom.trim(), self.nom.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub beneficiaries: Vec<Person>,
    pub caregivers: Vec<Person>,
}

impl Directory {
    pub fn new(beneficiaries: Vec<Person>, caregivers: Vec<Person>) -> Self {
        Self {
            beneficiaries,
            caregivers,
        }
    }

    pub fn display_name(&self, client: &ClientRef) -> String {
        let find = |people: &[Person], id: i64| {
            people
                .iter()
                .find(|p| p.id == Some(id))
                .map(Person::display_name)
                .unwrap_or_default()
        };

        match client {
            ClientRef::Beneficiary(id) => find(&self.beneficiaries, *id),
            ClientRef::Caregiver(id) => find(&self.caregivers, *id),
            ClientRef::External(name) => name.clone(),
        }
    }
}

impl Appointment {
    /// The counterpart shown on the planning. Caregiver appointment
    /// types look at the caregiver first, provider types at the
    /// external name first, and everything else at the beneficiary.
    pub fn client_ref(&self) -> Option<ClientRef> {
        let beneficiary = || self.beneficiary_ref.map(ClientRef::Beneficiary);
        let caregiver = || self.caregiver_ref.map(ClientRef::Caregiver);
        let external = || {
            self.external_provider_name
                .as_ref()
                .filter(|name| !name.trim().is_empty())
                .map(|name| ClientRef::External(name.clone()))
        };

        if self.kind.is_caregiver() {
            caregiver().or_else(beneficiary).or_else(external)
        } else if self.kind.is_external_provider() {
            external().or_else(beneficiary).or_else(caregiver)
        } else {
            beneficiary().or_else(caregiver).or_else(external)
        }
    }

    /// Resolved counterpart name, blank when missing or dangling
    pub fn client_name(&self, directory: &Directory) -> String {
        self.client_ref()
            .map(|client| directory.display_name(&client))
            .unwrap_or_default()
    }
}
