use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::store::decode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Medical,
    AuxiliaireCesu,
    Kinesitherapeute,
    Infirmier,
    VisiteClient,
    Repas,
    AuxiliairePrestataire,
    RenouvellementOrdonnance,
    CongeAuxiliaire,
    // Anything written by an older or tampered client
    #[default]
    #[serde(other)]
    Other,
}

impl AppointmentType {
    /// Background colour used on the planning grid
    pub fn color(&self) -> &'static str {
        match self {
            AppointmentType::Medical => "#e74c3c",
            AppointmentType::AuxiliaireCesu => "#3498db",
            AppointmentType::Kinesitherapeute => "#9b59b6",
            AppointmentType::Infirmier => "#1abc9c",
            AppointmentType::VisiteClient => "#f39c12",
            AppointmentType::Repas => "#27ae60",
            AppointmentType::AuxiliairePrestataire => "#2980b9",
            AppointmentType::RenouvellementOrdonnance => "#c0392b",
            AppointmentType::CongeAuxiliaire => "#7f8c8d",
            AppointmentType::Other => "#95a5a6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::Medical => "Rendez-vous médical",
            AppointmentType::AuxiliaireCesu => "Auxiliaire CESU",
            AppointmentType::Kinesitherapeute => "Kinésithérapeute",
            AppointmentType::Infirmier => "Infirmier",
            AppointmentType::VisiteClient => "Visite client",
            AppointmentType::Repas => "Repas",
            AppointmentType::AuxiliairePrestataire => "Auxiliaire prestataire",
            AppointmentType::RenouvellementOrdonnance => "Renouvellement d'ordonnance",
            AppointmentType::CongeAuxiliaire => "Congé auxiliaire",
            AppointmentType::Other => "Autre",
        }
    }

    pub fn is_caregiver(&self) -> bool {
        matches!(
            self,
            AppointmentType::AuxiliaireCesu
                | AppointmentType::AuxiliairePrestataire
                | AppointmentType::CongeAuxiliaire
        )
    }

    pub fn is_external_provider(&self) -> bool {
        matches!(
            self,
            AppointmentType::Medical
                | AppointmentType::Kinesitherapeute
                | AppointmentType::Infirmier
        )
    }
}

/// Stored with the appointment and shown on the planning, never expanded
/// into future occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default, deserialize_with = "decode::id")]
    pub id: i64,
    // Kept as the raw stored string, grid matching is done on it directly
    #[serde(default, deserialize_with = "decode::text")]
    pub date: String,
    #[serde(default, deserialize_with = "decode::text")]
    pub start_time: String,
    #[serde(default, deserialize_with = "decode::text")]
    pub end_time: String,
    #[serde(rename = "type", default, deserialize_with = "decode::or_default")]
    pub kind: AppointmentType,
    #[serde(
        default,
        deserialize_with = "decode::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub beneficiary_ref: Option<i64>,
    #[serde(
        default,
        deserialize_with = "decode::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub caregiver_ref: Option<i64>,
    #[serde(
        default,
        deserialize_with = "decode::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub external_provider_name: Option<String>,
    #[serde(default, deserialize_with = "decode::or_default")]
    pub recurrence: Recurrence,
    #[serde(default, deserialize_with = "decode::text")]
    pub description: String,
}

impl Appointment {
    /// The parsed civil date, `None` when the stored string is malformed
    pub fn civil_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Form submission for a new appointment. The id is assigned on
/// creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    #[serde(default, deserialize_with = "decode::optional_id")]
    pub beneficiary_ref: Option<i64>,
    #[serde(default, deserialize_with = "decode::optional_id")]
    pub caregiver_ref: Option<i64>,
    #[serde(default, deserialize_with = "decode::optional_text")]
    pub external_provider_name: Option<String>,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default, deserialize_with = "decode::text")]
    pub description: String,
}

impl NewAppointment {
    /// Build the stored record, using the creation time in milliseconds
    /// as the id.
    pub fn into_appointment(self) -> Appointment {
        self.into_appointment_with_id(Utc::now().timestamp_millis())
    }

    pub fn into_appointment_with_id(self, id: i64) -> Appointment {
        Appointment {
            id,
            date: self.date.format("%Y-%m-%d").to_string(),
            start_time: self.start_time,
            end_time: self.end_time,
            kind: self.kind,
            beneficiary_ref: self.beneficiary_ref,
            caregiver_ref: self.caregiver_ref,
            external_provider_name: self.external_provider_name,
            recurrence: self.recurrence,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_decodes_a_stored_record() {
        let appt: Appointment = serde_json::from_value(json!({
            "id": 1736899200000_i64,
            "date": "2025-01-15",
            "startTime": "09:00",
            "endTime": "10:00",
            "type": "auxiliaire-cesu",
            "caregiverRef": 7,
            "recurrence": "weekly",
            "description": "Toilette"
        }))
        .unwrap();

        assert_eq!(appt.kind, AppointmentType::AuxiliaireCesu);
        assert_eq!(appt.caregiver_ref, Some(7));
        assert_eq!(appt.recurrence, Recurrence::Weekly);
        assert_eq!(appt.civil_date(), NaiveDate::from_ymd_opt(2025, 1, 15));
    }

    #[test]
    fn it_falls_back_for_unknown_types() {
        let appt: Appointment = serde_json::from_value(json!({
            "id": 1,
            "date": "2025-01-15",
            "type": "astrologue"
        }))
        .unwrap();

        assert_eq!(appt.kind, AppointmentType::Other);
        assert_eq!(appt.kind.color(), AppointmentType::default().color());
    }

    #[test]
    fn it_tolerates_missing_fields() {
        let appt: Appointment = serde_json::from_value(json!({"id": 3})).unwrap();
        assert_eq!(appt.date, "");
        assert_eq!(appt.civil_date(), None);
        assert_eq!(appt.recurrence, Recurrence::None);
    }

    #[test]
    fn it_decodes_loose_form_values() {
        let appt: Appointment = serde_json::from_value(json!({
            "id": "1736899200000",
            "date": "2025-01-15",
            "type": null,
            "beneficiaryRef": "3",
            "caregiverRef": "",
            "externalProviderName": "",
            "recurrence": "yearly",
            "description": null
        }))
        .unwrap();

        assert_eq!(appt.id, 1736899200000);
        assert_eq!(appt.kind, AppointmentType::Other);
        assert_eq!(appt.beneficiary_ref, Some(3));
        assert_eq!(appt.caregiver_ref, None);
        assert_eq!(appt.external_provider_name, None);
        assert_eq!(appt.recurrence, Recurrence::None);
        assert_eq!(appt.description, "");
    }

    #[test]
    fn it_accepts_string_refs_from_the_form() {
        let new: NewAppointment = serde_json::from_value(json!({
            "date": "2025-03-04",
            "startTime": "14:00",
            "endTime": "15:00",
            "type": "visite-client",
            "beneficiaryRef": "2",
            "caregiverRef": "",
            "description": null
        }))
        .unwrap();

        let appt = new.into_appointment_with_id(1);
        assert_eq!(appt.beneficiary_ref, Some(2));
        assert_eq!(appt.caregiver_ref, None);
        assert_eq!(appt.description, "");
    }

    #[test]
    fn it_serializes_with_camel_case_keys() {
        let new: NewAppointment = serde_json::from_value(json!({
            "date": "2025-03-04",
            "startTime": "14:00",
            "endTime": "15:00",
            "type": "kinesitherapeute",
            "beneficiaryRef": 2,
            "externalProviderName": "Cabinet Martin"
        }))
        .unwrap();

        let value = serde_json::to_value(new.into_appointment_with_id(10)).unwrap();
        assert_eq!(value["date"], "2025-03-04");
        assert_eq!(value["type"], "kinesitherapeute");
        assert_eq!(value["externalProviderName"], "Cabinet Martin");
        assert_eq!(value["recurrence"], "none");
        assert!(value.get("caregiverRef").is_none());
    }
}
