//! Type definitions for HealthMate API responses

use serde::{Deserialize, Serialize};

/// Consultation hours for a doctor, as plain display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    pub start: String,
    pub end: String,
}

/// One doctor record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub qualification: String,
    pub hospital_name: String,
    pub hospital_address: String,
    pub city: String,
    pub image_url: String,
    pub experience: u32,
    pub consultation_fee: f64,
    pub available_days: Vec<String>,
    pub timings: Timings,
    pub bio: String,
}

// ============================================================================
// API Response Wrappers
// ============================================================================

/// Envelope for the "get all doctors" operation.
///
/// On `success: false` the payload carries no doctors and `message` holds a
/// server-provided reason, used only for diagnostic logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDoctorsResponse {
    pub success: bool,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_deserializes_from_wire_format() {
        let payload = r#"{
            "_id": "6701f2",
            "name": "Asha Rao",
            "specialization": "Cardiology",
            "qualification": "MBBS, MD",
            "hospitalName": "City Care Hospital",
            "hospitalAddress": "12 MG Road",
            "city": "Pune",
            "imageUrl": "https://example.com/asha.png",
            "experience": 12,
            "consultationFee": 500,
            "availableDays": ["Monday", "Thursday"],
            "timings": { "start": "10:00 AM", "end": "2:00 PM" },
            "bio": "Senior cardiologist."
        }"#;

        let doctor: Doctor = serde_json::from_str(payload).unwrap();
        assert_eq!(doctor.id, "6701f2");
        assert_eq!(doctor.hospital_name, "City Care Hospital");
        assert_eq!(doctor.experience, 12);
        assert_eq!(doctor.consultation_fee, 500.0);
        assert_eq!(doctor.available_days, vec!["Monday", "Thursday"]);
        assert_eq!(doctor.timings.start, "10:00 AM");
    }

    #[test]
    fn test_doctor_rejects_missing_field() {
        // A record without timings fails to parse, so the whole load takes
        // the failure path instead of rendering a partial record.
        let payload = r#"{
            "_id": "6701f2",
            "name": "Asha Rao",
            "specialization": "Cardiology",
            "qualification": "MBBS",
            "hospitalName": "City Care Hospital",
            "hospitalAddress": "12 MG Road",
            "city": "Pune",
            "imageUrl": "https://example.com/asha.png",
            "experience": 12,
            "consultationFee": 500,
            "availableDays": [],
            "bio": "Senior cardiologist."
        }"#;

        assert!(serde_json::from_str::<Doctor>(payload).is_err());
    }

    #[test]
    fn test_response_success_with_doctors() {
        let payload = r#"{
            "success": true,
            "doctors": [{
                "_id": "1",
                "name": "Ben Lee",
                "specialization": "Dermatology",
                "qualification": "MBBS",
                "hospitalName": "Lakeside Clinic",
                "hospitalAddress": "4 Lake View",
                "city": "Mumbai",
                "imageUrl": "https://example.com/ben.png",
                "experience": 6,
                "consultationFee": 350.5,
                "availableDays": ["Friday"],
                "timings": { "start": "9:00 AM", "end": "1:00 PM" },
                "bio": "Dermatologist."
            }]
        }"#;

        let response: GetDoctorsResponse = serde_json::from_str(payload).unwrap();
        assert!(response.success);
        assert_eq!(response.doctors.len(), 1);
        assert_eq!(response.doctors[0].name, "Ben Lee");
        assert!(response.message.is_none());
    }

    #[test]
    fn test_response_failure_carries_message_only() {
        let payload = r#"{ "success": false, "message": "No doctors found" }"#;

        let response: GetDoctorsResponse = serde_json::from_str(payload).unwrap();
        assert!(!response.success);
        assert!(response.doctors.is_empty());
        assert_eq!(response.message.as_deref(), Some("No doctors found"));
    }
}
