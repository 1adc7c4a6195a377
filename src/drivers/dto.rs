use serde::{Deserialize, Serialize};

use super::repo::Driver;

/// Request body for driver registration. Absent fields deserialize to empty
/// strings so the presence check covers missing and empty alike.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_type: String,
    pub plate_number: String,
    pub address: String,
}

impl RegisterRequest {
    pub fn has_required_fields(&self) -> bool {
        !(self.full_name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.vehicle_type.is_empty()
            || self.plate_number.is_empty()
            || self.address.is_empty())
    }
}

/// Request body for driver login.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// Driver as exposed by the public listing, password hash projected out.
#[derive(Debug, Serialize)]
pub struct PublicDriver {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_type: String,
    pub plate_number: String,
    pub address: String,
    pub status: String,
}

impl From<Driver> for PublicDriver {
    fn from(d: Driver) -> Self {
        Self {
            id: d.id,
            full_name: d.full_name,
            email: d.email,
            phone: d.phone,
            vehicle_type: d.vehicle_type,
            plate_number: d.plate_number,
            address: d.address,
            status: d.status,
        }
    }
}

/// Response returned after a successful driver login: the full stored row.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub driver: Driver,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_driver() -> Driver {
        Driver {
            id: 1,
            full_name: "Budi Santoso".into(),
            email: "budi@example.com".into(),
            phone: "081234567890".into(),
            password_hash: "$argon2id$v=19$...".into(),
            vehicle_type: "motor".into(),
            plate_number: "B 1234 XYZ".into(),
            address: "Jl. Merdeka 1".into(),
            status: "aktif".into(),
        }
    }

    #[test]
    fn public_driver_has_no_password_hash() {
        let json = serde_json::to_value(PublicDriver::from(sample_driver())).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["phone"], "081234567890");
        assert_eq!(json["status"], "aktif");
    }

    #[test]
    fn stored_driver_serializes_password_hash() {
        let json = serde_json::to_value(sample_driver()).unwrap();
        assert!(json.get("password_hash").is_some());
    }

    #[test]
    fn register_request_requires_every_field() {
        let full: RegisterRequest = serde_json::from_value(serde_json::json!({
            "full_name": "Budi Santoso",
            "email": "budi@example.com",
            "phone": "081234567890",
            "vehicle_type": "motor",
            "plate_number": "B 1234 XYZ",
            "address": "Jl. Merdeka 1",
        }))
        .unwrap();
        assert!(full.has_required_fields());

        let missing: RegisterRequest = serde_json::from_value(serde_json::json!({
            "full_name": "Budi Santoso",
            "phone": "081234567890",
        }))
        .unwrap();
        assert!(!missing.has_required_fields());

        let empty: RegisterRequest = serde_json::from_value(serde_json::json!({
            "full_name": "",
            "email": "budi@example.com",
            "phone": "081234567890",
            "vehicle_type": "motor",
            "plate_number": "B 1234 XYZ",
            "address": "Jl. Merdeka 1",
        }))
        .unwrap();
        assert!(!empty.has_required_fields());
    }
}
