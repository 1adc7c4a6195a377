use serde::Deserialize;

/// Request body for trip creation. The wire format is camelCase; only the
/// customer, pickup and destination are required, everything else is stored
/// as sent (including null).
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub customer_name: String,
    pub pickup: String,
    pub destination: String,
    pub service: Option<String>,
    pub distance: Option<f64>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub payment_method: Option<String>,
}

impl CreateTripRequest {
    pub fn has_required_fields(&self) -> bool {
        !(self.customer_name.is_empty() || self.pickup.is_empty() || self.destination.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let req: CreateTripRequest = serde_json::from_value(serde_json::json!({
            "customerName": "Siti",
            "pickup": "Stasiun Kota",
            "destination": "Bandara",
            "paymentMethod": "cash",
            "distance": 12.5,
        }))
        .unwrap();
        assert!(req.has_required_fields());
        assert_eq!(req.payment_method.as_deref(), Some("cash"));
        assert_eq!(req.distance, Some(12.5));
        assert!(req.service.is_none());
        assert!(req.price.is_none());
    }

    #[test]
    fn missing_core_fields_fail_the_presence_check() {
        let req: CreateTripRequest = serde_json::from_value(serde_json::json!({
            "customerName": "Siti",
            "pickup": "Stasiun Kota",
        }))
        .unwrap();
        assert!(!req.has_required_fields());

        let req: CreateTripRequest = serde_json::from_value(serde_json::json!({
            "customerName": "Siti",
            "pickup": "",
            "destination": "Bandara",
        }))
        .unwrap();
        assert!(!req.has_required_fields());
    }
}
