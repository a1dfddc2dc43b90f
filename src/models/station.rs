use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Station {
    pub id: u32,

    /// Station code, referenced by `Measurement::station`
    pub station: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: i32,
}

impl Station {
    pub fn new(
        id: u32,
        station: String,
        name: String,
        latitude: f64,
        longitude: f64,
        elevation: i32,
    ) -> Self {
        Self {
            id,
            station,
            name,
            latitude,
            longitude,
            elevation,
        }
    }
}
