use serde::{Deserialize, Serialize};

/// Quantity of one lesson product as exported by the booking system.
///
/// `quantity` stays a raw string; parsing belongs to the reconciliation
/// transform so a bad cell only rejects its own row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonQuantity {
    pub product: String,
    pub quantity: String,
}

impl LessonQuantity {
    pub fn new(product: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            quantity: quantity.into(),
        }
    }
}

/// One row of the external booking feed.
///
/// All values are kept exactly as exported. `booker_id` groups travel
/// companions and becomes the ledger's booking number. Rows live only for
/// the duration of one import pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBooking {
    pub booking_id: String,
    pub booker_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
    pub gender: String,
    /// Free-text age band ("Teens 13-18", ...).
    pub group: String,
    /// Free-text skill level ("BEGINNER PLUS", ...).
    pub level: String,
    pub arrival: String,
    pub departure: String,
    pub booking_status: String,
    pub lesson_products: Vec<LessonQuantity>,
    pub lesson_package: String,
}
