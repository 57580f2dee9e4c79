//! Shared reference geography: eleven Indian metro areas.
//!
//! Both the demo binary and the integration tests build from this table.

use crate::{Geography, GeographyBuilder, SpatialResult};

/// `(key, name, lat, lng, icon)` for every preset city.
const INDIA_METROS: [(&str, &str, f64, f64, Option<&str>); 11] = [
    ("mumbai",    "Mumbai",    19.0760, 72.8777, Some("images/city.jpeg")),
    ("delhi",     "Delhi",     28.6139, 77.2090, Some("images/delhi.jpeg")),
    ("bengaluru", "Bengaluru", 12.9716, 77.5946, Some("images/bengaluru.jpeg")),
    ("hyderabad", "Hyderabad", 17.3850, 78.4867, Some("images/hyd.jpeg")),
    ("chennai",   "Chennai",   13.0827, 80.2707, None),
    ("ahmedabad", "Ahmedabad", 23.0225, 72.5714, None),
    ("kolkata",   "Kolkata",   22.5726, 88.3639, None),
    ("surat",     "Surat",     21.1702, 72.8311, None),
    ("pune",      "Pune",      18.5204, 73.8567, None),
    ("jaipur",    "Jaipur",    26.9124, 75.7873, None),
    ("lucknow",   "Lucknow",   26.8467, 80.9462, None),
];

/// Build the eleven-city geography, ids assigned in the order listed above.
pub fn india_metros() -> SpatialResult<Geography> {
    let mut b = GeographyBuilder::new();
    for (key, name, lat, lng, icon) in INDIA_METROS {
        b.add_location(key, name, lat, lng, icon)?;
    }
    Ok(b.build())
}
