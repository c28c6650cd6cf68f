use crate::config::DefaultLocation;
use crate::search::criteria::SearchCriteria;

/// Where to search. Exactly one per query.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSpec {
    Address(String),
    CityState {
        city: String,
        state: String,
        zip_code: Option<String>,
    },
    Zip(String),
    Coordinates {
        latitude: f64,
        longitude: f64,
        radius: u32,
    },
    /// Nothing usable was given; searching around the configured default.
    Default(DefaultLocation),
}

impl LocationSpec {
    pub fn is_fallback(&self) -> bool {
        matches!(self, LocationSpec::Default(_))
    }

    /// Label of the default location when this is a fallback search.
    pub fn fallback_label(&self) -> Option<&str> {
        match self {
            LocationSpec::Default(loc) => Some(&loc.label),
            _ => None,
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            LocationSpec::Address(_) => "address",
            LocationSpec::CityState { .. } => "city_state",
            LocationSpec::Zip(_) => "zip",
            LocationSpec::Coordinates { .. } => "coordinates",
            LocationSpec::Default(_) => "default",
        }
    }

    /// Query parameters for this location, in endpoint naming.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            LocationSpec::Address(address) => vec![("address", address.clone())],
            LocationSpec::CityState {
                city,
                state,
                zip_code,
            } => {
                let mut params = vec![("city", city.clone()), ("state", state.clone())];
                if let Some(zip) = zip_code {
                    params.push(("zipCode", zip.clone()));
                }
                params
            }
            LocationSpec::Zip(zip) => vec![("zipCode", zip.clone())],
            LocationSpec::Coordinates {
                latitude,
                longitude,
                radius,
            } => coordinate_params(*latitude, *longitude, *radius),
            LocationSpec::Default(loc) => {
                coordinate_params(loc.latitude, loc.longitude, loc.radius)
            }
        }
    }
}

fn coordinate_params(latitude: f64, longitude: f64, radius: u32) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", latitude.to_string()),
        ("longitude", longitude.to_string()),
        ("radius", radius.to_string()),
    ]
}

/// Picks the location for a query. First match wins:
///
/// 1. address
/// 2. city + state (zip attached when given)
/// 3. zip alone
/// 4. latitude + longitude + radius, all three
/// 5. the configured default
pub fn select_location(criteria: &SearchCriteria, default: &DefaultLocation) -> LocationSpec {
    if let Some(address) = &criteria.address {
        return LocationSpec::Address(address.clone());
    }

    if let (Some(city), Some(state)) = (&criteria.city, &criteria.state) {
        return LocationSpec::CityState {
            city: city.clone(),
            state: state.clone(),
            zip_code: criteria.zip_code.clone(),
        };
    }

    if let Some(zip) = &criteria.zip_code {
        return LocationSpec::Zip(zip.clone());
    }

    if let (Some(latitude), Some(longitude), Some(radius)) =
        (criteria.latitude, criteria.longitude, criteria.radius)
    {
        return LocationSpec::Coordinates {
            latitude,
            longitude,
            radius,
        };
    }

    LocationSpec::Default(default.clone())
}
