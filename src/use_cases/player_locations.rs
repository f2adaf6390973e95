use std::sync::Arc;

use crate::domain::entities::PlayerLocation;
use crate::domain::errors::LocationError;
use crate::domain::ports::RecordStore;

// Query: every reported player location, concatenated across the store's
// pages.
pub struct ListPlayerLocationsUseCase {
    pub store: Arc<dyn RecordStore>,
}

impl ListPlayerLocationsUseCase {
    pub async fn execute(&self, token: &str) -> Result<Vec<PlayerLocation>, LocationError> {
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            let response = self.store.list_player_locations(page, token).await?;
            all.extend(response.items);

            if page >= response.total_pages {
                break;
            }
            page += 1;
        }

        Ok(all)
    }
}

// Command: record one player-reported coordinate pair. Coordinates arrive
// as decimal strings and are validated before the store is touched.
pub struct InsertPlayerLocationUseCase {
    pub store: Arc<dyn RecordStore>,
}

impl InsertPlayerLocationUseCase {
    pub async fn execute(&self, latitude: &str, longitude: &str) -> Result<(), LocationError> {
        let latitude = parse_coordinate("latitude", latitude, 90.0)?;
        let longitude = parse_coordinate("longitude", longitude, 180.0)?;

        self.store
            .insert_player_location(latitude, longitude)
            .await?;
        Ok(())
    }
}

fn parse_coordinate(field: &'static str, value: &str, bound: f64) -> Result<f64, LocationError> {
    let parsed: f64 = value.parse().map_err(|_| LocationError::InvalidCoordinate {
        field,
        value: value.to_string(),
    })?;

    if !parsed.is_finite() || parsed.abs() > bound {
        return Err(LocationError::InvalidCoordinate {
            field,
            value: value.to_string(),
        });
    }

    Ok(parsed)
}
