// crates/nearcity-core/src/model/convert.rs
use crate::citystate::to_citystate;
use crate::error::{NearCityError, Result};
use crate::geo::Coordinates;
use crate::model::{LargeCityRaw, LargeCityRecord};

/// **Standard Converter:** Raw -> Record.
///
/// Trims names, derives missing citystate codes and validates coordinates.
/// Any bad entry fails the whole conversion: a partially loaded dataset is
/// never handed out.
pub fn from_raw(raw: Vec<LargeCityRaw>) -> Result<Vec<LargeCityRecord>> {
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| record_from_raw(i, r))
        .collect()
}

fn record_from_raw(i: usize, raw: LargeCityRaw) -> Result<LargeCityRecord> {
    let display_name = raw.display_name.trim().to_string();
    if display_name.is_empty() {
        return Err(NearCityError::DatasetLoad(format!(
            "record {i}: display_name is empty"
        )));
    }

    let citystate_code = match raw.citystate_code.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => code.to_ascii_lowercase(),
        _ => to_citystate(&display_name),
    };

    let [lat, lng] = raw.coordinates;
    let coordinates = Coordinates::new(lat, lng)
        .map_err(|e| NearCityError::DatasetLoad(format!("record {i} ({display_name}): {e}")))?;

    Ok(LargeCityRecord {
        display_name,
        citystate_code,
        population: raw.population,
        coordinates,
    })
}

/// Inverse of [`from_raw`], used when exporting a dataset.
pub fn to_raw(records: &[LargeCityRecord]) -> Vec<LargeCityRaw> {
    records
        .iter()
        .map(|r| LargeCityRaw {
            display_name: r.display_name.clone(),
            citystate_code: Some(r.citystate_code.clone()),
            population: r.population,
            coordinates: r.coordinates.into(),
        })
        .collect()
}
