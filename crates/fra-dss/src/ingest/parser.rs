use std::io::Read;

use csv::StringRecord;
use serde::Deserialize;

use super::normalizer::{clean_text, header_key};
use crate::dss::Village;

const VILLAGE_COLUMNS: [&str; 9] = [
    "id",
    "name",
    "groundwaterIndex",
    "agriAreaHa",
    "forestDegradationLevel",
    "povertyScore",
    "waterBodiesCount",
    "population",
    "homesteadCount",
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VillageRow {
    id: String,
    name: String,
    groundwater_index: f64,
    agri_area_ha: f64,
    forest_degradation_level: f64,
    poverty_score: f64,
    water_bodies_count: u32,
    #[serde(default)]
    population: u32,
    homestead_count: u32,
}

impl From<VillageRow> for Village {
    fn from(row: VillageRow) -> Self {
        Village {
            id: clean_text(&row.id),
            name: clean_text(&row.name),
            groundwater_index: row.groundwater_index,
            agri_area_ha: row.agri_area_ha,
            forest_degradation_level: row.forest_degradation_level,
            poverty_score: row.poverty_score,
            water_bodies_count: row.water_bodies_count,
            population: row.population,
            homestead_count: row.homestead_count,
        }
    }
}

/// Map whatever spelling the export used onto the canonical column names.
fn canonical_headers(raw: &StringRecord) -> StringRecord {
    raw.iter()
        .map(|header| {
            let key = header_key(header);
            VILLAGE_COLUMNS
                .iter()
                .find(|column| column.to_ascii_lowercase() == key)
                .map(|column| column.to_string())
                .unwrap_or_else(|| clean_text(header))
        })
        .collect()
}

pub(crate) fn parse_villages<R: Read>(reader: R) -> Result<Vec<Village>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = canonical_headers(csv_reader.headers()?);
    csv_reader.set_headers(headers);

    let mut villages = Vec::new();
    for row in csv_reader.deserialize::<VillageRow>() {
        villages.push(Village::from(row?));
    }

    Ok(villages)
}
