//! Small in-memory documents shared by the view tests.

use kenya_elections_data::DocumentStore;
use kenya_elections_data_models::{
    CandidateResult, CountyDocument, CountyRecord, ElectionHistory, ElectionResult2017,
    ElectionResult2022, ElectionYearRecord, NationalPrediction2027, OrderedMap, Prediction2027,
    RegionalTrend, Scenario, SwingPotential,
};
use kenya_elections_geography::BoundaryCollection;
use kenya_elections_geography_models::to_geo_name;
use serde_json::json;

const COUNTIES: [&str; 47] = [
    "Mombasa",
    "Kwale",
    "Kilifi",
    "Tana River",
    "Lamu",
    "Taita Taveta",
    "Garissa",
    "Wajir",
    "Mandera",
    "Marsabit",
    "Isiolo",
    "Meru",
    "Tharaka Nithi",
    "Embu",
    "Kitui",
    "Machakos",
    "Makueni",
    "Nyandarua",
    "Nyeri",
    "Kirinyaga",
    "Murang'a",
    "Kiambu",
    "Turkana",
    "West Pokot",
    "Samburu",
    "Trans Nzoia",
    "Uasin Gishu",
    "Elgeyo Marakwet",
    "Nandi",
    "Baringo",
    "Laikipia",
    "Nakuru",
    "Narok",
    "Kajiado",
    "Kericho",
    "Bomet",
    "Kakamega",
    "Vihiga",
    "Bungoma",
    "Busia",
    "Siaya",
    "Kisumu",
    "Homa Bay",
    "Migori",
    "Kisii",
    "Nyamira",
    "Nairobi",
];

fn candidate(name: &str, party: &str, votes: u64, percentage: f64) -> CandidateResult {
    CandidateResult {
        name: name.to_string(),
        party: party.to_string(),
        votes,
        percentage,
    }
}

fn election(
    year: u32,
    registered_voters: u64,
    votes_cast: u64,
    turnout: f64,
    candidates: Vec<CandidateResult>,
) -> ElectionYearRecord {
    ElectionYearRecord {
        year,
        registered_voters,
        votes_cast,
        turnout,
        candidates,
        regional: None,
    }
}

fn provinces_2002() -> OrderedMap<OrderedMap<f64>> {
    let province = |kibaki: f64, kenyatta: f64, nyachae: Option<f64>| {
        let mut shares = OrderedMap::new();
        shares.insert("Kibaki", kibaki);
        shares.insert("Kenyatta", kenyatta);
        if let Some(nyachae) = nyachae {
            shares.insert("Nyachae", nyachae);
        }
        shares
    };

    let mut regional = OrderedMap::new();
    regional.insert("Central", province(69.2, 29.3, Some(1.1)));
    regional.insert("Coast", province(64.5, 28.4, Some(5.6)));
    regional.insert("Eastern", province(68.6, 28.6, Some(1.7)));
    regional.insert("Nairobi", province(63.0, 33.0, Some(3.4)));
    regional.insert("North Eastern", province(34.5, 65.0, None));
    regional.insert("Nyanza", province(60.7, 7.4, Some(31.3)));
    regional.insert("Rift Valley", province(43.0, 53.2, Some(1.8)));
    regional.insert("Western", province(66.8, 27.3, Some(4.9)));
    regional
}

pub fn history() -> ElectionHistory {
    let mut elections = OrderedMap::new();

    let mut e2002 = election(
        2002,
        10_451_150,
        5_976_080,
        57.18,
        vec![
            candidate("Mwai Kibaki", "NARC", 3_646_277, 62.2),
            candidate("Uhuru Kenyatta", "KANU", 1_836_055, 31.3),
            candidate("Simeon Nyachae", "FORD-People", 345_152, 5.9),
        ],
    );
    e2002.regional = Some(provinces_2002());
    elections.insert("2002", e2002);
    elections.insert(
        "2007",
        election(
            2007,
            14_296_180,
            9_877_779,
            69.23,
            vec![
                candidate("Mwai Kibaki", "PNU", 4_584_721, 46.42),
                candidate("Raila Odinga", "ODM", 4_352_993, 44.07),
                candidate("Kalonzo Musyoka", "ODM-Kenya", 879_903, 8.91),
            ],
        ),
    );
    elections.insert(
        "2013",
        election(
            2013,
            14_352_533,
            12_330_028,
            85.91,
            vec![
                candidate("Uhuru Kenyatta", "Jubilee", 6_173_433, 50.51),
                candidate("Raila Odinga", "CORD", 5_340_546, 43.70),
            ],
        ),
    );
    elections.insert(
        "2017",
        election(
            2017,
            19_611_423,
            15_593_050,
            79.51,
            vec![
                candidate("Uhuru Kenyatta", "Jubilee", 8_223_369, 54.27),
                candidate("Raila Odinga", "NASA", 6_822_812, 44.94),
            ],
        ),
    );
    elections.insert(
        "2022",
        election(
            2022,
            22_120_458,
            14_213_137,
            64.77,
            vec![
                candidate("William Ruto", "UDA", 7_176_141, 50.49),
                candidate("Raila Odinga", "Azimio", 6_942_930, 48.85),
            ],
        ),
    );

    ElectionHistory {
        elections,
        predictions_2027: NationalPrediction2027 {
            total_projected_voters: 27_820_000,
            new_voters: 5_703_233,
            youth_percentage: 48.0,
            scenarios: vec![
                Scenario {
                    name: "High Youth Engagement".to_string(),
                    turnout: 75.0,
                    description: "Youth turn out in large numbers".to_string(),
                },
                Scenario {
                    name: "Moderate Turnout".to_string(),
                    turnout: 68.0,
                    description: "Similar to recent elections".to_string(),
                },
                Scenario {
                    name: "Low Engagement".to_string(),
                    turnout: 60.0,
                    description: "Voter apathy continues".to_string(),
                },
            ],
            factors: vec![
                "Youth voter registration".to_string(),
                "Cost of living".to_string(),
                "Coalition realignments".to_string(),
            ],
        },
    }
}

#[allow(clippy::cast_precision_loss)]
fn county_record(idx: usize) -> CountyRecord {
    let n = idx as u64;
    let population = 300_000 + n * 50_000;
    CountyRecord {
        population,
        registered_voters_2022: population / 2,
        youth_percentage: 30.0 + (idx % 10) as f64,
        results_2017: ElectionResult2017 {
            kenyatta: 40.0 + (idx % 7) as f64,
            odinga: 55.0 - (idx % 7) as f64,
            turnout: 75.0,
        },
        results_2022: ElectionResult2022 {
            ruto: 45.0 + (idx % 9) as f64,
            odinga: 53.0 - (idx % 9) as f64,
            turnout: 62.0 + (idx % 5) as f64,
        },
        prediction_2027: Prediction2027 {
            projected_voters: population / 2 + 40_000,
            new_youth_voters: 20_000 + n * 1_000,
            likely_turnout: 60.0 + (idx % 12) as f64,
            swing_potential: SwingPotential::GROUP_ORDER[idx % 5],
            trend: "Stable".to_string(),
        },
    }
}

/// All 47 counties. Lamu has no results or projection; Nakuru has the
/// shift values the county analysis tests check.
pub fn counties() -> CountyDocument {
    let counties = COUNTIES
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let record = match *name {
                "Lamu" => CountyRecord {
                    population: 143_920,
                    registered_voters_2022: 81_453,
                    youth_percentage: 31.0,
                    ..CountyRecord::default()
                },
                "Nakuru" => CountyRecord {
                    results_2017: ElectionResult2017 {
                        kenyatta: 54.0,
                        odinga: 44.9,
                        turnout: 78.2,
                    },
                    results_2022: ElectionResult2022 {
                        ruto: 50.5,
                        odinga: 48.8,
                        turnout: 66.1,
                    },
                    ..county_record(idx)
                },
                _ => county_record(idx),
            };
            (*name, record)
        })
        .collect();

    let trend = |members: &[&str], trend: &str, key_factor: &str| RegionalTrend {
        counties: members.iter().map(|c| (*c).to_string()).collect(),
        trend: trend.to_string(),
        key_factor: key_factor.to_string(),
    };
    let mut regional_trends = OrderedMap::new();
    regional_trends.insert(
        "Mt_Kenya",
        trend(
            &["Nyeri", "Kiambu", "Murang'a"],
            "Realigning",
            "Economic performance",
        ),
    );
    regional_trends.insert(
        "Rift_Valley",
        trend(&["Nakuru", "Uasin Gishu"], "Competitive", "Youth turnout"),
    );
    regional_trends.insert(
        "Nyanza",
        trend(&["Kisumu", "Siaya", "Homa Bay"], "Stable", "Succession"),
    );

    CountyDocument {
        counties,
        regional_trends,
    }
}

/// Boundaries for every county except Lamu, plus an unmatched lake polygon.
pub fn boundaries() -> BoundaryCollection {
    let square = |x: f64, y: f64| {
        json!({
            "type": "Polygon",
            "coordinates": [[[x, y], [x + 0.5, y], [x + 0.5, y + 0.5], [x, y + 0.5], [x, y]]]
        })
    };
    let mut features: Vec<serde_json::Value> = COUNTIES
        .iter()
        .filter(|name| **name != "Lamu")
        .enumerate()
        .map(|(idx, name)| {
            let offset = f64::from(u32::try_from(idx).unwrap_or_default()) * 0.1;
            json!({
                "type": "Feature",
                "properties": { "COUNTY": to_geo_name(name) },
                "geometry": square(34.0 + offset, -4.0 + offset)
            })
        })
        .collect();
    features.push(json!({
        "type": "Feature",
        "properties": { "COUNTY": "Lake Victoria" },
        "geometry": square(33.0, -1.0)
    }));

    let collection = json!({ "type": "FeatureCollection", "features": features });
    BoundaryCollection::from_geojson_str(&collection.to_string()).unwrap()
}

pub fn store() -> DocumentStore {
    DocumentStore::from_documents(history(), counties(), Some(boundaries()))
}

pub fn store_without_boundaries() -> DocumentStore {
    DocumentStore::from_documents(history(), counties(), None)
}
