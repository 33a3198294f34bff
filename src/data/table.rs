use super::model::{Country, CountryDataset, Region};
use Region::*;

// ---------------------------------------------------------------------------
// Embedded source table – 2022 Index of Economic Freedom, 40 countries
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn row(
    name: &'static str,
    region: Region,
    rank: u32,
    score: f64,
    gdp_ppp: f64,
    population: f64,
    unemployment: f64,
    inflation: f64,
    financial_freedom: f64,
    monetary_freedom: f64,
    gdp_growth_5yr: f64,
) -> Country {
    Country {
        name,
        region,
        rank,
        score,
        gdp_ppp,
        population,
        unemployment,
        inflation,
        financial_freedom,
        monetary_freedom,
        gdp_growth_5yr,
        iso_code: iso_code(name),
    }
}

/// ISO 3166-1 alpha-3 code for a country name. Fixed lookup; a name not in
/// the table yields `None` and the record is simply absent from map views.
pub fn iso_code(name: &str) -> Option<&'static str> {
    Some(match name {
        "Singapore" => "SGP",
        "Switzerland" => "CHE",
        "Ireland" => "IRL",
        "New Zealand" => "NZL",
        "Luxembourg" => "LUX",
        "Taiwan" => "TWN",
        "Estonia" => "EST",
        "Netherlands" => "NLD",
        "Finland" => "FIN",
        "Denmark" => "DNK",
        "Australia" => "AUS",
        "Sweden" => "SWE",
        "Canada" => "CAN",
        "Germany" => "DEU",
        "South Korea" => "KOR",
        "Chile" => "CHL",
        "Japan" => "JPN",
        "United Kingdom" => "GBR",
        "United States" => "USA",
        "Poland" => "POL",
        "Mexico" => "MEX",
        "Indonesia" => "IDN",
        "Turkey" => "TUR",
        "Vietnam" => "VNM",
        "South Africa" => "ZAF",
        "Russia" => "RUS",
        "Nigeria" => "NGA",
        "India" => "IND",
        "Brazil" => "BRA",
        "Egypt" => "EGY",
        "Ukraine" => "UKR",
        "China" => "CHN",
        "Angola" => "AGO",
        "Libya" => "LBY",
        "Sudan" => "SDN",
        "Iran" => "IRN",
        "Zimbabwe" => "ZWE",
        "Cuba" => "CUB",
        "Venezuela" => "VEN",
        "North Korea" => "PRK",
        _ => return None,
    })
}

impl CountryDataset {
    /// Build the embedded dataset. Called once at startup; the returned
    /// container is read-only for the lifetime of the process.
    #[rustfmt::skip]
    pub fn embedded() -> Self {
        CountryDataset::new(vec![
            row("Singapore",      AsiaPacific,           1,   84.4, 97057.0,  5.9,    2.7,  2.3,    80.0, 83.2, 3.8),
            row("Switzerland",    Europe,                2,   84.2, 74102.0,  8.7,    2.9,  0.6,    80.0, 85.4, 2.1),
            row("Ireland",        Europe,                3,   82.0, 99013.0,  5.1,    4.8,  2.4,    70.0, 80.1, 6.9),
            row("New Zealand",    AsiaPacific,           4,   80.6, 41824.0,  5.1,    3.3,  3.9,    80.0, 79.3, 2.8),
            row("Luxembourg",     Europe,                5,   80.6, 131384.0, 0.7,    5.1,  3.5,    80.0, 82.1, 3.2),
            row("Taiwan",         AsiaPacific,           6,   80.1, 55078.0,  23.6,   3.8,  1.9,    70.0, 83.7, 4.2),
            row("Estonia",        Europe,                7,   80.0, 38985.0,  1.3,    6.2,  4.2,    80.0, 78.9, 3.7),
            row("Netherlands",    Europe,                8,   79.5, 57372.0,  17.7,   3.2,  2.7,    80.0, 80.4, 2.4),
            row("Finland",        Europe,                9,   79.0, 49334.0,  5.5,    7.7,  2.2,    70.0, 82.1, 1.8),
            row("Denmark",        Europe,                10,  78.8, 60494.0,  5.9,    5.0,  1.9,    80.0, 83.0, 2.0),
            row("Australia",      AsiaPacific,           12,  78.0, 53799.0,  26.0,   4.6,  3.8,    80.0, 79.8, 2.7),
            row("Sweden",         Europe,                15,  76.0, 54628.0,  10.4,   8.8,  2.2,    70.0, 83.4, 2.1),
            row("Canada",         Americas,              14,  76.6, 51343.0,  38.3,   7.5,  3.4,    80.0, 77.9, 2.1),
            row("Germany",        Europe,                17,  73.7, 52559.0,  83.2,   3.6,  3.2,    70.0, 79.2, 1.5),
            row("South Korea",    AsiaPacific,           19,  73.8, 44501.0,  51.7,   3.7,  2.5,    70.0, 76.5, 2.7),
            row("Chile",          Americas,              20,  73.5, 22768.0,  19.2,   8.3,  4.5,    70.0, 72.1, 3.1),
            row("Japan",          AsiaPacific,           23,  72.4, 40146.0,  125.7,  2.9,  0.2,    60.0, 79.5, 0.8),
            row("United Kingdom", Europe,                24,  72.7, 46510.0,  68.0,   4.5,  2.6,    80.0, 78.1, 1.5),
            row("United States",  Americas,              25,  72.1, 63358.0,  331.0,  5.4,  4.7,    70.0, 73.4, 2.3),
            row("Poland",         Europe,                42,  68.7, 33822.0,  38.0,   3.4,  5.1,    60.0, 73.8, 3.8),
            row("Mexico",         Americas,              68,  65.9, 19860.0,  130.3,  3.8,  5.7,    60.0, 69.4, 1.8),
            row("Indonesia",      AsiaPacific,           67,  66.0, 11812.0,  277.5,  6.5,  1.6,    40.0, 71.9, 4.7),
            row("Turkey",         MiddleEastNorthAfrica, 76,  64.1, 30253.0,  85.3,   12.0, 19.6,   60.0, 56.9, 4.1),
            row("Vietnam",        AsiaPacific,           90,  61.7, 8660.0,   98.2,   2.4,  3.6,    30.0, 63.8, 6.5),
            row("South Africa",   SubSaharanAfrica,      100, 59.3, 12489.0,  60.0,   34.4, 4.6,    50.0, 68.2, 0.6),
            row("Russia",         Europe,                113, 56.1, 27900.0,  144.0,  4.7,  6.7,    40.0, 64.0, 1.2),
            row("Nigeria",        SubSaharanAfrica,      123, 55.3, 4908.0,   218.0,  33.0, 16.5,   30.0, 55.4, 1.6),
            row("India",          AsiaPacific,           131, 53.9, 6590.0,   1393.0, 7.9,  5.1,    40.0, 65.2, 5.8),
            row("Brazil",         Americas,              133, 53.4, 14998.0,  215.0,  12.8, 8.3,    50.0, 65.3, 0.9),
            row("Egypt",          MiddleEastNorthAfrica, 130, 54.0, 12255.0,  104.3,  7.4,  5.2,    30.0, 60.3, 4.5),
            row("Ukraine",        Europe,                130, 54.0, 12907.0,  44.0,   9.9,  11.0,   30.0, 58.2, 1.2),
            row("China",          AsiaPacific,           158, 48.3, 17192.0,  1412.0, 5.1,  0.9,    10.0, 60.1, 6.4),
            row("Angola",         SubSaharanAfrica,      157, 48.5, 7258.0,   34.5,   10.0, 22.3,   20.0, 48.1, -0.2),
            row("Libya",          MiddleEastNorthAfrica, 160, 46.4, 10454.0,  7.1,    19.3, 22.7,   20.0, 50.2, 6.1),
            row("Sudan",          SubSaharanAfrica,      168, 38.4, 3988.0,   45.7,   17.1, 163.3,  10.0, 22.3, -2.3),
            row("Iran",           MiddleEastNorthAfrica, 168, 42.0, 13271.0,  86.8,   9.4,  36.5,   10.0, 38.2, 1.1),
            row("Zimbabwe",       SubSaharanAfrica,      174, 36.1, 2628.0,   15.1,   5.3,  97.9,   20.0, 35.1, 1.8),
            row("Cuba",           Americas,              173, 26.9, 8822.0,   11.3,   1.1,  70.0,   10.0, 30.1, -2.1),
            row("Venezuela",      Americas,              175, 24.7, 1548.0,   28.7,   7.3,  2665.0, 10.0, 14.2, -12.5),
            row("North Korea",    AsiaPacific,           176, 2.9,  1700.0,   25.9,   0.0,  0.0,    0.0,  4.2,  -3.5),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn table_has_forty_unique_countries() {
        let ds = CountryDataset::embedded();
        assert_eq!(ds.len(), 40);

        let names: BTreeSet<&str> = ds.countries().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 40, "country names must be unique");
    }

    #[test]
    fn every_record_has_an_iso_code() {
        let ds = CountryDataset::embedded();
        for c in ds.countries() {
            assert!(c.iso_code.is_some(), "{} is missing an ISO code", c.name);
            assert_eq!(c.iso_code.unwrap().len(), 3);
        }
    }

    #[test]
    fn unknown_name_has_no_iso_code() {
        assert_eq!(iso_code("Atlantis"), None);
    }

    #[test]
    fn ranks_contain_known_ties_and_gaps() {
        let ds = CountryDataset::embedded();
        let rank_of = |name: &str| {
            ds.countries()
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.rank)
                .unwrap()
        };
        // Egypt and Ukraine share rank 130; rank 11 is absent entirely.
        assert_eq!(rank_of("Egypt"), 130);
        assert_eq!(rank_of("Ukraine"), 130);
        assert!(!ds.countries().iter().any(|c| c.rank == 11));
    }
}
