use std::fmt;

// ---------------------------------------------------------------------------
// Region – fixed geographic grouping
// ---------------------------------------------------------------------------

/// Geographic region as used by the 2022 index. The set is closed: every
/// record in the embedded table carries one of these five values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    AsiaPacific,
    Europe,
    Americas,
    MiddleEastNorthAfrica,
    SubSaharanAfrica,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::AsiaPacific,
        Region::Europe,
        Region::Americas,
        Region::MiddleEastNorthAfrica,
        Region::SubSaharanAfrica,
    ];

    /// Display label, matching the source data spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Region::AsiaPacific => "Asia Pacific",
            Region::Europe => "Europe",
            Region::Americas => "Americas",
            Region::MiddleEastNorthAfrica => "Middle East/North Africa",
            Region::SubSaharanAfrica => "Sub-Saharan Africa",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Indicator – the numeric fields charts and statistics operate on
// ---------------------------------------------------------------------------

/// One of the eight numeric fields of a [`Country`]. Used as the axes of the
/// correlation matrix and as the sort key of ranked chart views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Score,
    GdpPpp,
    Population,
    Unemployment,
    Inflation,
    FinancialFreedom,
    MonetaryFreedom,
    GdpGrowth5yr,
}

impl Indicator {
    pub const ALL: [Indicator; 8] = [
        Indicator::Score,
        Indicator::GdpPpp,
        Indicator::Population,
        Indicator::Unemployment,
        Indicator::Inflation,
        Indicator::FinancialFreedom,
        Indicator::MonetaryFreedom,
        Indicator::GdpGrowth5yr,
    ];

    /// Short machine-style name (correlation heatmap axes, internal keys).
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Score => "score",
            Indicator::GdpPpp => "gdp_ppp",
            Indicator::Population => "population",
            Indicator::Unemployment => "unemployment",
            Indicator::Inflation => "inflation",
            Indicator::FinancialFreedom => "financial_freedom",
            Indicator::MonetaryFreedom => "monetary_freedom",
            Indicator::GdpGrowth5yr => "gdp_growth_5yr",
        }
    }

    /// Human-readable axis label.
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Score => "Freedom Score",
            Indicator::GdpPpp => "GDP per Capita PPP (USD)",
            Indicator::Population => "Population (Millions)",
            Indicator::Unemployment => "Unemployment (%)",
            Indicator::Inflation => "Inflation (%)",
            Indicator::FinancialFreedom => "Financial Freedom",
            Indicator::MonetaryFreedom => "Monetary Freedom Score",
            Indicator::GdpGrowth5yr => "5-Year GDP Growth Rate (%)",
        }
    }

    /// Read this indicator's value out of a record.
    pub fn value(&self, c: &Country) -> f64 {
        match self {
            Indicator::Score => c.score,
            Indicator::GdpPpp => c.gdp_ppp,
            Indicator::Population => c.population,
            Indicator::Unemployment => c.unemployment,
            Indicator::Inflation => c.inflation,
            Indicator::FinancialFreedom => c.financial_freedom,
            Indicator::MonetaryFreedom => c.monetary_freedom,
            Indicator::GdpGrowth5yr => c.gdp_growth_5yr,
        }
    }
}

// ---------------------------------------------------------------------------
// Country – one row of the index
// ---------------------------------------------------------------------------

/// A single country record. All fields are taken as given by the source
/// table; score and the percentage-like fields are not range-validated.
#[derive(Debug, Clone)]
pub struct Country {
    /// Unique country name.
    pub name: &'static str,
    pub region: Region,
    /// Global ordinal position, 1 = most free. Ties and gaps exist.
    pub rank: u32,
    /// Composite freedom index, 0–100.
    pub score: f64,
    pub gdp_ppp: f64,
    /// Population in millions.
    pub population: f64,
    pub unemployment: f64,
    pub inflation: f64,
    pub financial_freedom: f64,
    pub monetary_freedom: f64,
    pub gdp_growth_5yr: f64,
    /// ISO 3166-1 alpha-3 code. Records without one are skipped by map
    /// views only; they still appear in bars, scatters, and the table.
    pub iso_code: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// CountryDataset – the complete embedded dataset
// ---------------------------------------------------------------------------

/// The full record set, built once at startup and never mutated. Filtering
/// produces index vectors into it; the source rows are never altered.
#[derive(Debug, Clone)]
pub struct CountryDataset {
    countries: Vec<Country>,
}

impl CountryDataset {
    pub fn new(countries: Vec<Country>) -> Self {
        CountryDataset { countries }
    }

    /// All records in source-table (insertion) order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn get(&self, idx: usize) -> &Country {
        &self.countries[idx]
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
