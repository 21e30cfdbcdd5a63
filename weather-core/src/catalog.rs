//! Countries and cities offered by the widget's pickers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Country {
    #[default]
    Sweden,
    Rwanda,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Sweden => "Sweden",
            Country::Rwanda => "Rwanda",
        }
    }

    pub const fn all() -> &'static [Country] {
        &[Country::Sweden, Country::Rwanda]
    }

    pub fn cities(&self) -> &'static [&'static str] {
        match self {
            Country::Sweden => &["Stockholm", "Gothenburg", "Malmo", "Uppsala", "Vasteras"],
            Country::Rwanda => &["Kigali", "Huye", "Nyamagabe", "Kayonza", "Rubavu"],
        }
    }

    /// City shown when the country is first selected.
    pub fn default_city(&self) -> &'static str {
        self.cities()[0]
    }

    /// Theme name, the lowercased country name.
    pub fn theme(&self) -> &'static str {
        match self {
            Country::Sweden => "sweden",
            Country::Rwanda => "rwanda",
        }
    }

    pub fn has_city(&self, city: &str) -> bool {
        let city = city.trim();
        self.cities().iter().any(|c| c.eq_ignore_ascii_case(city))
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Country {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        if let Some(country) = Country::all().iter().find(|c| c.theme() == lower) {
            return Ok(*country);
        }

        let supported: Vec<_> = Country::all().iter().map(Country::as_str).collect();
        Err(anyhow::anyhow!(
            "Unknown country '{value}'. Supported countries: {}.",
            supported.join(", ")
        ))
    }
}

impl std::str::FromStr for Country {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::try_from(s)
    }
}
