use weather_core::{Country, WeatherSummary};

/// Text rendering of a summary, laid out like the widget card.
pub fn summary(summary: &WeatherSummary, country: Country) -> String {
    format!(
        "[{icon}] theme: {theme}\n\
         {temp}°C\n\
         {location}, {country}\n\
         {joke}\n\
         Humidity:   {humidity}%\n\
         Wind speed: {wind} km/h\n",
        icon = summary.icon_key,
        theme = country.theme(),
        temp = summary.temperature_celsius,
        location = summary.location_name,
        joke = summary.joke_text,
        humidity = summary.humidity_percent,
        wind = summary.wind_speed_kph,
    )
}
