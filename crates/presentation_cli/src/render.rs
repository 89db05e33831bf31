//! Plain-text rendering of advisory results

use application::ConfigSnapshot;
use domain::{ActionVerdict, Location, Recommendation};

/// Message shown when the weather service could not be reached or parsed
pub const DATA_UNAVAILABLE_MESSAGE: &str = "weather data unavailable, try again later";

/// Render a recommendation for the terminal
pub fn render_advice(rec: &Recommendation, location: &Location) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", rec.verdict.emoji(), rec.verdict.title()));
    out.push_str(&location_line(location));
    out.push('\n');

    out.push_str(&current_section(rec));
    out.push('\n');
    out.push_str(&forecast_section(rec));
    out.push('\n');
    out.push_str(&recommendation_section(rec));

    if rec.insufficient_data {
        out.push_str(
            "\nℹ️  Fewer than 24 hourly samples were available; \
             forecast totals and direction may be incomplete\n",
        );
    }

    out.push_str(&format!(
        "\nThreshold: {}\" | Max Wind: {} mph\n",
        rec.thresholds.accumulation_threshold(),
        rec.thresholds.max_wind_speed()
    ));
    out
}

/// Render the active configuration
pub fn render_config(snapshot: &ConfigSnapshot) -> String {
    let mut out = String::from("⚙️  Snowblower Configuration\n\n");
    out.push_str(&format!(
        "Location:               {}\n",
        snapshot.location.display_name()
    ));
    out.push_str(&format!(
        "Coordinates:            {}\n",
        snapshot.location.coordinates()
    ));
    out.push_str(&format!(
        "Accumulation Threshold: {} inches\n",
        snapshot.thresholds.accumulation_threshold()
    ));
    out.push_str(&format!(
        "Max Wind Speed:         {} mph\n",
        snapshot.thresholds.max_wind_speed()
    ));
    out
}

fn location_line(location: &Location) -> String {
    match location.name() {
        Some(name) => format!("📍 {name} ({})\n", location.coordinates()),
        None => format!("📍 {}\n", location.coordinates()),
    }
}

fn current_section(rec: &Recommendation) -> String {
    let current = &rec.current;
    let temperature = current
        .temperature_f
        .map_or_else(|| "N/A".to_string(), |t| format!("{t:.1}°F"));

    let mut out = String::from("📊 Current Conditions\n");
    out.push_str(&format!("  🌡️  {temperature}\n"));
    out.push_str(&format!(
        "  💨 {:.1} mph from {} ({:.0}°)\n",
        current.wind_speed_mph, current.wind_from, current.wind_direction_deg
    ));
    out.push_str(&format!("  📊 {}\n", current.wind_condition));
    out.push_str(&format!(
        "  ❄️  {:.2}\" accumulated (24hr)\n",
        rec.past_accumulation.inches
    ));
    out
}

fn forecast_section(rec: &Recommendation) -> String {
    let forecast = &rec.forecast;
    let threshold = rec.thresholds.accumulation_threshold();

    let mut out = String::from("🔮 24-Hour Forecast\n");
    out.push_str(&format!(
        "  ❄️  {:.2}\" expected\n",
        forecast.accumulation.inches
    ));
    match forecast.wind_from.filter(|_| !rec.insufficient_data) {
        Some(from) => out.push_str(&format!(
            "  💨 Peak winds: {:.1} mph from {from}\n",
            forecast.peak_wind_mph
        )),
        None => out.push_str(&format!(
            "  💨 Peak winds: {:.1} mph\n",
            forecast.peak_wind_mph
        )),
    }

    if rec.threshold_met() {
        // already met: warn only when new snow alone reaches it
        if forecast_alone_exceeds(rec) {
            out.push_str(&format!("  ⚠️  Will exceed {threshold}\" threshold again\n"));
        } else {
            out.push_str(&format!("  ✅ Stays below {threshold}\" threshold\n"));
        }
    } else if forecast.will_exceed_threshold {
        match forecast.hours_until_threshold {
            Some(hours) if hours > 0 => {
                out.push_str(&format!("  ⚠️  Threshold in ~{hours}hrs\n"));
            },
            _ => out.push_str(&format!("  ⚠️  Will exceed {threshold}\" threshold\n")),
        }
    } else {
        out.push_str(&format!("  ✅ Stays below {threshold}\" threshold\n"));
    }
    out
}

fn forecast_alone_exceeds(rec: &Recommendation) -> bool {
    rec.thresholds
        .is_exceeded_by(rec.forecast.accumulation.inches)
}

fn recommendation_section(rec: &Recommendation) -> String {
    let threshold = rec.thresholds.accumulation_threshold();
    let past = rec.past_accumulation.inches;
    let current = &rec.current;

    let mut out = String::from("💡 Recommendation\n");
    match rec.verdict {
        ActionVerdict::ActNow => {
            out.push_str(&format!("  ✅ Snow: {past:.2}\" (threshold: {threshold}\")\n"));
            out.push_str(&format!(
                "  ✅ Wind: {:.1} mph (safe)\n\n",
                current.wind_speed_mph
            ));
            out.push_str(&format!("  📍 Blow Direction: {}\n", rec.blow_to));
            out.push_str(&format!(
                "  Wind flowing {} → {}\n",
                current.wind_from, rec.blow_to
            ));
            if forecast_alone_exceeds(rec) {
                out.push_str(&format!(
                    "\n  ⚠️  +{:.2}\" expected - may need to blow again\n",
                    rec.forecast.accumulation.inches
                ));
            }
        },
        ActionVerdict::WaitForWind => {
            let max_wind = rec.thresholds.max_wind_speed();
            out.push_str(&format!("  ✅ Snow: {past:.2}\" (threshold: {threshold}\")\n"));
            out.push_str(&format!(
                "  ❌ Wind: {:.1} mph (max: {max_wind} mph)\n\n",
                current.wind_speed_mph
            ));
            out.push_str(&format!("  💨 {}\n\n", current.wind_condition));
            out.push_str(&format!("  Wait for winds < {max_wind} mph\n"));
            out.push_str(&format!(
                "  If urgent, blow toward {} (downwind)\n",
                rec.blow_to
            ));
        },
        ActionVerdict::ForecastAlert | ActionVerdict::NoAction => {
            out.push_str(&format!(
                "  Current: {past:.2}\" | Threshold: {threshold}\"\n"
            ));
            out.push_str(&format!(
                "  Need {:.2}\" more to trigger\n",
                rec.remaining_inches
            ));
            if rec.verdict == ActionVerdict::ForecastAlert {
                out.push_str(&forecast_alert_block(rec));
            }
        },
    }
    out
}

fn forecast_alert_block(rec: &Recommendation) -> String {
    let forecast = &rec.forecast;

    let mut out = String::from("\n  ⚠️  Forecast Alert\n");
    out.push_str(&format!(
        "  +{:.2}\" expected in 24hrs\n",
        forecast.accumulation.inches
    ));
    if let Some(hours) = forecast.hours_until_threshold.filter(|h| *h > 0) {
        out.push_str(&format!("  Likely needed in ~{hours} hours\n"));
    }

    out.push('\n');
    if forecast.peak_wind_safe {
        out.push_str(&format!("  ✅ {}\n", forecast.safety_note));
        if let Some(blow_to) = forecast.blow_to.filter(|_| !rec.insufficient_data) {
            out.push_str(&format!("  Recommended direction: {blow_to}\n"));
        }
    } else {
        out.push_str(&format!(
            "  💨 Warning: peak winds ({:.1} mph). {}\n",
            forecast.peak_wind_mph, forecast.safety_note
        ));
    }
    out
}
