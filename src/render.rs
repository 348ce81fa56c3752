use crate::models::view::CountryViewModel;

/// Groups digits the way the `en-IN` locale does: the last three digits,
/// then pairs (`1234567` -> `12,34,567`).
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Plain-text detail screen for a country.
pub fn render_country(view: &CountryViewModel) -> String {
    let mut out = format!(
        "{name}\n\
         Flag: {flag}\n\
         \n\
         Native Name: {native}\n\
         Population: {population}\n\
         Region: {region}\n\
         Sub Region: {subregion}\n\
         Capital: {capital}\n\
         Top Level Domain: {tld}\n\
         Currencies: {currencies}\n\
         Languages: {languages}\n",
        name = view.name,
        flag = view.flag_url,
        native = view.display_native_name(),
        population = format_population(view.population),
        region = view.region,
        subregion = view.subregion,
        capital = view.capital_display(),
        tld = view.top_level_domains_display(),
        currencies = view.currencies_display,
        languages = view.languages_display,
    );

    if !view.borders.is_empty() {
        out.push_str(&format!("\nBorder Countries: {}\n", view.borders.join(", ")));
    }

    out
}

pub fn render_not_found() -> &'static str {
    "Country Not Found"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::country::RawCountryRecord;
    use crate::models::view::build_view_model;

    #[test]
    fn population_uses_indian_grouping() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(123456), "1,23,456");
        assert_eq!(format_population(1234567), "12,34,567");
        assert_eq!(format_population(1_380_004_385), "1,38,00,04,385");
    }

    #[test]
    fn renders_fallbacks_and_hides_empty_borders() {
        let mut record = RawCountryRecord::default();
        record.name.common = "Testland".to_string();
        record.population = 1000;
        let view = build_view_model(&record);

        let text = render_country(&view);

        assert!(text.starts_with("Testland\n"));
        assert!(text.contains("Native Name: Testland\n"));
        assert!(text.contains("Population: 1,000\n"));
        assert!(text.contains("Capital: N/A\n"));
        assert!(text.contains("Top Level Domain: N/A\n"));
        assert!(!text.contains("Border Countries"));
    }

    #[test]
    fn renders_resolved_borders() {
        let mut record = RawCountryRecord::default();
        record.name.common = "Testland".to_string();
        let mut view = build_view_model(&record);
        view.borders = vec!["Alpha".to_string(), "Gamma".to_string()];

        assert!(render_country(&view).contains("Border Countries: Alpha, Gamma\n"));
    }

    #[test]
    fn renders_every_field_in_order() {
        let mut record = RawCountryRecord::default();
        record.name.common = "Testland".to_string();
        record.population = 1234567;
        record.region = "Europe".to_string();
        record.subregion = Some("Western Europe".to_string());
        record.capital = Some(vec!["Testville".to_string()]);
        record.flags.svg = "https://flags.test/tl.svg".to_string();
        record.tld = Some(vec![".tl".to_string()]);
        let mut view = build_view_model(&record);
        view.languages_display = "Testish".to_string();
        view.currencies_display = "Test dollar".to_string();
        view.borders = vec!["Alpha".to_string()];

        assert_eq!(
            render_country(&view),
            "Testland\n\
             Flag: https://flags.test/tl.svg\n\
             \n\
             Native Name: Testland\n\
             Population: 12,34,567\n\
             Region: Europe\n\
             Sub Region: Western Europe\n\
             Capital: Testville\n\
             Top Level Domain: .tl\n\
             Currencies: Test dollar\n\
             Languages: Testish\n\
             \n\
             Border Countries: Alpha\n"
        );
    }
}
